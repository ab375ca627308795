//! Top-level SDK error type.

use clinical_define::DefinitionError;
use thiserror::Error;

use super::{AuthError, BuildError, ClientError, ConfigError, ValidationError};

/// Top-level error type for all service calls.
///
/// ## Examples
///
/// ```
/// use clinical_runtime::error::{SdkError, ValidationError};
///
/// let err: SdkError = ValidationError::new("getProfile", vec!["id".into()]).into();
/// assert!(err.to_string().contains("Missing required parameters"));
/// assert_eq!(err.missing_parameters(), Some(&["id".to_string()][..]));
/// ```
#[derive(Debug, Error)]
pub enum SdkError {
    /// Required parameters were missing; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Arguments could not be placed into a request; nothing was sent.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// HTTP transport or status errors.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed operation table.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// The service has no operation with this id.
    #[error("Unknown operation `{operation}` for service {service}")]
    UnknownOperation { service: String, operation: String },
}

impl SdkError {
    /// Returns `true` if the call was rejected locally for missing parameters.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The missing parameter names of a validation failure.
    pub fn missing_parameters(&self) -> Option<&[String]> {
        match self {
            Self::Validation(e) => Some(&e.missing),
            _ => None,
        }
    }

    /// The HTTP status code, if the service answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::Auth(AuthError::AuthenticationFailed { .. }) => Some(401),
            Self::Auth(AuthError::InsufficientPermissions { .. }) => Some(403),
            _ => None,
        }
    }
}
