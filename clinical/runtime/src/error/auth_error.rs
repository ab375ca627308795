//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to service authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A credential required by the selected auth type is not configured.
    #[error("Missing credential: set {variable}")]
    MissingCredential {
        /// Environment variable that should hold the credential.
        variable: String,
    },

    /// The configured auth type is not one of the supported kinds.
    #[error("Unsupported auth type `{value}` (expected noauth, bearertoken, basic or apikey)")]
    UnsupportedAuthType { value: String },

    /// A credential cannot be represented as an HTTP header.
    #[error("Invalid credential for header {header}")]
    InvalidCredential { header: String },

    /// Server rejected the credentials.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// Credentials were accepted but do not grant the operation.
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The operation that was denied.
        operation: String,
    },
}

impl AuthError {
    /// Returns `true` when the service rejected the request, as opposed to
    /// a local configuration problem.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. } | Self::InsufficientPermissions { .. }
        )
    }
}
