//! Request construction errors.

use clinical_define::DefinitionError;
use thiserror::Error;

/// Errors while turning validated arguments into a request descriptor.
///
/// These indicate programmer errors: a value of the wrong shape for its
/// parameter role, or an operation table that does not hold together.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A path placeholder has no value. Validation normally prevents this.
    #[error("{operation}: no value for path parameter `{parameter}`")]
    MissingPathParameter {
        operation: String,
        parameter: String,
    },

    /// The value cannot be written to the parameter's location.
    #[error("{operation}: parameter `{parameter}` {reason}")]
    UnsupportedValue {
        operation: String,
        parameter: String,
        reason: &'static str,
    },

    /// The operation definition itself is malformed.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

impl BuildError {
    pub(crate) fn unsupported(operation: &str, parameter: &str, reason: &'static str) -> Self {
        Self::UnsupportedValue {
            operation: operation.to_string(),
            parameter: parameter.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_parameter_display() {
        let err = BuildError::MissingPathParameter {
            operation: "getProfile".to_string(),
            parameter: "id".to_string(),
        };
        assert_eq!(err.to_string(), "getProfile: no value for path parameter `id`");
    }

    #[test]
    fn test_unsupported_value_display() {
        let err = BuildError::unsupported("createProfile", "newId", "cannot be a file in a JSON body");
        assert_eq!(
            err.to_string(),
            "createProfile: parameter `newId` cannot be a file in a JSON body"
        );
    }
}
