//! CLI errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clinical_sdk::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// A `--arg` or `--header` value that does not parse.
    #[error("Invalid {flag} `{value}`: {reason}")]
    InvalidFlag {
        flag: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown operation `{operation}`. Run `clinical operations {service}` to list them.")]
    UnknownOperation { service: String, operation: String },

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Exit code: 2 for usage problems (bad flags, missing parameters), 1
    /// otherwise.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidFlag { .. } | Self::UnknownOperation { .. } => ExitCode::from(2),
            Self::Sdk(err) if err.is_validation() => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        let err = CliError::InvalidFlag {
            flag: "--arg",
            value: "nope".to_string(),
            reason: "expected NAME=VALUE",
        };
        assert_eq!(err.exit_code(), ExitCode::from(2));
        assert_eq!(err.to_string(), "Invalid --arg `nope`: expected NAME=VALUE");
    }

    #[test]
    fn remote_errors_exit_with_one() {
        let err = CliError::Sdk(SdkError::UnknownOperation {
            service: "s".to_string(),
            operation: "o".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::FAILURE);
    }
}
