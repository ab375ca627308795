//! Service configuration errors.

use thiserror::Error;

/// Errors in client configuration, raised while building a service.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The service URL does not parse.
    #[error("Invalid service URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// The service URL is not http or https.
    #[error("Unsupported URL scheme `{scheme}` in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// The API version is not a `YYYY-MM-DD` date.
    #[error("Invalid version `{version}`: expected a YYYY-MM-DD date")]
    InvalidVersion {
        version: String,
        source: chrono::ParseError,
    },

    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let err = ConfigError::missing_field("version");
        assert_eq!(err.to_string(), "Missing required field: version");
    }

    #[test]
    fn test_invalid_url() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid service URL `not a url`"));
    }

    #[test]
    fn test_invalid_version() {
        let source = chrono::NaiveDate::parse_from_str("yesterday", "%Y-%m-%d").unwrap_err();
        let err = ConfigError::InvalidVersion {
            version: "yesterday".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "Invalid version `yesterday`: expected a YYYY-MM-DD date"
        );
    }
}
