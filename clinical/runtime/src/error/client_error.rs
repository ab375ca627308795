//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP transport.
///
/// These are produced by the request executor and are returned to callers
/// without reinterpretation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status} {status_text}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Canonical reason phrase of the status.
        status_text: String,
        /// Response body, usually the service's error document.
        body: String,
    },

    /// A header name or value cannot be sent.
    #[error("Invalid header `{name}`: {message}")]
    InvalidHeader { name: String, message: String },

    /// The resolved request URL does not parse.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body could not be decoded into the requested type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    ///
    /// Connection failures, timeouts, 5xx and 429 responses qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> ClientError {
        ClientError::HttpStatus {
            status,
            status_text: String::new(),
            body: String::new(),
        }
    }

    #[test]
    fn test_500_is_retryable() {
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
    }

    #[test]
    fn test_429_is_retryable() {
        assert!(status(429).is_retryable());
    }

    #[test]
    fn test_400_not_retryable() {
        assert!(!status(400).is_retryable());
        assert!(!status(404).is_retryable());
    }

    #[test]
    fn test_status_code_extraction() {
        assert_eq!(status(404).status_code(), Some(404));

        let err = ClientError::InvalidHeader {
            name: "X".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.status_code(), None);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_http_status_display() {
        let err = ClientError::HttpStatus {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: "{\"code\":500}".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error: {\"code\":500}");
    }
}
