//! Client-wide configuration.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use crate::error::ConfigError;
use crate::headers::Headers;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Format of the `version` query parameter.
pub const VERSION_FORMAT: &str = "%Y-%m-%d";

/// Configuration shared by every call of one service client.
///
/// ## Examples
///
/// ```
/// use clinical_runtime::ServiceConfig;
///
/// let config = ServiceConfig::new(
///     "annotator_for_clinical_data",
///     "https://example.com/api/",
///     "2023-03-31",
/// )
/// .unwrap();
/// assert_eq!(config.service_url, "https://example.com/api");
///
/// assert!(ServiceConfig::new("svc", "https://example.com", "31/03/2023").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceConfig {
    /// Snake-case service name, reported in the analytics header.
    pub service_name: String,
    /// Base URL without a trailing slash.
    pub service_url: String,
    /// API revision date sent as `version` on every request.
    pub version: String,
    /// Headers added to every request, below operation and caller headers.
    pub default_headers: Headers,
}

impl ServiceConfig {
    /// Creates a validated configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL is not an http(s) URL or the version is not
    /// a `YYYY-MM-DD` date.
    pub fn new(
        service_name: impl Into<String>,
        service_url: impl AsRef<str>,
        version: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let version = version.into();
        parse_version(&version)?;
        let service_url = normalize_url(service_url.as_ref())?;

        Ok(Self {
            service_name: service_name.into(),
            service_url,
            version,
            default_headers: Headers::new(),
        })
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name, value);
        self
    }
}

/// Parses an API version date.
pub fn parse_version(version: &str) -> Result<NaiveDate, ConfigError> {
    if version.is_empty() {
        return Err(ConfigError::missing_field("version"));
    }
    NaiveDate::parse_from_str(version, VERSION_FORMAT).map_err(|source| {
        ConfigError::InvalidVersion {
            version: version.to_string(),
            source,
        }
    })
}

/// Validates a service URL and strips trailing slashes.
pub fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::missing_field("service_url"));
    }
    let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
