//! Request authenticators.
//!
//! An [`Authenticator`] decorates the headers of every outgoing request. The
//! executor applies it just before sending, so descriptors produced by
//! [`build`](crate::build) never contain credentials.

use std::env;
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::AuthError;
use crate::headers::{AUTHORIZATION, Headers};

/// Header used by [`ApiKey`] when none is configured.
pub const DEFAULT_APIKEY_HEADER: &str = "X-API-Key";

/// Adds credentials to outgoing requests.
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Short name of the scheme, as accepted by `{PREFIX}_AUTH_TYPE`.
    fn auth_type(&self) -> &'static str;

    /// Adds credentials to `headers`.
    fn authenticate(&self, headers: &mut Headers) -> Result<(), AuthError>;
}

/// Sends requests unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authenticator for NoAuth {
    fn auth_type(&self) -> &'static str {
        "noauth"
    }

    fn authenticate(&self, _headers: &mut Headers) -> Result<(), AuthError> {
        Ok(())
    }
}

/// `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken").field("token", &"<redacted>").finish()
    }
}

impl Authenticator for BearerToken {
    fn auth_type(&self) -> &'static str {
        "bearertoken"
    }

    fn authenticate(&self, headers: &mut Headers) -> Result<(), AuthError> {
        headers.insert(AUTHORIZATION, format!("Bearer {}", self.token));
        Ok(())
    }
}

/// `Authorization: Basic base64(username:password)`.
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BasicAuth {
    fn auth_type(&self) -> &'static str {
        "basic"
    }

    fn authenticate(&self, headers: &mut Headers) -> Result<(), AuthError> {
        if self.username.contains(':') {
            return Err(AuthError::InvalidCredential {
                header: AUTHORIZATION.to_string(),
            });
        }
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        headers.insert(AUTHORIZATION, format!("Basic {encoded}"));
        Ok(())
    }
}

/// An API key sent in a custom header.
#[derive(Clone)]
pub struct ApiKey {
    header: String,
    key: String,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_header(DEFAULT_APIKEY_HEADER, key)
    }

    pub fn with_header(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("header", &self.header)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Authenticator for ApiKey {
    fn auth_type(&self) -> &'static str {
        "apikey"
    }

    fn authenticate(&self, headers: &mut Headers) -> Result<(), AuthError> {
        if self.header.trim().is_empty() {
            return Err(AuthError::InvalidCredential {
                header: self.header.clone(),
            });
        }
        headers.insert(self.header.clone(), self.key.clone());
        Ok(())
    }
}

/// Builds an authenticator from `{prefix}_*` environment variables.
///
/// `{prefix}_AUTH_TYPE` selects the scheme (`noauth`, `bearertoken`,
/// `basic`, `apikey`). Without it, the scheme is inferred from whichever
/// credential variables are set. Returns `Ok(None)` when nothing is
/// configured.
///
/// | Variable | Used by |
/// |---|---|
/// | `{prefix}_BEARER_TOKEN` | `bearertoken` |
/// | `{prefix}_USERNAME`, `{prefix}_PASSWORD` | `basic` |
/// | `{prefix}_APIKEY`, `{prefix}_APIKEY_HEADER` | `apikey` |
pub fn authenticator_from_env(prefix: &str) -> Result<Option<Box<dyn Authenticator>>, AuthError> {
    let var = |suffix: &str| env::var(format!("{prefix}_{suffix}")).ok().filter(|v| !v.is_empty());
    let require = |suffix: &str| {
        var(suffix).ok_or_else(|| AuthError::MissingCredential {
            variable: format!("{prefix}_{suffix}"),
        })
    };

    let auth_type = match var("AUTH_TYPE") {
        Some(value) => value.to_ascii_lowercase(),
        None if var("BEARER_TOKEN").is_some() => "bearertoken".to_string(),
        None if var("APIKEY").is_some() => "apikey".to_string(),
        None if var("USERNAME").is_some() => "basic".to_string(),
        None => return Ok(None),
    };

    let authenticator: Box<dyn Authenticator> = match auth_type.as_str() {
        "noauth" => Box::new(NoAuth),
        "bearertoken" | "bearer" => Box::new(BearerToken::new(require("BEARER_TOKEN")?)),
        "basic" => Box::new(BasicAuth::new(require("USERNAME")?, require("PASSWORD")?)),
        "apikey" => {
            let header = var("APIKEY_HEADER").unwrap_or_else(|| DEFAULT_APIKEY_HEADER.to_string());
            Box::new(ApiKey::with_header(header, require("APIKEY")?))
        }
        _ => return Err(AuthError::UnsupportedAuthType { value: auth_type }),
    };
    Ok(Some(authenticator))
}
