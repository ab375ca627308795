//! Layered error types for the runtime.
//!
//! - [`SdkError`] - Top-level error returned by every service call
//! - [`ValidationError`] - Required parameters missing from a call
//! - [`BuildError`] - Arguments that cannot be placed into a request
//! - [`ClientError`] - HTTP transport and status errors
//! - [`AuthError`] - Credential and authorization errors
//! - [`ConfigError`] - Invalid service configuration

mod auth_error;
mod build_error;
mod client_error;
mod config_error;
mod sdk_error;
mod validation_error;

pub use auth_error::AuthError;
pub use build_error::BuildError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use sdk_error::SdkError;
pub use validation_error::ValidationError;
