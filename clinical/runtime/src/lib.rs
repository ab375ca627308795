//! Clinical Runtime
//!
//! The request-construction and validation layer shared by both service
//! clients, plus the default HTTP executor.
//!
//! A call flows through four steps:
//!
//! 1. [`validate`] rejects calls with missing required parameters, listing
//!    every missing name.
//! 2. [`build`] turns the operation definition and [`CallArguments`] into a
//!    [`RequestDescriptor`]: substituted path, query map (with the client's
//!    `version`), body, form data and headers.
//! 3. [`headers::merge`] layers SDK defaults, operation headers and caller
//!    overrides, in increasing priority.
//! 4. A [`RequestExecutor`] sends the descriptor; [`ReqwestExecutor`] is the
//!    default.
//!
//! [`Service`] ties these together behind `invoke(operation_id, args)`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use clinical_runtime::{CallArguments, Service};
//! use clinical_definitions::ANNOTATOR_FOR_CLINICAL_DATA;
//!
//! let service: Service = Service::builder(&ANNOTATOR_FOR_CLINICAL_DATA, "2023-03-31").build()?;
//! let response = service
//!     .invoke("getProfile", Some(CallArguments::new().with("id", "default")))
//!     .await?;
//! ```

pub mod args;
pub mod auth;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod executor;
pub mod headers;
pub mod response;
pub mod service;
pub mod testing;
pub mod validate;
pub mod value;

pub use args::CallArguments;
pub use auth::{ApiKey, Authenticator, BasicAuth, BearerToken, NoAuth, authenticator_from_env};
pub use config::{DEFAULT_TIMEOUT, ServiceConfig};
pub use descriptor::{FormPart, QueryValue, RequestBody, RequestDescriptor, build};
pub use error::{AuthError, BuildError, ClientError, ConfigError, SdkError, ValidationError};
pub use executor::{ReqwestExecutor, ReqwestExecutorBuilder, RequestExecutor};
pub use headers::Headers;
pub use response::{Response, ResponseBody};
pub use service::{Service, ServiceBuilder};
pub use validate::validate;
pub use value::{FilePart, Value};
