//! Clinical Operation Definitions
//!
//! This crate provides the static primitives used to describe the remote
//! operations of the clinical services. Every operation is a plain
//! [`OperationSpec`] value living in a `static` table; nothing here performs
//! I/O or holds mutable state.
//!
//! ## Core Types
//!
//! - [`RestMethod`] - HTTP methods used by the services (GET, POST, PUT, DELETE)
//! - [`OperationSpec`] - A single remote operation: method, path template, parameters
//! - [`ParameterSpec`] - One parameter with its role, wire name and required flag
//! - [`ParamRole`] - Where a parameter lands in the request (path, query, body, ...)
//! - [`ArrayStyle`] - How list values are written to the query string
//! - [`BodyEncoding`] - How an opaque body value is serialized
//! - [`ServiceSpec`] - A named service with its default URL and operation table
//!
//! ## Examples
//!
//! ```
//! use clinical_define::{OperationSpec, ParameterSpec, RestMethod, media};
//!
//! static GET_PROFILE: OperationSpec = OperationSpec {
//!     id: "getProfile",
//!     method: RestMethod::Get,
//!     path: "/v1/profiles/{id}",
//!     description: "Returns a profile",
//!     params: &[ParameterSpec::path("id", "id")],
//!     accept: Some(media::APPLICATION_JSON),
//!     content_type: None,
//! };
//!
//! assert!(GET_PROFILE.validate().is_ok());
//! assert_eq!(GET_PROFILE.required_params(), vec!["id"]);
//! ```

pub mod error;
pub mod media;
pub mod operation;
pub mod parameter;
pub mod prelude;
pub mod service;
pub mod types;

pub use error::DefinitionError;
pub use operation::OperationSpec;
pub use parameter::{ArrayStyle, BodyEncoding, ParamRole, ParameterSpec};
pub use service::ServiceSpec;
pub use types::RestMethod;
