//! Convenient re-exports for writing operation tables.
//!
//! ```
//! use clinical_define::prelude::*;
//!
//! static HEALTH: OperationSpec = OperationSpec {
//!     id: "getHealthCheckStatus",
//!     method: RestMethod::Get,
//!     path: "/v1/status/health_check",
//!     description: "Reports service health",
//!     params: &[ParameterSpec::query("format", "format")],
//!     accept: Some(media::APPLICATION_JSON),
//!     content_type: None,
//! };
//! ```

pub use crate::error::DefinitionError;
pub use crate::media;
pub use crate::operation::OperationSpec;
pub use crate::parameter::{ArrayStyle, BodyEncoding, ParamRole, ParameterSpec};
pub use crate::service::ServiceSpec;
pub use crate::types::RestMethod;
