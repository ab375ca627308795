//! Service definitions.

use serde::Serialize;

use crate::error::DefinitionError;
use crate::operation::OperationSpec;

/// A remote service: identity, default location and its operation table.
///
/// ## Examples
///
/// ```
/// use clinical_define::{OperationSpec, RestMethod, ServiceSpec, media};
///
/// static OPERATIONS: &[OperationSpec] = &[OperationSpec {
///     id: "getHealthCheckStatus",
///     method: RestMethod::Get,
///     path: "/v1/status/health_check",
///     description: "Reports service health",
///     params: &[],
///     accept: Some(media::APPLICATION_JSON),
///     content_type: None,
/// }];
///
/// static SERVICE: ServiceSpec = ServiceSpec {
///     name: "example_service",
///     display_name: "Example Service",
///     api_version: "v1",
///     default_url: "https://example.com/api",
///     operations: OPERATIONS,
/// };
///
/// assert!(SERVICE.validate().is_ok());
/// assert!(SERVICE.find("getHealthCheckStatus").is_some());
/// assert_eq!(SERVICE.env_prefix(), "EXAMPLE_SERVICE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    /// Snake-case service name, used for SDK analytics headers and the
    /// environment variable prefix.
    pub name: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Major API version, e.g. `v1`.
    pub api_version: &'static str,
    /// Service URL used when none is configured.
    pub default_url: &'static str,
    /// All operations of the service.
    pub operations: &'static [OperationSpec],
}

impl ServiceSpec {
    /// Looks up an operation by id.
    pub fn find(&self, operation_id: &str) -> Option<&'static OperationSpec> {
        self.operations.iter().find(|op| op.id == operation_id)
    }

    /// Returns the prefix for environment variables (`annotator_for_clinical_data`
    /// becomes `ANNOTATOR_FOR_CLINICAL_DATA`).
    pub fn env_prefix(&self) -> String {
        self.name.to_ascii_uppercase().replace('-', "_")
    }

    /// Validates every operation and rejects duplicate operation ids.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        for (index, op) in self.operations.iter().enumerate() {
            op.validate()?;
            if self.operations[..index].iter().any(|o| o.id == op.id) {
                return Err(DefinitionError::DuplicateOperation {
                    service: self.name.to_string(),
                    operation: op.id.to_string(),
                });
            }
        }
        Ok(())
    }
}
