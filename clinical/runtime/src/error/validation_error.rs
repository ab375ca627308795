//! Missing required parameter errors.

use thiserror::Error;

/// One or more required parameters were not supplied.
///
/// Every missing name is reported, in declaration order, so that a single
/// failed call tells the caller everything it has to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required parameters: {}", .missing.join(", "))]
pub struct ValidationError {
    /// The operation that was called.
    pub operation: String,
    /// Local names of the missing parameters.
    pub missing: Vec<String>,
}

impl ValidationError {
    pub fn new(operation: impl Into<String>, missing: Vec<String>) -> Self {
        Self {
            operation: operation.into(),
            missing,
        }
    }
}
