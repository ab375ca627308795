//! Errors raised when an operation table violates its invariants.

use thiserror::Error;

/// An inconsistency inside an operation definition.
///
/// These are programmer errors in the static tables; the definition tests run
/// [`ServiceSpec::validate`](crate::ServiceSpec::validate) over every table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// A `{placeholder}` in the path has no matching path parameter.
    #[error("operation '{operation}': placeholder '{{{placeholder}}}' has no path parameter")]
    UnboundPlaceholder {
        /// Operation id.
        operation: String,
        /// Placeholder name found in the template.
        placeholder: String,
    },

    /// A path parameter's wire name does not appear in the path template.
    #[error("operation '{operation}': path parameter '{parameter}' is missing from the template")]
    UnusedPathParameter {
        /// Operation id.
        operation: String,
        /// Local parameter name.
        parameter: String,
    },

    /// A header parameter was marked required.
    #[error("operation '{operation}': header parameter '{parameter}' cannot be required")]
    RequiredHeader {
        /// Operation id.
        operation: String,
        /// Local parameter name.
        parameter: String,
    },

    /// Two parameters of one operation share a local name.
    #[error("operation '{operation}': duplicate parameter '{parameter}'")]
    DuplicateParameter {
        /// Operation id.
        operation: String,
        /// Local parameter name.
        parameter: String,
    },

    /// An operation mixes an opaque body with body fields or form fields.
    #[error("operation '{operation}': conflicting body parameters")]
    ConflictingBody {
        /// Operation id.
        operation: String,
    },

    /// The path template has an unclosed or empty placeholder.
    #[error("operation '{operation}': malformed path template '{path}'")]
    MalformedPath {
        /// Operation id.
        operation: String,
        /// The offending template.
        path: String,
    },

    /// Two operations of one service share an id.
    #[error("service '{service}': duplicate operation id '{operation}'")]
    DuplicateOperation {
        /// Service name.
        service: String,
        /// Operation id.
        operation: String,
    },
}
