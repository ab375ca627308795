//! Operation definitions.

use serde::Serialize;

use crate::error::DefinitionError;
use crate::parameter::{ParamRole, ParameterSpec};
use crate::types::RestMethod;

/// Static description of one remote operation.
///
/// ## Path Parameters
///
/// Paths use `{wire_name}` placeholders: `/v1/corpora/{corpus}/documents/{document_id}`.
/// Every placeholder must be backed by a [`ParamRole::Path`] parameter with the
/// same wire name, and every path parameter must appear in the template. Run
/// [`validate`](Self::validate) to check.
///
/// ## Examples
///
/// ```
/// use clinical_define::{OperationSpec, ParameterSpec, RestMethod, media};
///
/// static GET_DOCUMENT_INFO: OperationSpec = OperationSpec {
///     id: "getDocumentInfo",
///     method: RestMethod::Get,
///     path: "/v1/corpora/{corpus}/documents/{document_id}",
///     description: "Gets document details",
///     params: &[
///         ParameterSpec::path("corpus", "corpus"),
///         ParameterSpec::path("documentId", "document_id"),
///         ParameterSpec::query("verbose", "verbose"),
///     ],
///     accept: Some(media::APPLICATION_JSON),
///     content_type: None,
/// };
///
/// assert_eq!(
///     GET_DOCUMENT_INFO.path_placeholders().unwrap(),
///     vec!["corpus", "document_id"]
/// );
/// assert_eq!(GET_DOCUMENT_INFO.required_params(), vec!["corpus", "documentId"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationSpec {
    /// Operation id in camelCase (e.g. `getProfile`).
    pub id: &'static str,
    /// HTTP method.
    pub method: RestMethod,
    /// Path template relative to the service URL.
    pub path: &'static str,
    /// Human-readable summary.
    pub description: &'static str,
    /// Parameters in declaration order.
    pub params: &'static [ParameterSpec],
    /// Default `Accept` header. `None` leaves `Accept` unset.
    pub accept: Option<&'static str>,
    /// Default `Content-Type` header for the request body.
    pub content_type: Option<&'static str>,
}

impl OperationSpec {
    /// Local names of the required parameters, in declaration order.
    pub fn required_params(&self) -> Vec<&'static str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect()
    }

    /// Parameters with the given role, in declaration order.
    pub fn params_with_role(&self, role: ParamRole) -> impl Iterator<Item = &ParameterSpec> {
        self.params.iter().filter(move |p| p.role == role)
    }

    /// Looks up a parameter by local name.
    pub fn param(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Returns `true` if this operation sends a multipart body.
    pub fn is_multipart(&self) -> bool {
        self.params_with_role(ParamRole::FormField).next().is_some()
    }

    /// Extracts placeholder names from the path template in order of appearance.
    ///
    /// ## Errors
    ///
    /// Returns [`DefinitionError::MalformedPath`] for an unclosed, nested or
    /// empty placeholder.
    pub fn path_placeholders(&self) -> Result<Vec<&'static str>, DefinitionError> {
        let path: &'static str = self.path;
        let malformed = || DefinitionError::MalformedPath {
            operation: self.id.to_string(),
            path: path.to_string(),
        };

        let mut placeholders = Vec::new();
        let mut rest = path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(malformed)?;
            let name = &after[..end];
            if name.is_empty() || name.contains('{') {
                return Err(malformed());
            }
            placeholders.push(name);
            rest = &after[end + 1..];
        }
        if rest.contains('}') {
            return Err(malformed());
        }
        Ok(placeholders)
    }

    /// Checks the invariants of this definition.
    ///
    /// - every placeholder has a path parameter and vice versa
    /// - header parameters are optional
    /// - local names are unique
    /// - an opaque body is not mixed with body fields or form fields
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let placeholders = self.path_placeholders()?;

        for placeholder in &placeholders {
            let bound = self
                .params_with_role(ParamRole::Path)
                .any(|p| p.wire_name == *placeholder);
            if !bound {
                return Err(DefinitionError::UnboundPlaceholder {
                    operation: self.id.to_string(),
                    placeholder: placeholder.to_string(),
                });
            }
        }

        for (index, param) in self.params.iter().enumerate() {
            if param.role == ParamRole::Path && !placeholders.contains(&param.wire_name) {
                return Err(DefinitionError::UnusedPathParameter {
                    operation: self.id.to_string(),
                    parameter: param.name.to_string(),
                });
            }
            if param.role == ParamRole::Header && param.required {
                return Err(DefinitionError::RequiredHeader {
                    operation: self.id.to_string(),
                    parameter: param.name.to_string(),
                });
            }
            if self.params[..index].iter().any(|p| p.name == param.name) {
                return Err(DefinitionError::DuplicateParameter {
                    operation: self.id.to_string(),
                    parameter: param.name.to_string(),
                });
            }
        }

        let opaque = self.params_with_role(ParamRole::Body).count();
        let fields = self.params_with_role(ParamRole::BodyField).count();
        let parts = self.params_with_role(ParamRole::FormField).count();
        let body_kinds = [opaque > 0, fields > 0, parts > 0]
            .into_iter()
            .filter(|present| *present)
            .count();
        if opaque > 1 || body_kinds > 1 {
            return Err(DefinitionError::ConflictingBody {
                operation: self.id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media;

    macro_rules! params {
        ($($param:expr),* $(,)?) => {{
            const PARAMS: &[ParameterSpec] = &[$($param),*];
            PARAMS
        }};
    }

    fn op(path: &'static str, params: &'static [ParameterSpec]) -> OperationSpec {
        OperationSpec {
            id: "testOp",
            method: RestMethod::Get,
            path,
            description: "test",
            params,
            accept: Some(media::APPLICATION_JSON),
            content_type: None,
        }
    }

    #[test]
    fn placeholders_in_order() {
        let spec = op(
            "/v1/corpora/{corpus}/concepts/{name_or_id}/related_concepts",
            params![
                ParameterSpec::path("corpus", "corpus"),
                ParameterSpec::path("nameOrId", "name_or_id"),
            ],
        );
        assert_eq!(spec.path_placeholders().unwrap(), vec!["corpus", "name_or_id"]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn no_placeholders() {
        let spec = op("/v1/profiles", &[]);
        assert!(spec.path_placeholders().unwrap().is_empty());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn malformed_templates_are_rejected() {
        for path in ["/v1/profiles/{id", "/v1/profiles/{}", "/v1/profiles/id}", "/v1/{a{b}}"] {
            let spec = op(path, &[]);
            assert!(
                matches!(spec.path_placeholders(), Err(DefinitionError::MalformedPath { .. })),
                "expected malformed: {path}"
            );
        }
    }

    #[test]
    fn placeholder_without_parameter() {
        let spec = op("/v1/profiles/{id}", &[]);
        assert!(matches!(
            spec.validate(),
            Err(DefinitionError::UnboundPlaceholder { placeholder, .. }) if placeholder == "id"
        ));
    }

    #[test]
    fn placeholder_matches_wire_name_not_local_name() {
        let spec = op(
            "/v1/analyze/{flow_id}",
            params![ParameterSpec::path("flowId", "flow_id")],
        );
        assert!(spec.validate().is_ok());

        let spec = op(
            "/v1/analyze/{flowId}",
            params![ParameterSpec::path("flowId", "flow_id")],
        );
        assert!(spec.validate().is_err());
    }

    #[test]
    fn path_parameter_missing_from_template() {
        let spec = op("/v1/profiles", params![ParameterSpec::path("id", "id")]);
        assert!(matches!(
            spec.validate(),
            Err(DefinitionError::UnusedPathParameter { parameter, .. }) if parameter == "id"
        ));
    }

    #[test]
    fn required_header_is_rejected() {
        let spec = op(
            "/v1/analyze",
            params![ParameterSpec::header("contentType", "Content-Type").required()],
        );
        assert!(matches!(
            spec.validate(),
            Err(DefinitionError::RequiredHeader { .. })
        ));
    }

    #[test]
    fn duplicate_parameter_is_rejected() {
        let spec = op(
            "/v1/profiles",
            params![
                ParameterSpec::query("verbose", "verbose"),
                ParameterSpec::body_field("verbose", "verbose"),
            ],
        );
        assert!(matches!(
            spec.validate(),
            Err(DefinitionError::DuplicateParameter { .. })
        ));
    }

    #[test]
    fn opaque_body_cannot_mix_with_fields() {
        let spec = op(
            "/v1/search",
            params![
                ParameterSpec::body("body"),
                ParameterSpec::body_field("newId", "id"),
            ],
        );
        assert!(matches!(
            spec.validate(),
            Err(DefinitionError::ConflictingBody { .. })
        ));
    }

    #[test]
    fn required_params_in_declaration_order() {
        let spec = op(
            "/v1/corpora/{corpus}/concepts/{name_or_id}/related_concepts",
            params![
                ParameterSpec::path("corpus", "corpus"),
                ParameterSpec::path("nameOrId", "name_or_id"),
                ParameterSpec::query("relationship", "relationship").required(),
                ParameterSpec::query("ontology", "ontology"),
            ],
        );
        assert_eq!(
            spec.required_params(),
            vec!["corpus", "nameOrId", "relationship"]
        );
        assert_eq!(spec.param("ontology").map(|p| p.wire_name), Some("ontology"));
        assert!(spec.param("missing").is_none());
    }

    #[test]
    fn multipart_detection() {
        let spec = op(
            "/v1/cartridges",
            params![ParameterSpec::form_field("archiveFile", "archive_file")],
        );
        assert!(spec.is_multipart());
        assert!(!op("/v1/cartridges", &[]).is_multipart());
    }
}
