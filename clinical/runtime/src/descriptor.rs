//! Request descriptors and the builder that produces them.
//!
//! [`build`] turns an [`OperationSpec`] plus [`CallArguments`] into a
//! [`RequestDescriptor`]: a transport-neutral, fully resolved request. It is
//! deterministic and performs no I/O, so two builds from equal inputs are
//! equal.

use std::collections::BTreeMap;

use bytes::Bytes;
use clinical_define::{
    ArrayStyle, BodyEncoding, OperationSpec, ParamRole, ParameterSpec, RestMethod, media,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::args::CallArguments;
use crate::config::ServiceConfig;
use crate::error::BuildError;
use crate::headers::{self, ACCEPT, CONTENT_TYPE, Headers, SDK_ANALYTICS, USER_AGENT};
use crate::value::{FilePart, Value, byte_len, json_param_string};

/// Characters left unescaped in path segments (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Query parameter carrying the API revision date.
pub const VERSION_PARAM: &str = "version";

/// `User-Agent` sent with every request.
pub const SDK_USER_AGENT: &str = concat!("clinical-sdk/", env!("CARGO_PKG_VERSION"));

/// A resolved, ready-to-send request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub operation_id: &'static str,
    pub method: RestMethod,
    /// Service URL joined with the substituted path, without query string.
    pub url: String,
    pub path_template: &'static str,
    /// Raw (unencoded) path values by placeholder name.
    pub path_params: BTreeMap<String, String>,
    /// Query values by wire name; absent arguments have no key.
    pub query: BTreeMap<String, QueryValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub form_data: BTreeMap<String, FormPart>,
    pub headers: Headers,
}

impl RequestDescriptor {
    /// Query pairs in wire order, repeated keys expanded.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .flat_map(|(key, value)| value.values().into_iter().map(move |v| (key.as_str(), v)))
            .collect()
    }
}

/// One query key's value(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    /// Sent as a repeated key.
    Multi(Vec<String>),
}

impl QueryValue {
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(v) => vec![v.as_str()],
            Self::Multi(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

/// A request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum RequestBody {
    Json(serde_json::Value),
    /// A string sent byte-for-byte.
    Text(String),
    #[serde(serialize_with = "byte_len")]
    Binary(Bytes),
}

/// One part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPart {
    #[serde(rename = "length", serialize_with = "byte_len")]
    pub data: Bytes,
    pub content_type: String,
    pub filename: Option<String>,
}

/// Builds the descriptor for one call.
///
/// Arguments are expected to have passed validation; a missing path value
/// is still reported as [`BuildError::MissingPathParameter`].
///
/// ## Examples
///
/// ```
/// use clinical_define::{OperationSpec, ParameterSpec, RestMethod};
/// use clinical_runtime::{CallArguments, ServiceConfig, build};
///
/// static GET_PROFILE: OperationSpec = OperationSpec {
///     id: "getProfile",
///     method: RestMethod::Get,
///     path: "/v1/profiles/{id}",
///     description: "Get a profile",
///     params: &[ParameterSpec::path("id", "id")],
///     accept: Some("application/json"),
///     content_type: None,
/// };
///
/// let config = ServiceConfig::new("svc", "https://example.com/api", "2023-03-31").unwrap();
/// let args = CallArguments::new().with("id", "a b");
/// let request = build(&GET_PROFILE, &config, &args).unwrap();
///
/// assert_eq!(request.url, "https://example.com/api/v1/profiles/a%20b");
/// assert_eq!(request.path_params["id"], "a b");
/// assert_eq!(request.query_pairs(), vec![("version", "2023-03-31")]);
/// ```
pub fn build(
    spec: &OperationSpec,
    config: &ServiceConfig,
    args: &CallArguments,
) -> Result<RequestDescriptor, BuildError> {
    let (path, path_params) = resolve_path(spec, args)?;
    let query = build_query(spec, config, args)?;
    let body = build_body(spec, args)?;
    let form_data = build_form(spec, args)?;

    let defaults = default_headers(spec, config);
    let computed = computed_headers(spec, args, body.as_ref(), !form_data.is_empty());
    let headers = headers::merge(&defaults, &computed, args.headers());

    Ok(RequestDescriptor {
        operation_id: spec.id,
        method: spec.method,
        url: format!("{}{}", config.service_url.trim_end_matches('/'), path),
        path_template: spec.path,
        path_params,
        query,
        body,
        form_data,
        headers,
    })
}

fn resolve_path(
    spec: &OperationSpec,
    args: &CallArguments,
) -> Result<(String, BTreeMap<String, String>), BuildError> {
    let mut path = spec.path.to_string();
    let mut params = BTreeMap::new();

    for param in spec.params_with_role(ParamRole::Path) {
        let raw = args
            .get(param.name)
            .ok_or_else(|| BuildError::MissingPathParameter {
                operation: spec.id.to_string(),
                parameter: param.name.to_string(),
            })?
            .to_param_string()
            .ok_or_else(|| BuildError::unsupported(spec.id, param.name, "cannot be a file in the path"))?;

        let encoded = utf8_percent_encode(&raw, PATH_SEGMENT).to_string();
        path = path.replace(&format!("{{{}}}", param.wire_name), &encoded);
        params.insert(param.wire_name.to_string(), raw);
    }

    Ok((path, params))
}

fn build_query(
    spec: &OperationSpec,
    config: &ServiceConfig,
    args: &CallArguments,
) -> Result<BTreeMap<String, QueryValue>, BuildError> {
    let mut query = BTreeMap::new();

    for param in spec.params_with_role(ParamRole::Query) {
        let Some(value) = args.get(param.name) else {
            continue;
        };
        let json = value
            .as_json()
            .ok_or_else(|| BuildError::unsupported(spec.id, param.name, "cannot be a file in the query"))?;
        if let Some(value) = query_value(param, json) {
            query.insert(param.wire_name.to_string(), value);
        }
    }

    query.insert(VERSION_PARAM.to_string(), QueryValue::Single(config.version.clone()));
    Ok(query)
}

fn query_value(param: &ParameterSpec, json: &serde_json::Value) -> Option<QueryValue> {
    match json {
        serde_json::Value::Array(items) => {
            let items: Vec<String> = items.iter().filter_map(json_param_string).collect();
            if items.is_empty() {
                return None;
            }
            Some(match param.array_style {
                ArrayStyle::Multi => QueryValue::Multi(items),
                ArrayStyle::Csv => QueryValue::Single(items.join(",")),
            })
        }
        other => json_param_string(other).map(QueryValue::Single),
    }
}

fn build_body(spec: &OperationSpec, args: &CallArguments) -> Result<Option<RequestBody>, BuildError> {
    if let Some(param) = spec.params_with_role(ParamRole::Body).next() {
        return Ok(match args.get(param.name) {
            None => None,
            Some(Value::File(file)) => Some(RequestBody::Binary(file.data.clone())),
            Some(Value::Json(serde_json::Value::String(s)))
                if param.body_encoding == BodyEncoding::Verbatim =>
            {
                Some(RequestBody::Text(s.clone()))
            }
            Some(Value::Json(json)) => Some(RequestBody::Json(json.clone())),
        });
    }

    let mut fields = spec.params_with_role(ParamRole::BodyField).peekable();
    if fields.peek().is_none() {
        return Ok(None);
    }

    let mut object = serde_json::Map::new();
    for param in fields {
        match args.get(param.name) {
            None => {}
            Some(Value::Json(json)) => {
                object.insert(param.wire_name.to_string(), json.clone());
            }
            Some(Value::File(_)) => {
                return Err(BuildError::unsupported(
                    spec.id,
                    param.name,
                    "cannot be a file in a JSON body",
                ));
            }
        }
    }
    Ok(Some(RequestBody::Json(serde_json::Value::Object(object))))
}

fn build_form(
    spec: &OperationSpec,
    args: &CallArguments,
) -> Result<BTreeMap<String, FormPart>, BuildError> {
    let mut form = BTreeMap::new();

    for param in spec.params_with_role(ParamRole::FormField) {
        let part = match args.get(param.name) {
            None => continue,
            Some(Value::File(file)) => form_part(file),
            Some(Value::Json(json)) => FormPart {
                data: Bytes::from(json_param_string(json).unwrap_or_default()),
                content_type: media::TEXT_PLAIN.to_string(),
                filename: None,
            },
        };
        form.insert(param.wire_name.to_string(), part);
    }

    Ok(form)
}

fn form_part(file: &FilePart) -> FormPart {
    FormPart {
        data: file.data.clone(),
        content_type: file
            .content_type
            .clone()
            .unwrap_or_else(|| media::APPLICATION_OCTET_STREAM.to_string()),
        filename: file.filename.clone(),
    }
}

/// SDK identification headers, overlaid with the configured defaults.
fn default_headers(spec: &OperationSpec, config: &ServiceConfig) -> Headers {
    let mut headers = Headers::new()
        .with(USER_AGENT, SDK_USER_AGENT)
        .with(
            SDK_ANALYTICS,
            format!("service_name={};operation_id={}", config.service_name, spec.id),
        );
    headers.overlay(&config.default_headers);
    headers
}

fn computed_headers(
    spec: &OperationSpec,
    args: &CallArguments,
    body: Option<&RequestBody>,
    has_form: bool,
) -> Headers {
    let mut headers = Headers::new();

    if let Some(accept) = spec.accept {
        headers.insert(ACCEPT, accept);
    }

    if body.is_some() || has_form {
        let file_type = spec
            .params_with_role(ParamRole::Body)
            .next()
            .and_then(|param| match args.get(param.name) {
                Some(Value::File(file)) => file.content_type.as_deref(),
                _ => None,
            });
        if let Some(content_type) = file_type.or(spec.content_type) {
            headers.insert(CONTENT_TYPE, content_type);
        }
    }

    for param in spec.params_with_role(ParamRole::Header) {
        if let Some(value) = args.get(param.name).and_then(Value::to_param_string) {
            headers.insert(param.wire_name, value);
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://example.com/api";
    const VERSION: &str = "2023-03-31";

    fn config() -> ServiceConfig {
        ServiceConfig::new("test_service", URL, VERSION).unwrap()
    }

    macro_rules! op {
        ($method:expr, $path:expr, [$($param:expr),* $(,)?]) => {
            op!($method, $path, [$($param),*], Some(media::APPLICATION_JSON), None)
        };
        ($method:expr, $path:expr, [$($param:expr),* $(,)?], $accept:expr, $content_type:expr) => {{
            const PARAMS: &[ParameterSpec] = &[$($param),*];
            OperationSpec {
                id: "testOperation",
                method: $method,
                path: $path,
                description: "",
                params: PARAMS,
                accept: $accept,
                content_type: $content_type,
            }
        }};
    }

    #[test]
    fn path_values_are_encoded_and_kept_raw() {
        let spec = op!(
            RestMethod::Get,
            "/v1/corpora/{corpus}/concepts/{name_or_id}",
            [
                ParameterSpec::path("corpus", "corpus"),
                ParameterSpec::path("nameOrId", "name_or_id"),
            ]
        );
        let args = CallArguments::new()
            .with("corpus", "med/line")
            .with("nameOrId", "C0018787 x");
        let request = build(&spec, &config(), &args).unwrap();

        assert_eq!(
            request.url,
            "https://example.com/api/v1/corpora/med%2Fline/concepts/C0018787%20x"
        );
        assert_eq!(request.path_params["name_or_id"], "C0018787 x");
        assert_eq!(request.path_template, "/v1/corpora/{corpus}/concepts/{name_or_id}");
    }

    #[test]
    fn missing_path_value_is_a_build_error() {
        let spec = op!(RestMethod::Get, "/v1/profiles/{id}", [ParameterSpec::path("id", "id")]);
        let err = build(&spec, &config(), &CallArguments::new()).unwrap_err();
        assert!(matches!(err, BuildError::MissingPathParameter { ref parameter, .. } if parameter == "id"));
    }

    #[test]
    fn query_uses_wire_names_and_omits_absent_values() {
        let spec = op!(
            RestMethod::Post,
            "/v1/analyze",
            [
                ParameterSpec::query("debugTextRestore", "debug_text_restore"),
                ParameterSpec::query("returnAnalyzedText", "return_analyzed_text"),
            ]
        );
        let args = CallArguments::new()
            .with("returnAnalyzedText", true)
            .with("debugTextRestore", serde_json::Value::Null);
        let request = build(&spec, &config(), &args).unwrap();

        assert_eq!(
            request.query_pairs(),
            vec![("return_analyzed_text", "true"), ("version", VERSION)]
        );
        assert!(!request.query.contains_key("debug_text_restore"));
    }

    #[test]
    fn query_arrays_follow_array_style() {
        let spec = op!(
            RestMethod::Get,
            "/v1/concepts",
            [
                ParameterSpec::query("cuis", "cuis").csv(),
                ParameterSpec::query("types", "types"),
                ParameterSpec::query("sources", "sources"),
            ]
        );
        let args = CallArguments::new()
            .with("cuis", vec!["C1", "C2"])
            .with("types", vec!["Disease", "Drug"])
            .with("sources", Vec::<String>::new());
        let request = build(&spec, &config(), &args).unwrap();

        assert_eq!(request.query["cuis"], QueryValue::Single("C1,C2".to_string()));
        assert_eq!(
            request.query["types"],
            QueryValue::Multi(vec!["Disease".to_string(), "Drug".to_string()])
        );
        assert!(!request.query.contains_key("sources"));
        assert_eq!(
            request.query_pairs(),
            vec![
                ("cuis", "C1,C2"),
                ("types", "Disease"),
                ("types", "Drug"),
                ("version", VERSION),
            ]
        );
    }

    #[test]
    fn body_fields_map_to_wire_names() {
        let spec = op!(
            RestMethod::Post,
            "/v1/profiles",
            [
                ParameterSpec::body_field("newId", "id"),
                ParameterSpec::body_field("newName", "name"),
                ParameterSpec::body_field("newPublish", "publish"),
            ],
            Some(media::APPLICATION_JSON),
            Some(media::APPLICATION_JSON)
        );
        let args = CallArguments::new().with("newId", "p1").with("newName", "n1");
        let request = build(&spec, &config(), &args).unwrap();

        assert_eq!(request.body, Some(RequestBody::Json(json!({"id": "p1", "name": "n1"}))));
        assert_eq!(request.headers.get(CONTENT_TYPE), Some(media::APPLICATION_JSON));
    }

    #[test]
    fn body_fields_without_values_send_empty_object() {
        let spec = op!(
            RestMethod::Post,
            "/v1/profiles",
            [ParameterSpec::body_field("newId", "id")],
            Some(media::APPLICATION_JSON),
            Some(media::APPLICATION_JSON)
        );
        let request = build(&spec, &config(), &CallArguments::new()).unwrap();
        assert_eq!(request.body, Some(RequestBody::Json(json!({}))));
    }

    #[test]
    fn file_in_body_field_is_rejected() {
        let spec = op!(RestMethod::Post, "/v1/profiles", [ParameterSpec::body_field("newId", "id")]);
        let args = CallArguments::new().with("newId", FilePart::new("x"));
        assert!(matches!(
            build(&spec, &config(), &args),
            Err(BuildError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn verbatim_body_passes_strings_through() {
        let spec = op!(
            RestMethod::Post,
            "/v1/corpora/{corpus}/search",
            [
                ParameterSpec::path("corpus", "corpus"),
                ParameterSpec::body("body").verbatim(),
            ],
            Some(media::APPLICATION_JSON),
            Some(media::APPLICATION_JSON)
        );
        let document = r#"{"query":{"concepts":[]}}"#;
        let args = CallArguments::new().with("corpus", "c").with("body", document);
        let request = build(&spec, &config(), &args).unwrap();
        assert_eq!(request.body, Some(RequestBody::Text(document.to_string())));

        let args = CallArguments::new()
            .with("corpus", "c")
            .with("body", json!({"query": {}}));
        let request = build(&spec, &config(), &args).unwrap();
        assert_eq!(request.body, Some(RequestBody::Json(json!({"query": {}}))));
    }

    #[test]
    fn json_body_encodes_strings_as_json() {
        let spec = op!(RestMethod::Post, "/v1/things", [ParameterSpec::body("body")]);
        let args = CallArguments::new().with("body", "plain");
        let request = build(&spec, &config(), &args).unwrap();
        assert_eq!(request.body, Some(RequestBody::Json(json!("plain"))));
    }

    #[test]
    fn form_parts_default_to_octet_stream() {
        let spec = op!(
            RestMethod::Post,
            "/v1/cartridges",
            [ParameterSpec::form_field("archiveFile", "archive_file")],
            Some(media::APPLICATION_JSON),
            Some(media::MULTIPART_FORM_DATA)
        );
        let args = CallArguments::new().with("archiveFile", FilePart::new(vec![1u8, 2, 3]));
        let request = build(&spec, &config(), &args).unwrap();

        let part = &request.form_data["archive_file"];
        assert_eq!(part.content_type, media::APPLICATION_OCTET_STREAM);
        assert_eq!(part.data.as_ref(), &[1, 2, 3]);
        assert_eq!(request.body, None);
        assert_eq!(request.headers.get(CONTENT_TYPE), Some(media::MULTIPART_FORM_DATA));
    }

    #[test]
    fn form_part_keeps_declared_type() {
        let spec = op!(
            RestMethod::Post,
            "/v1/deploy",
            [ParameterSpec::form_field("archiveFile", "archive_file")]
        );
        let file = FilePart::new("zip").with_content_type("application/zip").with_filename("c.zip");
        let args = CallArguments::new().with("archiveFile", file);
        let part = &build(&spec, &config(), &args).unwrap().form_data["archive_file"];
        assert_eq!(part.content_type, "application/zip");
        assert_eq!(part.filename.as_deref(), Some("c.zip"));
    }

    #[test]
    fn no_declared_accept_leaves_accept_unset() {
        let spec = op!(RestMethod::Delete, "/v1/user_data", [], None, None);
        let request = build(&spec, &config(), &CallArguments::new()).unwrap();
        assert_eq!(request.headers.get(ACCEPT), None);
        assert_eq!(request.headers.get(CONTENT_TYPE), None);
        assert!(request.headers.contains(USER_AGENT));
    }

    #[test]
    fn header_parameters_and_user_overrides() {
        let spec = op!(
            RestMethod::Post,
            "/v1/analyze/{flow_id}",
            [
                ParameterSpec::path("flowId", "flow_id"),
                ParameterSpec::body("input").verbatim(),
                ParameterSpec::header("contentType", "Content-Type"),
            ],
            Some(media::APPLICATION_JSON),
            Some(media::APPLICATION_JSON)
        );
        let args = CallArguments::new()
            .with("flowId", "wf")
            .with("input", "Patient has diabetes")
            .with("contentType", "text/plain; charset=utf-8");
        let request = build(&spec, &config(), &args).unwrap();
        assert_eq!(request.headers.get(CONTENT_TYPE), Some("text/plain; charset=utf-8"));

        let args = args
            .header("accept", "fake/accept")
            .header("content-type", "fake/contentType");
        let request = build(&spec, &config(), &args).unwrap();
        assert_eq!(request.headers.get(ACCEPT), Some("fake/accept"));
        assert_eq!(request.headers.get(CONTENT_TYPE), Some("fake/contentType"));
    }

    #[test]
    fn sdk_headers_can_be_overridden_by_config() {
        let spec = op!(RestMethod::Get, "/v1/profiles", []);
        let config = config().with_default_header("user-agent", "custom/1.0");
        let request = build(&spec, &config, &CallArguments::new()).unwrap();
        assert_eq!(request.headers.get(USER_AGENT), Some("custom/1.0"));
        assert_eq!(
            request.headers.get(SDK_ANALYTICS),
            Some("service_name=test_service;operation_id=testOperation")
        );
    }

    #[test]
    fn building_twice_yields_equal_descriptors() {
        let spec = op!(
            RestMethod::Get,
            "/v1/corpora/{corpus}/search/typeahead",
            [
                ParameterSpec::path("corpus", "corpus"),
                ParameterSpec::query("query", "query").required(),
                ParameterSpec::query("types", "types"),
            ]
        );
        let args = CallArguments::new()
            .with("corpus", "medline")
            .with("query", "hea")
            .with("types", vec!["Disease"]);
        let first = build(&spec, &config(), &args).unwrap();
        let second = build(&spec, &config(), &args).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn descriptor_serializes_for_display() {
        let spec = op!(RestMethod::Get, "/v1/profiles/{id}", [ParameterSpec::path("id", "id")]);
        let args = CallArguments::new().with("id", "abc");
        let json = serde_json::to_value(build(&spec, &config(), &args).unwrap()).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["path_params"]["id"], "abc");
        assert_eq!(json["query"]["version"], VERSION);
        assert!(json.get("body").is_none());
    }
}
