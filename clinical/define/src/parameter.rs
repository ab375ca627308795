//! Parameter definitions.
//!
//! A [`ParameterSpec`] describes one named input of an operation and where it
//! is placed in the outgoing request. Local names are what callers use
//! (`documentId`), wire names are what the service sees (`document_id`).
//!
//! All constructors are `const fn` so that operation tables can be `static`.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Where a parameter is placed in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ParamRole {
    /// Substituted into a `{wire_name}` placeholder of the path template.
    Path,
    /// Added to the query string.
    Query,
    /// One key of a JSON object body.
    BodyField,
    /// The whole request body, passed through as a single value.
    Body,
    /// One part of a `multipart/form-data` body.
    FormField,
    /// A request header. Header parameters are never required.
    Header,
}

/// How list values are written to the query string.
///
/// The services are not consistent about this, so every query parameter
/// declares its own style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrayStyle {
    /// `?types=a&types=b`
    #[default]
    Multi,
    /// `?cuis=a,b`
    Csv,
}

/// How the value of a [`ParamRole::Body`] parameter is serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyEncoding {
    /// Always serialized as JSON, strings included.
    #[default]
    Json,
    /// A string value is sent byte-for-byte (it already is the document);
    /// structured values are serialized as JSON.
    Verbatim,
}

/// A single parameter of an operation.
///
/// ## Examples
///
/// ```
/// use clinical_define::{ParameterSpec, ParamRole, ArrayStyle};
///
/// let corpus = ParameterSpec::path("corpus", "corpus");
/// assert!(corpus.required);
///
/// let cuis = ParameterSpec::query("cuis", "cuis").csv();
/// assert_eq!(cuis.role, ParamRole::Query);
/// assert_eq!(cuis.array_style, ArrayStyle::Csv);
/// assert!(!cuis.required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// Local name used by callers when supplying arguments.
    pub name: &'static str,
    /// Placement in the request.
    pub role: ParamRole,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Key used on the wire (path placeholder, query key, JSON key, form part
    /// name or header name).
    pub wire_name: &'static str,
    /// Query list serialization. Only meaningful for [`ParamRole::Query`].
    pub array_style: ArrayStyle,
    /// Opaque body serialization. Only meaningful for [`ParamRole::Body`].
    pub body_encoding: BodyEncoding,
}

impl ParameterSpec {
    const fn new(
        name: &'static str,
        role: ParamRole,
        required: bool,
        wire_name: &'static str,
    ) -> Self {
        Self {
            name,
            role,
            required,
            wire_name,
            array_style: ArrayStyle::Multi,
            body_encoding: BodyEncoding::Json,
        }
    }

    /// A required path parameter.
    pub const fn path(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, ParamRole::Path, true, wire_name)
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, ParamRole::Query, false, wire_name)
    }

    /// An optional key of the JSON body object.
    pub const fn body_field(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, ParamRole::BodyField, false, wire_name)
    }

    /// A required opaque body. The wire name is informational only.
    pub const fn body(name: &'static str) -> Self {
        Self::new(name, ParamRole::Body, true, name)
    }

    /// An optional multipart form part.
    pub const fn form_field(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, ParamRole::FormField, false, wire_name)
    }

    /// An optional request header.
    pub const fn header(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, ParamRole::Header, false, wire_name)
    }

    /// Marks the parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the parameter as optional.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Writes list values as one comma-joined query value.
    pub const fn csv(mut self) -> Self {
        self.array_style = ArrayStyle::Csv;
        self
    }

    /// Sends string body values verbatim.
    pub const fn verbatim(mut self) -> Self {
        self.body_encoding = BodyEncoding::Verbatim;
        self
    }
}
