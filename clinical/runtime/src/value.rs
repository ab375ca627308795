//! Argument values.
//!
//! A [`Value`] is either JSON data or a binary [`FilePart`]. JSON `null` is
//! treated exactly like an absent argument.

use bytes::Bytes;
use serde::{Serialize, Serializer};

/// A single argument value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Scalars, lists and nested objects.
    Json(serde_json::Value),
    /// Binary content for uploads and raw bodies.
    File(FilePart),
}

impl Value {
    /// Returns `false` for JSON `null`.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Json(serde_json::Value::Null))
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::File(_) => None,
        }
    }

    /// The string form used in paths, query strings and headers.
    ///
    /// Strings are taken as-is, numbers and booleans use their JSON text and
    /// structured values are serialized as compact JSON. Files have no string
    /// form.
    pub fn to_param_string(&self) -> Option<String> {
        match self {
            Self::Json(value) => json_param_string(value),
            Self::File(_) => None,
        }
    }
}

pub(crate) fn json_param_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<FilePart> for Value {
    fn from(value: FilePart) -> Self {
        Self::File(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Json(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Json(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Json(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Json(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Json(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Json(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Json(value.into())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::Json(value.into())
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Self::Json(value.into())
    }
}

/// Binary content with optional metadata.
///
/// ## Examples
///
/// ```
/// use clinical_runtime::FilePart;
///
/// let archive = FilePart::new(vec![0x50, 0x4b, 0x03, 0x04])
///     .with_filename("cartridge.zip")
///     .with_content_type("application/zip");
/// assert_eq!(archive.data.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePart {
    #[serde(rename = "length", serialize_with = "byte_len")]
    pub data: Bytes,
    pub content_type: Option<String>,
    pub filename: Option<String>,
}

impl FilePart {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
            filename: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Serializes binary content as its length.
pub(crate) fn byte_len<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(data.len() as u64)
}
