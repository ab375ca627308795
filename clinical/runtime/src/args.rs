//! Per-call arguments.

use std::collections::BTreeMap;

use crate::headers::Headers;
use crate::value::Value;

/// Arguments for one call: values by local parameter name, plus header
/// overrides that take priority over every computed header.
///
/// ## Examples
///
/// ```
/// use clinical_runtime::CallArguments;
///
/// let args = CallArguments::new()
///     .with("corpus", "medline")
///     .with("query", "heart")
///     .header("Accept", "application/json");
///
/// assert!(args.is_present("corpus"));
/// assert!(!args.is_present("limit"));
/// assert_eq!(args.headers().get("accept"), Some("application/json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArguments {
    values: BTreeMap<String, Value>,
    headers: Headers,
}

impl CallArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value and returns `self`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Adds a header override and returns `self`.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the value for `name` unless it is absent or `null`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| v.is_present())
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for CallArguments {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for CallArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = CallArguments::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}
