//! Case-insensitive header collections and the three-layer merge.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const ACCEPT: &str = "Accept";
pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const USER_AGENT: &str = "User-Agent";
pub const SDK_ANALYTICS: &str = "X-SDK-Analytics";

/// An ordered set of headers with case-insensitive names.
///
/// Inserting a name that already exists (in any casing) replaces the entry,
/// taking the new casing and value.
///
/// ## Examples
///
/// ```
/// use clinical_runtime::Headers;
///
/// let mut headers = Headers::new();
/// headers.insert("content-type", "application/json");
/// headers.insert("Content-Type", "text/plain");
///
/// assert_eq!(headers.len(), 1);
/// assert_eq!(headers.get("CONTENT-TYPE"), Some("text/plain"));
/// assert_eq!(headers.iter().next(), Some(("Content-Type", "text/plain")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.0[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.0[i] = (name, value),
            None => self.0.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.0.remove(i).1)
    }

    /// Inserts every header of `other`, letting `other` win.
    pub fn overlay(&mut self, other: &Headers) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.0 {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

/// Merges the three header layers.
///
/// Precedence, lowest to highest: `defaults`, `computed`, `user`. A header
/// absent from every layer stays absent.
pub fn merge(defaults: &Headers, computed: &Headers, user: &Headers) -> Headers {
    let mut merged = defaults.clone();
    merged.overlay(computed);
    merged.overlay(user);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_precedence() {
        let defaults = Headers::new()
            .with("accept", "*/*")
            .with(USER_AGENT, "clinical-sdk");
        let computed = Headers::new()
            .with(ACCEPT, "application/json")
            .with(CONTENT_TYPE, "application/json");
        let user = Headers::new()
            .with("ACCEPT", "fake/accept")
            .with("content-type", "fake/contentType");

        let merged = merge(&defaults, &computed, &user);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("accept"), Some("fake/accept"));
        assert_eq!(merged.get("Content-Type"), Some("fake/contentType"));
        assert_eq!(merged.get("user-agent"), Some("clinical-sdk"));
    }

    #[test]
    fn merge_keeps_winner_casing() {
        let merged = merge(
            &Headers::new().with("accept", "a"),
            &Headers::new(),
            &Headers::new().with("ACCEPT", "b"),
        );
        let names: Vec<_> = merged.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["ACCEPT"]);
    }

    #[test]
    fn merge_leaves_accept_unset_when_no_layer_has_it() {
        let merged = merge(
            &Headers::new().with(USER_AGENT, "clinical-sdk"),
            &Headers::new(),
            &Headers::new(),
        );
        assert_eq!(merged.get(ACCEPT), None);
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut headers = Headers::new().with("Content-Type", "multipart/form-data");
        assert_eq!(headers.remove("content-type").as_deref(), Some("multipart/form-data"));
        assert!(headers.is_empty());
        assert_eq!(headers.remove("content-type"), None);
    }

    #[test]
    fn serializes_as_map() {
        let headers = Headers::new().with(ACCEPT, "application/json");
        let json = serde_json::to_value(&headers).unwrap();
        assert_eq!(json, serde_json::json!({"Accept": "application/json"}));
    }
}
