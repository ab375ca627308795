//! HTTP method enumeration for operation definitions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP methods used by the clinical services.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use clinical_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("PUT").unwrap(), RestMethod::Put);
/// assert_eq!(RestMethod::Delete.to_string(), "DELETE");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a resource or run an action
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP DELETE - Remove a resource
    Delete,
}

impl RestMethod {
    /// Returns `true` if requests with this method usually carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn rest_method_display_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn rest_method_from_str_is_case_sensitive() {
        assert_eq!(RestMethod::from_str("GET").unwrap(), RestMethod::Get);
        assert!(RestMethod::from_str("get").is_err());
        assert!(RestMethod::from_str("PATCH").is_err());
    }

    #[test]
    fn rest_method_iter_all_variants() {
        assert_eq!(RestMethod::iter().count(), 4);
    }

    #[test]
    fn rest_method_has_body() {
        assert!(RestMethod::Post.has_body());
        assert!(RestMethod::Put.has_body());
        assert!(!RestMethod::Get.has_body());
        assert!(!RestMethod::Delete.has_body());
    }

    #[test]
    fn rest_method_serializes_uppercase() {
        let serialized = serde_json::to_string(&RestMethod::Post).unwrap();
        assert_eq!(serialized, "\"POST\"");
    }
}
