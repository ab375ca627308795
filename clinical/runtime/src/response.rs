//! Service responses.

use bytes::Bytes;
use clinical_define::media;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::headers::{CONTENT_TYPE, Headers};
use crate::value::byte_len;

/// A successful response: `{ result, status, status_text, headers }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub result: ResponseBody,
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
}

impl Response {
    /// A `200 OK` response with no headers.
    pub fn ok(result: ResponseBody) -> Self {
        Self {
            result,
            status: 200,
            status_text: "OK".to_string(),
            headers: Headers::new(),
        }
    }

    /// Deserializes the body into `T`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use clinical_runtime::{Response, ResponseBody};
    ///
    /// let response = Response::ok(ResponseBody::Json(serde_json::json!(["default", "wh"])));
    /// let profiles: Vec<String> = response.json().unwrap();
    /// assert_eq!(profiles, vec!["default", "wh"]);
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let value = match &self.result {
            ResponseBody::Json(value) => T::deserialize(value)?,
            ResponseBody::Text(text) => serde_json::from_str(text)?,
            ResponseBody::Binary(data) => serde_json::from_slice(data)?,
            ResponseBody::Empty => T::deserialize(&serde_json::Value::Null)?,
        };
        Ok(value)
    }
}

/// A response body classified by its content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
    #[serde(serialize_with = "byte_len")]
    Binary(Bytes),
    Empty,
}

impl ResponseBody {
    /// Classifies a raw body.
    ///
    /// JSON media types are parsed (falling back to text when the payload is
    /// not valid JSON); textual or untyped UTF-8 payloads become `Text`;
    /// everything else stays binary.
    pub fn classify(content_type: Option<&str>, data: Bytes) -> Self {
        if data.is_empty() {
            return Self::Empty;
        }

        let content_type = content_type.unwrap_or_default();
        if media::is_json(content_type) {
            if let Ok(value) = serde_json::from_slice(&data) {
                return Self::Json(value);
            }
        }

        let textual = content_type.is_empty() || media::is_json(content_type) || media::is_text(content_type);
        if textual {
            if let Ok(text) = std::str::from_utf8(&data) {
                return Self::Text(text.to_string());
            }
        }
        Self::Binary(data)
    }

    /// Classifies using the `Content-Type` of `headers`.
    pub fn from_headers(headers: &Headers, data: Bytes) -> Self {
        Self::classify(headers.get(CONTENT_TYPE), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_bodies_are_parsed() {
        let body = ResponseBody::classify(
            Some("application/json;charset=utf-8"),
            Bytes::from_static(br#"{"ok":true}"#),
        );
        assert_eq!(body, ResponseBody::Json(json!({"ok": true})));
    }

    #[test]
    fn invalid_json_falls_back_to_text() {
        let body = ResponseBody::classify(Some("application/json"), Bytes::from_static(b"oops"));
        assert_eq!(body, ResponseBody::Text("oops".to_string()));
    }

    #[test]
    fn text_and_binary() {
        assert_eq!(
            ResponseBody::classify(Some("text/plain"), Bytes::from_static(b"UP")),
            ResponseBody::Text("UP".to_string())
        );
        assert_eq!(
            ResponseBody::classify(Some("application/zip"), Bytes::from_static(b"PK")),
            ResponseBody::Binary(Bytes::from_static(b"PK"))
        );
        assert_eq!(ResponseBody::classify(None, Bytes::new()), ResponseBody::Empty);
    }

    #[test]
    fn json_helper_reads_text_bodies() {
        let response = Response::ok(ResponseBody::Text("[1,2]".to_string()));
        assert_eq!(response.json::<Vec<u8>>().unwrap(), vec![1, 2]);
        assert!(response.json::<String>().is_err());
    }

    #[test]
    fn empty_body_deserializes_as_unit() {
        let response = Response::ok(ResponseBody::Empty);
        response.json::<()>().unwrap();
        assert_eq!(response.json::<Option<String>>().unwrap(), None);
    }
}
