//! Media type constants shared by operation tables and the runtime.

/// `application/json`
pub const APPLICATION_JSON: &str = "application/json";

/// `application/octet-stream`, the fallback for form parts with no declared type.
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// `multipart/form-data`
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// `text/plain`
pub const TEXT_PLAIN: &str = "text/plain";

/// Returns `true` when `content_type` names a JSON media type.
///
/// Parameters such as `;charset=utf-8` are ignored, and `+json` suffixes
/// (e.g. `application/problem+json`) count as JSON.
///
/// ```
/// use clinical_define::media::is_json;
///
/// assert!(is_json("application/json; charset=utf-8"));
/// assert!(is_json("application/problem+json"));
/// assert!(!is_json("text/plain"));
/// ```
pub fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == APPLICATION_JSON || essence.ends_with("+json")
}

/// Returns `true` when `content_type` is a textual media type.
pub fn is_text(content_type: &str) -> bool {
    let essence = content_type.trim_start().to_ascii_lowercase();
    essence.starts_with("text/") || essence.starts_with("application/xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_detection_ignores_parameters() {
        assert!(is_json("application/json"));
        assert!(is_json("Application/JSON;charset=UTF-8"));
        assert!(!is_json("multipart/form-data"));
        assert!(!is_json(""));
    }

    #[test]
    fn text_detection() {
        assert!(is_text("text/plain; charset=utf-8"));
        assert!(is_text("text/html"));
        assert!(!is_text("application/json"));
    }
}
