//! Required-field validation.

use crate::args::CallArguments;
use crate::error::ValidationError;

/// Checks that every name in `required` has a present value.
///
/// All missing names are reported, in `required` order. With no arguments at
/// all, every required name is missing.
///
/// ## Examples
///
/// ```
/// use clinical_runtime::{CallArguments, validate};
///
/// let args = CallArguments::new().with("corpus", "medline");
/// let err = validate("typeahead", Some(&args), &["corpus", "query"]).unwrap_err();
/// assert_eq!(err.missing, vec!["query"]);
///
/// assert!(validate("getProfiles", None, &[]).is_ok());
/// ```
pub fn validate(
    operation: &str,
    args: Option<&CallArguments>,
    required: &[&str],
) -> Result<(), ValidationError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !args.is_some_and(|args| args.is_present(name)))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(operation, missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reports_every_required_name() {
        let err = validate("getRelatedConcepts", None, &["corpus", "nameOrId", "relationship"])
            .unwrap_err();
        assert_eq!(err.missing, vec!["corpus", "nameOrId", "relationship"]);
        assert_eq!(
            err.to_string(),
            "Missing required parameters: corpus, nameOrId, relationship"
        );
    }

    #[test]
    fn empty_arguments_behave_like_none() {
        let args = CallArguments::new();
        let err = validate("getProfile", Some(&args), &["id"]).unwrap_err();
        assert_eq!(err.missing, vec!["id"]);
    }

    #[test]
    fn null_value_is_missing() {
        let args = CallArguments::new().with("id", serde_json::Value::Null);
        assert!(validate("getProfile", Some(&args), &["id"]).is_err());
    }

    #[test]
    fn falsy_values_are_present() {
        let args = CallArguments::new()
            .with("flowId", "")
            .with("returnAnalyzedText", false);
        assert!(validate("x", Some(&args), &["flowId", "returnAnalyzedText"]).is_ok());
    }

    #[test]
    fn nothing_required_always_passes() {
        assert!(validate("getProfiles", None, &[]).is_ok());
        assert!(validate("getProfiles", Some(&CallArguments::new()), &[]).is_ok());
    }
}
