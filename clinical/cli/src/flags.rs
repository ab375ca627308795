//! Parsing of `--arg` and `--header` values.

use std::fs;
use std::path::PathBuf;

use clinical_sdk::{CallArguments, FilePart, Value};

use crate::error::CliError;

/// Parses `NAME=VALUE`.
///
/// `VALUE` is taken as JSON when it parses as JSON (`5`, `true`, `["a","b"]`)
/// and as a plain string otherwise. `@path` reads the file as binary content.
pub fn parse_arg(raw: &str) -> Result<(String, Value), CliError> {
    let invalid = |reason| CliError::InvalidFlag {
        flag: "--arg",
        value: raw.to_string(),
        reason,
    };

    let (name, value) = raw.split_once('=').ok_or_else(|| invalid("expected NAME=VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("empty parameter name"));
    }

    if let Some(path) = value.strip_prefix('@') {
        let path = PathBuf::from(path);
        let data = fs::read(&path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let mut file = FilePart::new(data);
        if let Some(filename) = path.file_name() {
            file = file.with_filename(filename.to_string_lossy());
        }
        return Ok((name.to_string(), Value::File(file)));
    }

    let value = serde_json::from_str(value)
        .map(Value::Json)
        .unwrap_or_else(|_| Value::from(value));
    Ok((name.to_string(), value))
}

/// Parses `Name: value`.
pub fn parse_header(raw: &str) -> Result<(String, String), CliError> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(CliError::InvalidFlag {
            flag: "--header",
            value: raw.to_string(),
            reason: "expected NAME:VALUE",
        }),
    }
}

/// Collects parsed flags into call arguments.
pub fn call_arguments(args: &[String], headers: &[String]) -> Result<CallArguments, CliError> {
    let mut call = CallArguments::new();
    for raw in args {
        let (name, value) = parse_arg(raw)?;
        call.set(name, value);
    }
    for raw in headers {
        let (name, value) = parse_header(raw)?;
        call.headers_mut().insert(name, value);
    }
    Ok(call)
}
