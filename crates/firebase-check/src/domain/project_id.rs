//! Extraction of `project_info.project_id` from `google-services.json`.
//!
//! The file Firebase generates for Android looks like this (abridged):
//!
//! ```json
//! {
//!   "project_info": {
//!     "project_number": "123456789012",
//!     "project_id": "tastesmoke-1234",
//!     "storage_bucket": "tastesmoke-1234.appspot.com"
//!   },
//!   "client": [ ... ]
//! }
//! ```
//!
//! Only the project ID is read.  A missing `project_info` object or a missing
//! `project_id` key yields [`UNKNOWN_PROJECT_ID`] rather than an error; a file
//! whose shape makes the lookup impossible (not JSON, not an object) is an
//! error.

use std::path::PathBuf;

use serde_json::{Map, Value};
use thiserror::Error;

/// Printed in place of the project ID when either lookup level is absent.
pub const UNKNOWN_PROJECT_ID: &str = "Unknown";

/// Error type for reading and parsing `google-services.json`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The file exists but could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that must be an object for the lookup to proceed is not one.
    #[error("expected `{field}` to be a JSON object")]
    NotAnObject { field: &'static str },
}

/// Parses `json_text` and returns the value at `project_info.project_id`.
///
/// String values are returned as-is; other scalars (numbers, booleans) are
/// returned in their JSON text form.  `null` is treated like an absent key.
///
/// # Errors
///
/// Returns [`CheckError::Json`] for malformed JSON and
/// [`CheckError::NotAnObject`] when the document root or `project_info` is
/// present but not an object.
pub fn extract_project_id(json_text: &str) -> Result<String, CheckError> {
    let root: Value = serde_json::from_str(json_text)?;
    let root = as_object(&root, "<root>")?;

    let project_info = match root.get("project_info") {
        Some(value) => as_object(value, "project_info")?,
        None => return Ok(UNKNOWN_PROJECT_ID.to_string()),
    };

    let id = match project_info.get("project_id") {
        None | Some(Value::Null) => UNKNOWN_PROJECT_ID.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Ok(id)
}

fn as_object<'a>(value: &'a Value, field: &'static str) -> Result<&'a Map<String, Value>, CheckError> {
    value.as_object().ok_or(CheckError::NotAnObject { field })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_returns_nested_project_id() {
        // Arrange
        let json = r#"{"project_info": {"project_id": "tastesmoke-1234"}}"#;

        // Act
        let id = extract_project_id(json).expect("well-formed file");

        // Assert
        assert_eq!(id, "tastesmoke-1234");
    }

    #[test]
    fn test_extract_ignores_sibling_fields() {
        let json = r#"{
            "project_info": {
                "project_number": "123456789012",
                "project_id": "tastesmoke-1234",
                "storage_bucket": "tastesmoke-1234.appspot.com"
            },
            "client": [{"client_info": {"mobilesdk_app_id": "1:2:android:3"}}],
            "configuration_version": "1"
        }"#;
        assert_eq!(extract_project_id(json).unwrap(), "tastesmoke-1234");
    }

    #[test]
    fn test_extract_missing_project_info_yields_unknown() {
        let id = extract_project_id(r#"{"client": []}"#).unwrap();
        assert_eq!(id, UNKNOWN_PROJECT_ID);
    }

    #[test]
    fn test_extract_missing_project_id_yields_unknown() {
        let id = extract_project_id(r#"{"project_info": {"project_number": "1"}}"#).unwrap();
        assert_eq!(id, "Unknown");
    }

    #[test]
    fn test_extract_null_project_id_yields_unknown() {
        let id = extract_project_id(r#"{"project_info": {"project_id": null}}"#).unwrap();
        assert_eq!(id, UNKNOWN_PROJECT_ID);
    }

    #[test]
    fn test_extract_numeric_project_id_is_rendered_as_json_text() {
        let id = extract_project_id(r#"{"project_info": {"project_id": 42}}"#).unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn test_extract_malformed_json_returns_json_error() {
        // Arrange: trailing comma and unterminated object
        let bad = r#"{"project_info": {"project_id": "x",}"#;

        // Act
        let result = extract_project_id(bad);

        // Assert
        assert!(matches!(result, Err(CheckError::Json(_))));
    }

    #[test]
    fn test_extract_empty_file_returns_json_error() {
        assert!(matches!(extract_project_id(""), Err(CheckError::Json(_))));
    }

    #[test]
    fn test_extract_non_object_root_is_rejected() {
        let result = extract_project_id(r#"["project_info"]"#);
        assert!(matches!(
            result,
            Err(CheckError::NotAnObject { field: "<root>" })
        ));
    }

    #[test]
    fn test_extract_non_object_project_info_is_rejected() {
        let result = extract_project_id(r#"{"project_info": "tastesmoke"}"#);
        assert!(matches!(
            result,
            Err(CheckError::NotAnObject {
                field: "project_info"
            })
        ));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = extract_project_id("{").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON:"), "got: {err}");

        let err = extract_project_id(r#"{"project_info": null}"#).unwrap_err();
        assert_eq!(err.to_string(), "expected `project_info` to be a JSON object");
    }
}
