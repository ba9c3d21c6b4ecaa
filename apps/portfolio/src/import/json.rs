use serde_json::Value;

use crate::errors::AppError;

/// Uploads must carry this extension (compared case-insensitively).
pub const IMPORT_EXTENSION: &str = ".json";

/// Validates an uploaded file and parses it as JSON.
///
/// The parsed document is returned untouched: any valid JSON is accepted,
/// there is no schema check. A leading UTF-8 byte order mark is ignored.
pub fn parse_import(filename: &str, contents: &[u8]) -> Result<Value, AppError> {
    if filename.trim().is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !filename.to_ascii_lowercase().ends_with(IMPORT_EXTENSION) {
        return Err(AppError::Validation(format!(
            "File must be a JSON file ({IMPORT_EXTENSION})"
        )));
    }

    let text = std::str::from_utf8(contents)
        .map_err(|e| AppError::Validation(format!("File is not valid UTF-8 text: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    serde_json::from_str(text).map_err(|e| AppError::Parse(format!("Invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document_is_returned_verbatim() {
        let value = parse_import("data.json", br#"{"name": "Ada", "custom": [1, 2]}"#).unwrap();
        assert_eq!(value, json!({"name": "Ada", "custom": [1, 2]}));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(parse_import("DATA.JSON", b"{}").is_ok());
    }

    #[test]
    fn test_wrong_extension_is_validation_error() {
        let err = parse_import("data.txt", b"{}").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_filename_is_validation_error() {
        let err = parse_import("  ", b"{}").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "No file selected"));
    }

    #[test]
    fn test_trailing_comma_is_parse_error() {
        let err = parse_import("data.json", br#"{"a": 1,}"#).unwrap_err();
        match err {
            AppError::Parse(msg) => assert!(msg.starts_with("Invalid JSON:")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_is_validation_error() {
        let err = parse_import("data.json", &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let value = parse_import("data.json", "\u{feff}{\"a\": 1}".as_bytes()).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_non_object_json_is_accepted() {
        assert_eq!(parse_import("list.json", b"[1, 2]").unwrap(), json!([1, 2]));
    }
}
