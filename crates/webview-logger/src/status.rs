//! Status extraction from captured payloads.

use serde_json::Value;
use webview_logger_common::CaptureError;

/// Decode `text` as a JSON object and return its string `status` field.
pub fn extract_status(text: &str) -> Result<String, CaptureError> {
    let value: Value = serde_json::from_str(text)?;
    status_from_value(value)
}

/// Like [`extract_status`], for hosts that hand over raw bytes.
pub fn extract_status_from_bytes(bytes: &[u8]) -> Result<String, CaptureError> {
    let text = std::str::from_utf8(bytes)?;
    extract_status(text)
}

fn status_from_value(value: Value) -> Result<String, CaptureError> {
    match value {
        Value::Object(mut map) => match map.remove("status") {
            Some(Value::String(status)) => Ok(status),
            _ => Err(CaptureError::MissingStatus),
        },
        other => Err(CaptureError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_status_string() {
        assert_eq!(extract_status(r#"{"status":"success"}"#).unwrap(), "success");
        assert_eq!(
            extract_status(r#"{"status": "success 3", "code": 200}"#).unwrap(),
            "success 3"
        );
    }

    #[test]
    fn empty_status_is_still_a_status() {
        assert_eq!(extract_status(r#"{"status":""}"#).unwrap(), "");
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = extract_status("Invalid JSON").unwrap_err();
        assert!(matches!(err, CaptureError::Decode(_)));

        let err = extract_status("<html><head></head><body></body></html>").unwrap_err();
        assert!(matches!(err, CaptureError::Decode(_)));
    }

    #[test]
    fn non_object_json_is_rejected() {
        for (text, kind) in [
            ("null", "null"),
            ("true", "a boolean"),
            ("42", "a number"),
            (r#""status""#, "a string"),
            (r#"[{"status":"success"}]"#, "an array"),
        ] {
            match extract_status(text) {
                Err(CaptureError::NotAnObject(k)) => assert_eq!(k, kind, "{text}"),
                other => panic!("{text}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn missing_or_non_string_status() {
        for text in [
            r#"{}"#,
            r#"{"state":"success"}"#,
            r#"{"status":1}"#,
            r#"{"status":null}"#,
            r#"{"status":{"value":"success"}}"#,
        ] {
            assert!(
                matches!(extract_status(text), Err(CaptureError::MissingStatus)),
                "{text}"
            );
        }
    }

    #[test]
    fn nested_status_is_not_looked_up() {
        let err = extract_status(r#"{"data":{"status":"success"}}"#).unwrap_err();
        assert!(matches!(err, CaptureError::MissingStatus));
    }

    #[test]
    fn bytes_must_be_utf8() {
        let err = extract_status_from_bytes(&[0x7b, 0xff, 0x7d]).unwrap_err();
        assert!(matches!(err, CaptureError::Encoding(_)));

        let status = extract_status_from_bytes(br#"{"status":"ok"}"#).unwrap();
        assert_eq!(status, "ok");
    }
}
