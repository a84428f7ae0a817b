use super::{DecodeError, Format, FormatParser};
use crate::value::Value;

/// JSON language files, e.g. `zh-cn/error.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

/// The built-in `"json"` driver.
pub type JsonParser = FormatParser<JsonFormat>;

impl JsonFormat {
    pub const NAME: &'static str = "json";
}

impl Format for JsonFormat {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn decode(&self, contents: &[u8]) -> Result<Value, DecodeError> {
        match serde_json::from_slice(contents)? {
            object @ serde_json::Value::Object(_) => Ok(Value::from(object)),
            _ => Err(DecodeError::NotAnObject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_object() {
        let value = JsonFormat
            .decode(r#"{"params_missing": "参数缺失", "err2": {"aa": "aaxx"}}"#.as_bytes())
            .unwrap();

        assert_eq!(
            value.get("params_missing").and_then(Value::as_str),
            Some("参数缺失")
        );
        assert_eq!(
            value.get("err2").and_then(|v| v.get("aa")),
            Some(&Value::from("aaxx"))
        );
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(matches!(
            JsonFormat.decode(b"[1, 2, 3]"),
            Err(DecodeError::NotAnObject)
        ));
        assert!(matches!(JsonFormat.decode(b"\"hi\""), Err(DecodeError::NotAnObject)));
    }

    #[test]
    fn test_decode_invalid_json() {
        assert!(matches!(JsonFormat.decode(b"{\"a\": }"), Err(DecodeError::Json(_))));
        assert!(matches!(
            JsonFormat.decode(b"{\"a\": \"\xff\"}"),
            Err(DecodeError::Json(_))
        ));
    }
}
