use super::{DecodeError, Format, FormatParser};
use crate::value::Value;

/// TOML language files, e.g. `en-us/error.toml`. Tables nest like JSON objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

/// The built-in `"toml"` driver.
pub type TomlParser = FormatParser<TomlFormat>;

impl TomlFormat {
    pub const NAME: &'static str = "toml";
}

impl Format for TomlFormat {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extension(&self) -> &'static str {
        "toml"
    }

    // A TOML document is always a table, so there is no non-object case.
    fn decode(&self, contents: &[u8]) -> Result<Value, DecodeError> {
        let table: ::toml::Table = ::toml::from_str(std::str::from_utf8(contents)?)?;
        Ok(Value::from(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nested_tables() {
        let value = TomlFormat
            .decode(
                r#"
                test = "hi"

                [err2.bb]
                cc = "nested-hi"
                "#
                .as_bytes(),
            )
            .unwrap();

        assert_eq!(value.get("test"), Some(&Value::from("hi")));
        assert_eq!(
            value
                .get("err2")
                .and_then(|v| v.get("bb"))
                .and_then(|v| v.get("cc")),
            Some(&Value::from("nested-hi"))
        );
    }

    #[test]
    fn test_decode_invalid_toml() {
        assert!(matches!(TomlFormat.decode(b"test = "), Err(DecodeError::Toml(_))));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(matches!(
            TomlFormat.decode(b"test = \"\xff\""),
            Err(DecodeError::Utf8(_))
        ));
    }
}
