//! The nested value tree that translation files decode into.

use std::collections::BTreeMap;
use std::fmt;

/// A decoded translation value.
///
/// Lookups only ever descend into [`Value::Object`]; arrays are kept as
/// opaque leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the child stored under `segment` if this is an object.
    pub fn get(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(segment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_nested(f, item)?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: ")?;
                    write_nested(f, item)?;
                }
                f.write_str("}")
            }
        }
    }
}

// Strings inside containers are quoted so the output reads like JSON.
fn write_nested(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => write!(f, "{s:?}"),
        other => write!(f, "{other}"),
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Integer(i),
            toml::Value::Float(x) => Value::Float(x),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            toml::Value::Table(table) => Value::from(table),
        }
    }
}

impl From<toml::Table> for Value {
    fn from(table: toml::Table) -> Self {
        Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_nested() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"a": {"b": 1, "c": [true, null]}, "d": 1.5}"#).unwrap();
        let value = Value::from(json);

        assert_eq!(value.get("a").and_then(|a| a.get("b")), Some(&Value::Integer(1)));
        assert_eq!(
            value.get("a").and_then(|a| a.get("c")),
            Some(&Value::Array(vec![Value::Bool(true), Value::Null]))
        );
        assert_eq!(value.get("d"), Some(&Value::Float(1.5)));
    }

    #[test]
    fn test_from_json_large_unsigned_becomes_float() {
        let json: serde_json::Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(Value::from(json), Value::Float(_)));
    }

    #[test]
    fn test_from_toml_datetime_is_string() {
        let table: toml::Table = toml::from_str("released = 1979-05-27T07:32:00Z").unwrap();
        let value = Value::from(table);

        assert_eq!(
            value.get("released").and_then(Value::as_str),
            Some("1979-05-27T07:32:00Z")
        );
    }

    #[test]
    fn test_get_on_scalar_is_none() {
        assert_eq!(Value::from("hi").get("anything"), None);
        assert_eq!(Value::Array(vec![Value::Integer(0)]).get("0"), None);
    }

    #[test]
    fn test_display() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"msg": "hi", "n": [1, "x"]}"#).unwrap();
        let value = Value::from(json);

        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(value.to_string(), r#"{"msg": "hi", "n": [1, "x"]}"#);
    }
}
