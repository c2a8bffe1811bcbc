//! Primitive types for the `type` keyword.
use serde_json::Value;
use std::{convert::TryFrom, fmt};

/// For faster error handling in "type" keyword validator we have this enum, to match
/// with it instead of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    /// JSON array.
    Array,
    /// JSON boolean.
    Boolean,
    /// JSON integer: a number with a zero fractional part after normalization.
    Integer,
    /// JSON null.
    Null,
    /// JSON number.
    Number,
    /// JSON object.
    Object,
    /// JSON string.
    String,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Array => f.write_str("array"),
            PrimitiveType::Boolean => f.write_str("boolean"),
            PrimitiveType::Integer => f.write_str("integer"),
            PrimitiveType::Null => f.write_str("null"),
            PrimitiveType::Number => f.write_str("number"),
            PrimitiveType::Object => f.write_str("object"),
            PrimitiveType::String => f.write_str("string"),
        }
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            _ => Err(()),
        }
    }
}

/// Whether `instance` inhabits `expected`. `integer` also accepts numbers
/// whose exact decimal value has no fractional part, e.g. `1.0`.
pub(crate) fn instance_matches(instance: &Value, expected: PrimitiveType) -> bool {
    match expected {
        PrimitiveType::Array => instance.is_array(),
        PrimitiveType::Boolean => instance.is_boolean(),
        PrimitiveType::Integer => match instance {
            Value::Number(number) => crate::numbers::is_integer(number),
            _ => false,
        },
        PrimitiveType::Null => instance.is_null(),
        PrimitiveType::Number => instance.is_number(),
        PrimitiveType::Object => instance.is_object(),
        PrimitiveType::String => instance.is_string(),
    }
}

/// The primitive type of a JSON value, for error messages.
pub(crate) fn primitive_type(instance: &Value) -> PrimitiveType {
    match instance {
        Value::Null => PrimitiveType::Null,
        Value::Bool(_) => PrimitiveType::Boolean,
        Value::Number(_) => PrimitiveType::Number,
        Value::String(_) => PrimitiveType::String,
        Value::Array(_) => PrimitiveType::Array,
        Value::Object(_) => PrimitiveType::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(&json!(1), PrimitiveType::Integer, true)]
    #[test_case(&json!(1.0), PrimitiveType::Integer, true)]
    #[test_case(&json!(1.5), PrimitiveType::Integer, false)]
    #[test_case(&json!(1.5), PrimitiveType::Number, true)]
    #[test_case(&json!("5"), PrimitiveType::Number, false)]
    #[test_case(&json!(null), PrimitiveType::Null, true)]
    #[test_case(&json!([1]), PrimitiveType::Array, true)]
    #[test_case(&json!({}), PrimitiveType::Object, true)]
    fn test_instance_matches(instance: &serde_json::Value, expected: PrimitiveType, result: bool) {
        assert_eq!(instance_matches(instance, expected), result);
    }

    #[test]
    fn parse_and_display() {
        for name in &["array", "boolean", "integer", "null", "number", "object", "string"] {
            let parsed = PrimitiveType::try_from(*name).unwrap();
            assert_eq!(&parsed.to_string(), name);
        }
        assert!(PrimitiveType::try_from("float").is_err());
    }
}
