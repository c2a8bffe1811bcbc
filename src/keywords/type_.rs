//! Validator for the `type` keyword.
use crate::{
    context::ValidatorContext,
    error::SchemaError,
    primitive_type::{instance_matches, PrimitiveType},
};
use serde_json::Value;
use std::convert::TryFrom;

fn parse(name: &Value, ctx: &ValidatorContext) -> Result<PrimitiveType, SchemaError> {
    name.as_str()
        .and_then(|name| PrimitiveType::try_from(name).ok())
        .ok_or_else(|| ctx.schema_error(format!("{} is not a valid type", name)))
}

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    match value {
        Value::String(_) => {
            let expected = parse(value, ctx)?;
            if instance_matches(instance, expected) {
                Ok(true)
            } else {
                ctx.add_error(format!("{} is not of type \"{}\"", instance, expected));
                Ok(false)
            }
        }
        Value::Array(options) => {
            let mut expected = Vec::with_capacity(options.len());
            for option in options {
                expected.push(parse(option, ctx)?);
            }
            if expected
                .iter()
                .any(|expected| instance_matches(instance, *expected))
            {
                Ok(true)
            } else {
                let names = expected
                    .iter()
                    .map(|expected| format!("\"{}\"", expected))
                    .collect::<Vec<_>>()
                    .join(", ");
                ctx.add_error(format!("{} is not of types {}", instance, names));
                Ok(false)
            }
        }
        _ => Err(ctx.schema_error("type must be a string or an array of strings")),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(&json!({"type": "integer"}), &json!(1))]
    #[test_case(&json!({"type": "integer"}), &json!(1.0) ; "integral float")]
    #[test_case(&json!({"type": ["string", "null"]}), &json!(null))]
    #[test_case(&json!({"type": "number"}), &json!(1e308))]
    fn valid(schema: &serde_json::Value, instance: &serde_json::Value) {
        tests_util::is_valid(schema, instance)
    }

    #[test_case(&json!({"type": "integer"}), &json!(1.5))]
    #[test_case(&json!({"type": "integer"}), &json!("1"))]
    #[test_case(&json!({"type": ["string", "null"]}), &json!(1))]
    #[test_case(&json!({"type": "object"}), &json!([]))]
    fn invalid(schema: &serde_json::Value, instance: &serde_json::Value) {
        tests_util::is_not_valid(schema, instance)
    }
}
