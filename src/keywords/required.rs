//! Validator for the `required` keyword.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let names = match value {
        Value::Array(names) => names,
        _ => return Err(ctx.schema_error("required must be an array of strings")),
    };
    let mut required = Vec::with_capacity(names.len());
    for name in names {
        required.push(
            name.as_str()
                .ok_or_else(|| ctx.schema_error("required must be an array of strings"))?,
        );
    }
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut result = true;
    for name in required {
        if !object.contains_key(name) {
            ctx.add_error(format!("\"{}\" is a required property", name));
            result = false;
            if ctx.halted() {
                break;
            }
        }
    }
    Ok(result)
}
