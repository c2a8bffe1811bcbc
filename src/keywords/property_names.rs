//! Validator for the `propertyNames` keyword.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut result = true;
    for name in object.keys() {
        // The subschema sees the property name as a string instance.
        let item = Value::String(name.clone());
        if !ctx.apply(value, None, &item, None)? {
            result = false;
            if ctx.halted() {
                break;
            }
        }
    }
    Ok(result)
}
