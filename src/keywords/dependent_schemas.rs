//! Validator for the `dependentSchemas` keyword.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let dependencies = match value {
        Value::Object(dependencies) => dependencies,
        _ => return Err(ctx.schema_error("dependentSchemas must be an object")),
    };
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut result = true;
    for (name, subschema) in dependencies {
        if !object.contains_key(name) {
            continue;
        }
        if !ctx.apply(subschema, Some(PathChunk::Name(name.clone())), instance, None)? {
            result = false;
            if ctx.halted() {
                break;
            }
        }
    }
    Ok(result)
}
