//! Validator for the `allOf` keyword.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let schemas = match value {
        Value::Array(schemas) if !schemas.is_empty() => schemas,
        _ => return Err(ctx.schema_error("allOf must be a non-empty array")),
    };
    let mut result = true;
    for (index, subschema) in schemas.iter().enumerate() {
        if !ctx.apply(subschema, Some(PathChunk::Index(index)), instance, None)? {
            result = false;
            if ctx.halted() {
                break;
            }
        }
    }
    if !result {
        ctx.add_error(format!("{} is not valid under all of the schemas", instance));
    }
    Ok(result)
}
