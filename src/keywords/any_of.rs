//! Validator for the `anyOf` keyword.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let schemas = match value {
        Value::Array(schemas) if !schemas.is_empty() => schemas,
        _ => return Err(ctx.schema_error("anyOf must be a non-empty array")),
    };
    // Every subschema is applied, so annotations of all passing branches are
    // collected, not just the first.
    let speculative = ctx.set_speculative(true);
    let mut result = false;
    for (index, subschema) in schemas.iter().enumerate() {
        if ctx.apply(subschema, Some(PathChunk::Index(index)), instance, None)? {
            result = true;
        }
    }
    ctx.set_speculative(speculative);
    if !result {
        ctx.add_error(format!("{} is not valid under any of the schemas", instance));
    }
    Ok(result)
}
