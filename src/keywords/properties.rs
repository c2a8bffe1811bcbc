//! Validator for the `properties` keyword.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::{json, Value};

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let schemas = match value {
        Value::Object(schemas) => schemas,
        _ => return Err(ctx.schema_error("properties must be an object")),
    };
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut result = true;
    let mut matched = Vec::new();
    for (name, subschema) in schemas {
        let item = match object.get(name) {
            Some(item) => item,
            None => continue,
        };
        if ctx.apply(
            subschema,
            Some(PathChunk::Name(name.clone())),
            item,
            Some(PathChunk::Name(name.clone())),
        )? {
            matched.push(name.clone());
        } else {
            result = false;
            if ctx.halted() {
                return Ok(false);
            }
        }
    }
    if result {
        ctx.add_annotation("properties", json!(matched));
    }
    Ok(result)
}
