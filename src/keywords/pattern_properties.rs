//! Validator for the `patternProperties` keyword.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::{json, Value};

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let schemas = match value {
        Value::Object(schemas) => schemas,
        _ => return Err(ctx.schema_error("patternProperties must be an object")),
    };
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut result = true;
    let mut matched = Vec::new();
    for (pattern, subschema) in schemas {
        let compiled = fancy_regex::Regex::new(pattern).map_err(|_| {
            ctx.schema_error_at(pattern, format!("\"{}\" is not a valid regular expression", pattern))
        })?;
        for (name, item) in object {
            if !matches!(compiled.is_match(name), Ok(true)) {
                continue;
            }
            if ctx.apply(
                subschema,
                Some(PathChunk::Name(pattern.clone())),
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
    }
    if result {
        ctx.add_annotation("patternProperties", json!(matched));
    }
    Ok(result)
}
