//! Validator for the `items` keyword, in both its schema and array forms.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::{json, Value};

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    if !matches!(value, Value::Array(_) | Value::Object(_) | Value::Bool(_)) {
        return Err(ctx.schema_error("items must be a schema or an array of schemas"));
    }
    let items = match instance {
        Value::Array(items) => items,
        _ => return Ok(true),
    };
    let mut result = true;
    if let Value::Array(schemas) = value {
        // Position-wise application; an empty array form is tolerated.
        let applied = schemas.len().min(items.len());
        for (index, (subschema, item)) in schemas.iter().zip(items.iter()).enumerate() {
            if !ctx.apply(
                subschema,
                Some(PathChunk::Index(index)),
                item,
                Some(PathChunk::Index(index)),
            )? {
                result = false;
                if ctx.halted() {
                    return Ok(false);
                }
            }
        }
        if result {
            ctx.add_annotation("items", json!(applied));
        }
    } else {
        for (index, item) in items.iter().enumerate() {
            if !ctx.apply(value, None, item, Some(PathChunk::Index(index)))? {
                result = false;
                if ctx.halted() {
                    return Ok(false);
                }
            }
        }
        if result {
            ctx.add_annotation("items", json!(true));
        }
    }
    Ok(result)
}
