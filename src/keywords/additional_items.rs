//! Validator for the `additionalItems` keyword.
//!
//! Meaningful only next to an array-form `items`; consumes its count
//! annotation and applies to the elements beyond it.
use crate::{
    context::ValidatorContext,
    error::SchemaError,
    keywords::sibling_items_annotation,
    paths::PathChunk,
};
use serde_json::{json, Value};

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    let items = match instance {
        Value::Array(items) => items,
        _ => return Ok(true),
    };
    let start = match sibling_items_annotation(ctx, "items") {
        // Schema-form `items` already covered every element.
        Some(Value::Bool(true)) => return Ok(true),
        Some(Value::Number(count)) => count.as_u64().unwrap_or(0) as usize,
        // Without an array-form `items` there is nothing "additional".
        _ => return Ok(true),
    };
    let mut result = true;
    let mut any = false;
    for (index, item) in items.iter().enumerate().skip(start) {
        any = true;
        if !ctx.apply(value, None, item, Some(PathChunk::Index(index)))? {
            result = false;
            if ctx.halted() {
                return Ok(false);
            }
        }
    }
    if result && any {
        ctx.add_annotation("additionalItems", json!(true));
    }
    Ok(result)
}
