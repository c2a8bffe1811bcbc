//! Validator for the `unevaluatedItems` keyword.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::{json, Value};

const EVALUATING: &[&str] = &["items", "additionalItems", "unevaluatedItems"];

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
    // The first index no prior applicator reported as evaluated.
    let mut start = 0usize;
    for name in EVALUATING {
        if let Some(found) = ctx.get_annotations(name) {
            for (location, annotation) in found {
                if !location.starts_with(ctx.schema_parent_location()) {
                    continue;
                }
                match &annotation.value {
                    Value::Bool(true) => return Ok(true),
                    Value::Number(count) => {
                        start = start.max(count.as_u64().unwrap_or(0) as usize)
                    }
                    _ => {}
                }
            }
        }
    }
    let mut result = true;
    for (index, item) in items.iter().enumerate().skip(start) {
        if !ctx.apply(value, None, item, Some(PathChunk::Index(index)))? {
            result = false;
            if ctx.halted() {
                return Ok(false);
            }
        }
    }
    if result {
        ctx.add_annotation("unevaluatedItems", json!(true));
    }
    Ok(result)
}
