//! Validators for `contains` and its 2019-09 companions `minContains` and
//! `maxContains`.
//!
//! `contains` annotates the number of matching elements; the bound keywords
//! consume that count. `minContains: 0` makes a match-free array valid.
use crate::{
    context::ValidatorContext,
    error::SchemaError,
    keywords::{non_negative_integer, sibling_items_annotation},
    numbers,
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
    let speculative = ctx.set_speculative(true);
    let mut count = 0u64;
    for (index, item) in items.iter().enumerate() {
        if ctx.apply(value, None, item, Some(PathChunk::Index(index)))? {
            count += 1;
        }
    }
    ctx.set_speculative(speculative);
    ctx.add_annotation("contains", json!(count));
    if count > 0 || min_contains_is_zero(ctx) {
        Ok(true)
    } else {
        ctx.add_error(format!(
            "{} does not contain items matching the given schema",
            instance
        ));
        Ok(false)
    }
}

fn min_contains_is_zero(ctx: &ValidatorContext) -> bool {
    match ctx.parent_object().get("minContains") {
        Some(Value::Number(number)) => !numbers::is_positive(number),
        _ => false,
    }
}

fn annotated_count(ctx: &ValidatorContext) -> Option<u64> {
    match sibling_items_annotation(ctx, "contains") {
        Some(Value::Number(count)) => count.as_u64(),
        _ => None,
    }
}

pub(crate) fn apply_min<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let limit = non_negative_integer(value, ctx)?;
    let count = match annotated_count(ctx) {
        Some(count) => count,
        None => return Ok(true),
    };
    if count < limit {
        ctx.add_error(format!(
            "fewer than {} items matched the \"contains\" schema",
            limit
        ));
        return Ok(false);
    }
    Ok(true)
}

pub(crate) fn apply_max<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let limit = non_negative_integer(value, ctx)?;
    let count = match annotated_count(ctx) {
        Some(count) => count,
        None => return Ok(true),
    };
    if count > limit {
        ctx.add_error(format!(
            "more than {} items matched the \"contains\" schema",
            limit
        ));
        return Ok(false);
    }
    Ok(true)
}
