//! Validators for `if`, `then` and `else`.
//!
//! `if` never fails the schema; it annotates its verdict, and the branch
//! keywords consume the annotation to decide whether they apply.
use crate::{context::ValidatorContext, error::SchemaError, keywords::sibling_items_annotation};
use serde_json::{json, Value};

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    let speculative = ctx.set_speculative(true);
    let verdict = ctx.apply(value, None, instance, None);
    ctx.set_speculative(speculative);
    ctx.add_annotation("if", json!(verdict?));
    Ok(true)
}

fn branch_taken(ctx: &ValidatorContext, expected: bool) -> bool {
    matches!(
        sibling_items_annotation(ctx, "if"),
        Some(Value::Bool(verdict)) if verdict == expected
    )
}

pub(crate) fn apply_then<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    if !branch_taken(ctx, true) {
        return Ok(true);
    }
    ctx.apply(value, None, instance, None)
}

pub(crate) fn apply_else<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    if !branch_taken(ctx, false) {
        return Ok(true);
    }
    ctx.apply(value, None, instance, None)
}
