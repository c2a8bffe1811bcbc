//! Validators for `$ref` and `$recursiveRef`.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let reference = match value {
        Value::String(reference) => reference,
        _ => return Err(ctx.schema_error("$ref must be a string")),
    };
    let base = ctx.base_uri().clone();
    ctx.apply_reference(reference, &base, instance)
}

/// `$recursiveRef` resolves against the outermost promoted recursive base
/// when one exists, and otherwise behaves exactly like `$ref`.
pub(crate) fn apply_recursive<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let reference = match value {
        Value::String(reference) => reference,
        _ => return Err(ctx.schema_error("$recursiveRef must be a string")),
    };
    let base = ctx
        .prev_recursive_base_uri()
        .unwrap_or_else(|| ctx.base_uri())
        .clone();
    ctx.apply_reference(reference, &base, instance)
}
