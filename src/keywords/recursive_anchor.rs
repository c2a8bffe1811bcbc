//! Validator for the `$recursiveAnchor` keyword.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    match value {
        Value::Bool(true) => {
            ctx.promote_recursive_base();
            Ok(true)
        }
        Value::Bool(false) => Ok(true),
        _ => Err(ctx.schema_error("$recursiveAnchor must be a boolean")),
    }
}
