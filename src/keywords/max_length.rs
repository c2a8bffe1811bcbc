//! Validator for the `maxLength` keyword.
use crate::{context::ValidatorContext, error::SchemaError, keywords::non_negative_integer};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let limit = non_negative_integer(value, ctx)?;
    if let Value::String(item) = instance {
        if (bytecount::num_chars(item.as_bytes()) as u64) > limit {
            ctx.add_error(format!("\"{}\" is longer than {} characters", item, limit));
            return Ok(false);
        }
    }
    Ok(true)
}
