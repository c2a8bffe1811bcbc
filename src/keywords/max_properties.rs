//! Validator for the `maxProperties` keyword.
use crate::{context::ValidatorContext, error::SchemaError, keywords::non_negative_integer};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let limit = non_negative_integer(value, ctx)?;
    if let Value::Object(object) = instance {
        if (object.len() as u64) > limit {
            ctx.add_error(format!("{} has more than {} properties", instance, limit));
            return Ok(false);
        }
    }
    Ok(true)
}
