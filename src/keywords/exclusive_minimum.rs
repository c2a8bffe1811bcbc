//! Validator for the `exclusiveMinimum` keyword.
use crate::{context::ValidatorContext, error::SchemaError, keywords::number_value, numbers};
use serde_json::Value;
use std::cmp::Ordering;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let limit = number_value(value, ctx)?;
    if let Value::Number(item) = instance {
        if numbers::cmp(item, limit) != Ordering::Greater {
            ctx.add_error(format!(
                "{} is less than or equal to the exclusive minimum of {}",
                item, limit
            ));
            return Ok(false);
        }
    }
    Ok(true)
}
