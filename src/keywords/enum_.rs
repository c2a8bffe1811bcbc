//! Validator for the `enum` keyword.
use crate::{context::ValidatorContext, error::SchemaError, helpers};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let options = match value {
        Value::Array(options) => options,
        _ => return Err(ctx.schema_error("enum must be an array")),
    };
    if options.iter().any(|option| helpers::equal(instance, option)) {
        Ok(true)
    } else {
        ctx.add_error(format!("{} is not one of the enumerated values", instance));
        Ok(false)
    }
}
