//! Validator for the `const` keyword.
use crate::{context::ValidatorContext, error::SchemaError, helpers};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    if helpers::equal(instance, value) {
        Ok(true)
    } else {
        ctx.add_error(format!("{} was expected", value));
        Ok(false)
    }
}
