//! Validator for the `$schema` keyword.
use crate::{context::ValidatorContext, error::SchemaError, specification};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let url = match value {
        Value::String(url) => url,
        _ => return Err(ctx.schema_error("$schema must be a string")),
    };
    // Only a resource root may change the specification in effect; an
    // unknown URI leaves it unchanged.
    if ctx.is_root() {
        if let Some(declared) = specification::specification_from_url(url) {
            ctx.set_specification(declared);
        }
    }
    Ok(true)
}
