//! Validator for the `pattern` keyword.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let pattern = match value {
        Value::String(pattern) => pattern,
        _ => return Err(ctx.schema_error("pattern must be a string")),
    };
    // ECMA 262 semantics, unanchored.
    let compiled = fancy_regex::Regex::new(pattern)
        .map_err(|_| ctx.schema_error(format!("\"{}\" is not a valid regular expression", pattern)))?;
    if let Value::String(item) = instance {
        if !matches!(compiled.is_match(item), Ok(true)) {
            ctx.add_error(format!("\"{}\" does not match \"{}\"", item, pattern));
            return Ok(false);
        }
    }
    Ok(true)
}
