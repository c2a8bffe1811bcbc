//! Validator for the `$anchor` keyword. Targets are recorded by the ID scan;
//! at evaluation time only the shape is checked.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

lazy_static::lazy_static! {
    static ref ANCHOR_RE: regex::Regex =
        regex::Regex::new(r"^[A-Z_a-z][-A-Z_a-z.0-9]*$").expect("Is a valid regex");
}

pub(crate) fn apply<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    match value {
        Value::String(name) if ANCHOR_RE.is_match(name) => Ok(true),
        Value::String(name) => {
            Err(ctx.schema_error(format!("\"{}\" is not a valid anchor", name)))
        }
        _ => Err(ctx.schema_error("$anchor must be a string")),
    }
}
