//! Validator for the `uniqueItems` keyword.
use crate::{context::ValidatorContext, error::SchemaError, helpers};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let unique = match value {
        Value::Bool(unique) => *unique,
        _ => return Err(ctx.schema_error("uniqueItems must be a boolean")),
    };
    if !unique {
        return Ok(true);
    }
    if let Value::Array(items) = instance {
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|other| helpers::equal(item, other)) {
                ctx.add_error(format!("{} has non-unique elements", instance));
                return Ok(false);
            }
        }
    }
    Ok(true)
}
