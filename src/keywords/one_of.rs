//! Validator for the `oneOf` keyword.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let schemas = match value {
        Value::Array(schemas) if !schemas.is_empty() => schemas,
        _ => return Err(ctx.schema_error("oneOf must be a non-empty array")),
    };
    let speculative = ctx.set_speculative(true);
    let mut valid = 0usize;
    for (index, subschema) in schemas.iter().enumerate() {
        if ctx.apply(subschema, Some(PathChunk::Index(index)), instance, None)? {
            valid += 1;
        }
    }
    ctx.set_speculative(speculative);
    match valid {
        1 => Ok(true),
        0 => {
            ctx.add_error(format!("{} is not valid under any of the schemas", instance));
            Ok(false)
        }
        _ => {
            // More than one match: the collected annotations are discarded
            // along with the failure.
            ctx.add_error(format!(
                "{} is valid under more than one of the schemas",
                instance
            ));
            Ok(false)
        }
    }
}
