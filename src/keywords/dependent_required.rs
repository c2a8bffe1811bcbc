//! Validator for the `dependentRequired` keyword.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let dependencies = match value {
        Value::Object(dependencies) => dependencies,
        _ => return Err(ctx.schema_error("dependentRequired must be an object")),
    };
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut result = true;
    for (name, dependents) in dependencies {
        if !object.contains_key(name) {
            continue;
        }
        let dependents = dependents.as_array().ok_or_else(|| {
            ctx.schema_error_at(name, "property dependents must be an array of strings")
        })?;
        for dependent in dependents {
            let dependent = dependent.as_str().ok_or_else(|| {
                ctx.schema_error_at(name, "property dependents must be strings")
            })?;
            if !object.contains_key(dependent) {
                ctx.add_error(format!(
                    "\"{}\" is required when \"{}\" is present",
                    dependent, name
                ));
                result = false;
                if ctx.halted() {
                    return Ok(false);
                }
            }
        }
    }
    Ok(result)
}
