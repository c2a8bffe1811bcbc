//! Validator for the pre-2019-09 `dependencies` keyword: each member value is
//! either an array of required dependents or a conditional subschema.
use crate::{context::ValidatorContext, error::SchemaError, paths::PathChunk};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let dependencies = match value {
        Value::Object(dependencies) => dependencies,
        _ => return Err(ctx.schema_error("dependencies must be an object")),
    };
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut result = true;
    for (name, dependency) in dependencies {
        if !object.contains_key(name) {
            continue;
        }
        match dependency {
            Value::Array(dependents) => {
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
                    }
                }
            }
            Value::Object(_) | Value::Bool(_) => {
                if !ctx.apply(dependency, Some(PathChunk::Name(name.clone())), instance, None)? {
                    result = false;
                }
            }
            _ => {
                return Err(
                    ctx.schema_error_at(name, "a dependency must be an array or a schema")
                )
            }
        }
        if ctx.halted() {
            break;
        }
    }
    Ok(result)
}
