//! Annotation-only keywords: `title`, `description`, `default`, `examples`,
//! `deprecated`, `readOnly`, `writeOnly` and `$comment`. Their presence never
//! changes the verdict.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let keyword = ctx.current_keyword();
    match keyword.as_str() {
        "title" | "description" | "$comment" => {
            if !value.is_string() {
                return Err(ctx.schema_error(format!("{} must be a string", keyword)));
            }
        }
        "examples" => {
            if !value.is_array() {
                return Err(ctx.schema_error("examples must be an array"));
            }
        }
        "deprecated" | "readOnly" | "writeOnly" => {
            if !value.is_boolean() {
                return Err(ctx.schema_error(format!("{} must be a boolean", keyword)));
            }
        }
        _ => {}
    }
    ctx.add_annotation(&keyword, value.clone());
    Ok(true)
}
