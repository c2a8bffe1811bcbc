//! Validator for `$defs` (and the pre-2019-09 `definitions` spelling).
//! Members are applied only through references; here the shape is checked.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let members = match value {
        Value::Object(members) => members,
        _ => return Err(ctx.schema_error("must be an object of schemas")),
    };
    for (name, member) in members {
        ctx.check_schema(member, Some(name))?;
    }
    Ok(true)
}
