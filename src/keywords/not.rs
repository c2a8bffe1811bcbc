//! Validator for the `not` keyword.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    // `not` never contributes annotations, in either direction.
    let collect = ctx.set_collect_sub_annotations(false);
    let speculative = ctx.set_speculative(true);
    let inner = ctx.apply(value, None, instance, None);
    ctx.set_speculative(speculative);
    ctx.set_collect_sub_annotations(collect);
    if inner? {
        ctx.add_error(format!("{} must not be valid under the given schema", instance));
        Ok(false)
    } else {
        Ok(true)
    }
}
