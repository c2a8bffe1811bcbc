//! Validator for the `multipleOf` keyword.
use crate::{context::ValidatorContext, error::SchemaError, keywords::number_value, numbers};
use serde_json::Value;

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let by = number_value(value, ctx)?;
    if !numbers::is_positive(by) {
        return Err(ctx.schema_error("multipleOf must be a positive number"));
    }
    if let Value::Number(item) = instance {
        if !numbers::is_multiple_of(item, by) {
            ctx.add_error(format!("{} is not a multiple of {}", item, by));
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(&json!(0.3))]
    #[test_case(&json!(1.1))]
    #[test_case(&json!(0))]
    #[test_case(&json!("not a number"))]
    fn multiples_of_a_tenth(instance: &serde_json::Value) {
        tests_util::is_valid(&json!({"multipleOf": 0.1}), instance)
    }

    #[test_case(&json!(0.35))]
    #[test_case(&json!(0.30000000000000004))]
    fn not_multiples_of_a_tenth(instance: &serde_json::Value) {
        tests_util::is_not_valid(&json!({"multipleOf": 0.1}), instance)
    }
}
