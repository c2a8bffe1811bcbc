//! Validator for the `$vocabulary` keyword.
use crate::{context::ValidatorContext, error::SchemaError};
use serde_json::Value;

const KNOWN_VOCABULARIES: &[&str] = &[
    "https://json-schema.org/draft/2019-09/vocab/core",
    "https://json-schema.org/draft/2019-09/vocab/applicator",
    "https://json-schema.org/draft/2019-09/vocab/validation",
    "https://json-schema.org/draft/2019-09/vocab/meta-data",
    "https://json-schema.org/draft/2019-09/vocab/format",
    "https://json-schema.org/draft/2019-09/vocab/content",
];

pub(crate) fn apply<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let vocabularies = match value {
        Value::Object(vocabularies) => vocabularies,
        _ => return Err(ctx.schema_error("$vocabulary must be an object")),
    };
    for (vocabulary, required) in vocabularies {
        let required = match required {
            Value::Bool(required) => *required,
            _ => {
                return Err(ctx.schema_error_at(
                    vocabulary,
                    "a vocabulary requirement must be a boolean",
                ))
            }
        };
        if required && !KNOWN_VOCABULARIES.contains(&vocabulary.as_str()) {
            return Err(ctx.schema_error(format!(
                "unknown required vocabulary \"{}\"",
                vocabulary
            )));
        }
    }
    Ok(true)
}
