//! Validator for the `additionalProperties` keyword.
//!
//! Consumes the key sets annotated by the sibling `properties` and
//! `patternProperties` keywords and applies its subschema to every key they
//! did not cover.
use crate::{
    context::ValidatorContext,
    error::SchemaError,
    keywords::sibling_key_annotations,
    paths::PathChunk,
};
use ahash::AHashSet;
use serde_json::{json, Value};

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    let object = match instance {
        Value::Object(object) => object,
        _ => return Ok(true),
    };
    let mut evaluated: AHashSet<String> =
        sibling_key_annotations(ctx, "properties").into_iter().collect();
    evaluated.extend(sibling_key_annotations(ctx, "patternProperties"));

    let mut result = true;
    let mut matched = Vec::new();
    for (name, item) in object {
        if evaluated.contains(name) {
            continue;
        }
        if ctx.apply(value, None, item, Some(PathChunk::Name(name.clone())))? {
            matched.push(name.clone());
        } else {
            result = false;
            if ctx.halted() {
                return Ok(false);
            }
        }
    }
    if result {
        // Annotated even when no sibling contributed a key set.
        ctx.add_annotation("additionalProperties", json!(matched));
    }
    Ok(result)
}
