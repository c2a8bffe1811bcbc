//! Validator for the `unevaluatedProperties` keyword.
//!
//! Sees the key sets annotated by `properties`, `patternProperties`,
//! `additionalProperties` and `unevaluatedProperties` at any schema location
//! below the enclosing object, including those reached through `$ref` and
//! in-place applicators.
use crate::{
    context::ValidatorContext,
    error::SchemaError,
    keywords::nested_key_annotations,
    paths::PathChunk,
};
use ahash::AHashSet;
use serde_json::{json, Value};

const EVALUATING: &[&str] = &[
    "properties",
    "patternProperties",
    "additionalProperties",
    "unevaluatedProperties",
];

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
    let mut evaluated = AHashSet::new();
    for name in EVALUATING {
        evaluated.extend(nested_key_annotations(ctx, name));
    }

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
        ctx.add_annotation("unevaluatedProperties", json!(matched));
    }
    Ok(result)
}
