//! Keyword reducers.
//!
//! One module per keyword or small keyword family. Every reducer has the
//! shape `fn apply(value, instance, context) -> Result<bool, SchemaError>`:
//! `Err` is a malformed schema, `Ok(false)` a recorded validation failure.
pub(crate) mod additional_items;
pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod anchor;
pub(crate) mod any_of;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod content;
pub(crate) mod defs;
pub(crate) mod dependencies;
pub(crate) mod dependent_required;
pub(crate) mod dependent_schemas;
pub(crate) mod enum_;
pub(crate) mod exclusive_maximum;
pub(crate) mod exclusive_minimum;
pub(crate) mod format;
pub(crate) mod id;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod meta_data;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod recursive_anchor;
pub(crate) mod ref_;
pub(crate) mod required;
pub(crate) mod schema;
pub(crate) mod type_;
pub(crate) mod unevaluated_items;
pub(crate) mod unevaluated_properties;
pub(crate) mod unique_items;
pub(crate) mod vocabulary;

use crate::{context::ValidatorContext, error::SchemaError, numbers, paths::JsonPointer};
use bigdecimal::ToPrimitive;
use serde_json::{Number, Value};

/// The value of a limit keyword: a non-negative integer, possibly written
/// with a fractional or exponent part (`2.0`, `1e2`).
pub(crate) fn non_negative_integer(
    value: &Value,
    ctx: &ValidatorContext,
) -> Result<u64, SchemaError> {
    let number = number_value(value, ctx)?;
    if let Some(limit) = number.as_u64() {
        return Ok(limit);
    }
    if numbers::is_integer(number) {
        if let Some(limit) = numbers::decimal(number).to_u64() {
            return Ok(limit);
        }
    }
    Err(ctx.schema_error("expected a non-negative integer"))
}

/// The value of a numeric keyword.
pub(crate) fn number_value<'v>(
    value: &'v Value,
    ctx: &ValidatorContext,
) -> Result<&'v Number, SchemaError> {
    match value {
        Value::Number(number) => Ok(number),
        _ => Err(ctx.schema_error("expected a number")),
    }
}

/// Key sets annotated by sibling keywords named `name`, i.e. annotations
/// whose schema location sits directly in the current schema object.
pub(crate) fn sibling_key_annotations(ctx: &ValidatorContext, name: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(found) = ctx.get_annotations(name) {
        for (location, annotation) in found {
            if &location.parent() != ctx.schema_parent_location() {
                continue;
            }
            if let Value::Array(names) = &annotation.value {
                keys.extend(names.iter().filter_map(Value::as_str).map(str::to_string));
            }
        }
    }
    keys
}

/// Key sets annotated by keywords named `name` anywhere at or below the
/// current schema object (the `unevaluated*` visibility rule).
pub(crate) fn nested_key_annotations(ctx: &ValidatorContext, name: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(found) = ctx.get_annotations(name) {
        for (location, annotation) in found {
            if !location.starts_with(ctx.schema_parent_location()) {
                continue;
            }
            if let Value::Array(names) = &annotation.value {
                keys.extend(names.iter().filter_map(Value::as_str).map(str::to_string));
            }
        }
    }
    keys
}

/// The item-count annotation contributed by a sibling keyword named `name`:
/// `true` means every element was covered, a number is the count covered.
pub(crate) fn sibling_items_annotation(ctx: &ValidatorContext, name: &str) -> Option<Value> {
    let found = ctx.get_annotations(name)?;
    let parent: &JsonPointer = ctx.schema_parent_location();
    found
        .iter()
        .find(|(location, _)| &location.parent() == parent)
        .map(|(_, annotation)| annotation.value.clone())
}
