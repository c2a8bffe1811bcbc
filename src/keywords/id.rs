//! Validator for the `$id` keyword: re-anchors the base URI for the
//! enclosing schema object and everything below it.
use crate::{context::ValidatorContext, error::SchemaError, specification::Specification, uri};
use serde_json::Value;
use url::Url;

lazy_static::lazy_static! {
    static ref ANCHOR_RE: regex::Regex =
        regex::Regex::new(r"^[A-Z_a-z][-A-Z_a-z.0-9]*$").expect("Is a valid regex");
}

pub(crate) fn apply<'a>(
    value: &'a Value,
    _: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let lexeme = match value {
        Value::String(lexeme) => lexeme,
        _ => return Err(ctx.schema_error("$id must be a string")),
    };
    let resolved = if ctx.options().auto_resolve() {
        uri::resolve(ctx.base_uri(), lexeme)
    } else {
        Url::parse(lexeme)
    }
    .map_err(|_| ctx.schema_error(format!("\"{}\" is not a valid URI-reference", lexeme)))?;
    if uri::has_non_empty_fragment(&resolved) {
        if ctx.specification() >= Specification::Draft201909 {
            return Err(ctx.schema_error("$id must not carry a non-empty fragment"));
        }
        if !ANCHOR_RE.is_match(uri::raw_fragment(&resolved)) {
            return Err(ctx.schema_error(format!(
                "\"{}\" is not a valid anchor fragment",
                uri::raw_fragment(&resolved)
            )));
        }
        // Anchor form: addressable, but the base stays put.
        return Ok(true);
    }
    ctx.set_base_uri(uri::normalize(&resolved));
    Ok(true)
}
