//! Validators for `contentEncoding`, `contentMediaType` and `contentSchema`.
//!
//! Annotation-only unless the `CONTENT` option is set; with it, base64
//! payloads are decoded, JSON media types parsed and `contentSchema` applied
//! to the decoded document.
use crate::{
    content_encoding, content_media_type, context::ValidatorContext, error::SchemaError,
};
use serde_json::Value;

fn sibling_encoding<'v>(ctx: &ValidatorContext<'v>) -> Option<&'v str> {
    ctx.parent_object().get("contentEncoding").and_then(Value::as_str)
}

fn decoded_bytes(ctx: &ValidatorContext, item: &str) -> Option<Vec<u8>> {
    match sibling_encoding(ctx) {
        Some(encoding) if encoding.eq_ignore_ascii_case("base64") => {
            // A broken payload is reported by `contentEncoding` itself.
            content_encoding::from_base64(item).ok()
        }
        Some(_) => None,
        None => Some(item.as_bytes().to_vec()),
    }
}

pub(crate) fn apply_encoding<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let encoding = match value {
        Value::String(encoding) => encoding,
        _ => return Err(ctx.schema_error("contentEncoding must be a string")),
    };
    ctx.add_annotation("contentEncoding", value.clone());
    if !ctx.options().content_is_checked() {
        return Ok(true);
    }
    if let Value::String(item) = instance {
        if encoding.eq_ignore_ascii_case("base64") && !content_encoding::is_base64(item) {
            ctx.add_error(format!("\"{}\" is not encoded as \"{}\"", item, encoding));
            return Ok(false);
        }
    }
    Ok(true)
}

pub(crate) fn apply_media_type<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let media_type = match value {
        Value::String(media_type) => media_type,
        _ => return Err(ctx.schema_error("contentMediaType must be a string")),
    };
    ctx.add_annotation("contentMediaType", value.clone());
    if !ctx.options().content_is_checked() {
        return Ok(true);
    }
    if let Value::String(item) = instance {
        if media_type.eq_ignore_ascii_case("application/json") {
            if let Some(bytes) = decoded_bytes(ctx, item) {
                if !content_media_type::is_json(&bytes) {
                    ctx.add_error(format!("\"{}\" is not of media type \"{}\"", item, media_type));
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

pub(crate) fn apply_schema<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    ctx.check_schema(value, None)?;
    ctx.add_annotation("contentSchema", value.clone());
    if !ctx.options().content_is_checked() {
        return Ok(true);
    }
    // Only meaningful alongside a declared media type.
    let media_type = match ctx.parent_object().get("contentMediaType").and_then(Value::as_str) {
        Some(media_type) => media_type,
        None => return Ok(true),
    };
    if let Value::String(item) = instance {
        if media_type.eq_ignore_ascii_case("application/json") {
            if let Some(bytes) = decoded_bytes(ctx, item) {
                if let Ok(decoded) = serde_json::from_slice::<Value>(&bytes) {
                    return ctx.apply(value, None, &decoded, None);
                }
            }
        }
    }
    Ok(true)
}
