//! Validator for the `format` keyword.
//!
//! Every checker is a pure predicate over the string instance. Whether
//! `format` asserts or merely annotates depends on the `FORMAT` option and
//! the specification in effect.
use crate::{context::ValidatorContext, error::SchemaError};
use regex::Regex;
use serde_json::Value;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use time::{format_description::well_known::Rfc3339, Date, OffsetDateTime};
use url::Url;
use uuid::Uuid;

lazy_static::lazy_static! {
    static ref DATE_RE: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}\z").expect("Is a valid regex");
    static ref TIME_RE: Regex = Regex::new(
        r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9]|60)(\.[0-9]+)?(([Zz])|([+-]([01][0-9]|2[0-3]):[0-5][0-9]))\z",
    )
    .expect("Is a valid regex");
    static ref IRI_REFERENCE_RE: Regex =
        Regex::new(r"^(\w+:(/?/?))?[^#\\\s]*(#[^\\\s]*)?\z").expect("Is a valid regex");
    static ref URI_REFERENCE_RE: Regex =
        Regex::new(r"^(\w+:(/?/?))?[^#\\\s]*(#[^\\\s]*)?\z").expect("Is a valid regex");
    static ref JSON_POINTER_RE: Regex =
        Regex::new(r"^(/(([^/~])|(~[01]))*)*\z").expect("Is a valid regex");
    static ref RELATIVE_JSON_POINTER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)\z").expect("Is a valid regex");
    static ref URI_TEMPLATE_RE: Regex = Regex::new(
        r#"^(?:(?:[^\x00-\x20"'<>%\\^`{|}]|%[0-9a-f]{2})|\{[+#./;?&=,!@|]?(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?(?:,(?:[a-z0-9_]|%[0-9a-f]{2})+(?::[1-9][0-9]{0,3}|\*)?)*})*\z"#
    )
    .expect("Is a valid regex");
}

fn is_valid_date_time(item: &str) -> bool {
    OffsetDateTime::parse(item, &Rfc3339).is_ok()
}

fn is_valid_date(item: &str) -> bool {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    // The regex rules out shapes the parser would quietly tolerate.
    Date::parse(item, format).is_ok() && DATE_RE.is_match(item)
}

fn is_valid_time(item: &str) -> bool {
    TIME_RE.is_match(item)
}

fn is_valid_duration(item: &str) -> bool {
    iso8601::duration(item).is_ok()
}

fn is_valid_email(item: &str) -> bool {
    item.contains('@')
}

fn is_valid_hostname(item: &str) -> bool {
    !(item.ends_with('-')
        || item.starts_with('-')
        || item.is_empty()
        || item.chars().count() > 255
        || item
            .chars()
            .any(|c| !(c.is_alphanumeric() || c == '-' || c == '.'))
        || item.split('.').any(|part| part.chars().count() > 63))
}

fn is_valid_ipv4(item: &str) -> bool {
    if item
        .split('.')
        .any(|octet| octet.len() > 1 && octet.starts_with('0'))
    {
        return false;
    }
    Ipv4Addr::from_str(item).is_ok()
}

fn is_valid_ipv6(item: &str) -> bool {
    Ipv6Addr::from_str(item).is_ok()
}

fn is_valid_uri(item: &str) -> bool {
    Url::from_str(item).is_ok()
}

fn is_valid_uri_reference(item: &str) -> bool {
    URI_REFERENCE_RE.is_match(item)
}

fn is_valid_iri_reference(item: &str) -> bool {
    IRI_REFERENCE_RE.is_match(item)
}

fn is_valid_uuid(item: &str) -> bool {
    // `Uuid` also accepts unhyphenated forms; the format does not.
    item.len() == 36 && Uuid::parse_str(item).is_ok()
}

fn is_valid_uri_template(item: &str) -> bool {
    URI_TEMPLATE_RE.is_match(item)
}

fn is_valid_json_pointer(item: &str) -> bool {
    JSON_POINTER_RE.is_match(item)
}

fn is_valid_relative_json_pointer(item: &str) -> bool {
    RELATIVE_JSON_POINTER_RE.is_match(item)
}

fn is_valid_regex(item: &str) -> bool {
    fancy_regex::Regex::new(item).is_ok()
}

type FormatCheck = fn(&str) -> bool;

/// The checker for a known format name.
pub(crate) fn checker(format: &str) -> Option<FormatCheck> {
    match format {
        "date-time" => Some(is_valid_date_time),
        "date" | "full-date" => Some(is_valid_date),
        "time" | "full-time" => Some(is_valid_time),
        "duration" => Some(is_valid_duration),
        "email" | "idn-email" => Some(is_valid_email),
        "hostname" | "idn-hostname" => Some(is_valid_hostname),
        "ipv4" => Some(is_valid_ipv4),
        "ipv6" => Some(is_valid_ipv6),
        "uri" | "iri" => Some(is_valid_uri),
        "uri-reference" => Some(is_valid_uri_reference),
        "iri-reference" => Some(is_valid_iri_reference),
        "uuid" => Some(is_valid_uuid),
        "uri-template" => Some(is_valid_uri_template),
        "json-pointer" => Some(is_valid_json_pointer),
        "relative-json-pointer" => Some(is_valid_relative_json_pointer),
        "regex" => Some(is_valid_regex),
        _ => None,
    }
}

pub(crate) fn apply<'a>(
    value: &'a Value,
    instance: &Value,
    ctx: &mut ValidatorContext<'a>,
) -> Result<bool, SchemaError> {
    let format = match value {
        Value::String(format) => format,
        _ => return Err(ctx.schema_error("format must be a string")),
    };
    ctx.add_annotation("format", value.clone());
    if !ctx.options().format_is_assertion(ctx.specification()) {
        return Ok(true);
    }
    let check = match checker(format) {
        Some(check) => check,
        // Unknown formats annotate only.
        None => return Ok(true),
    };
    if let Value::String(item) = instance {
        if !check(item) {
            ctx.add_error(format!("\"{}\" is not a \"{}\"", item, format));
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("date-time", "1963-06-19T08:30:06Z", true)]
    #[test_case("date-time", "1963-06-19T08:30:06.283185+02:00", true)]
    #[test_case("date-time", "08:30:06 PM", false)]
    #[test_case("date", "1963-06-19", true)]
    #[test_case("date", "06/19/1963", false)]
    #[test_case("date", "1963-6-19", false)]
    #[test_case("time", "08:30:06Z", true)]
    #[test_case("time", "08:30:06+02:00", true)]
    #[test_case("time", "08:30:06", false)]
    #[test_case("duration", "P1Y2M3DT4H5M6S", true)]
    #[test_case("duration", "yesterday", false)]
    #[test_case("email", "joe.bloggs@example.com", true)]
    #[test_case("email", "not-an-email", false)]
    #[test_case("hostname", "www.example.com", true)]
    #[test_case("hostname", "-bad-host", false)]
    #[test_case("ipv4", "192.168.0.1", true)]
    #[test_case("ipv4", "192.168.0.01", false)]
    #[test_case("ipv4", "256.0.0.1", false)]
    #[test_case("ipv6", "::1", true)]
    #[test_case("ipv6", "12345::", false)]
    #[test_case("uri", "https://example.com/path", true)]
    #[test_case("uri", "relative/path", false)]
    #[test_case("uri-reference", "relative/path#frag", true)]
    #[test_case("uuid", "2eb8aa08-aa98-11ea-b4aa-73b441d16380", true)]
    #[test_case("uuid", "2eb8aa08aa9811eab4aa73b441d16380", false)]
    #[test_case("json-pointer", "/a/~0b", true)]
    #[test_case("json-pointer", "a/b", false)]
    #[test_case("relative-json-pointer", "1/a", true)]
    #[test_case("relative-json-pointer", "/a", false)]
    #[test_case("regex", "a+b*", true)]
    #[test_case("regex", "(unclosed", false)]
    fn checkers(format: &str, item: &str, expected: bool) {
        let check = checker(format).unwrap();
        assert_eq!(check(item), expected, "{} / {}", format, item);
    }

    #[test]
    fn unknown_formats_have_no_checker() {
        assert!(checker("custom").is_none());
    }
}
