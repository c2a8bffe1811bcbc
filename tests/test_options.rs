use jsonschema_eval::{Specification, Validator};
use serde_json::json;
use url::Url;

fn base() -> Url {
    Url::parse("https://example.com/schema").unwrap()
}

#[test]
fn fail_fast_stops_at_the_first_error() {
    let schema = json!({
        "properties": {
            "a": {"type": "integer"},
            "b": {"type": "integer"}
        },
        "required": ["c"]
    });
    let instance = json!({"a": "x", "b": "y"});
    let collected = Validator::new()
        .validate(&schema, &instance, &base())
        .unwrap();
    assert!(collected.failures().len() >= 3);
    let fast = Validator::options()
        .with_fail_fast(true)
        .build()
        .validate(&schema, &instance, &base())
        .unwrap();
    assert!(!fast.is_valid());
    assert_eq!(fast.failures().len(), 1);
}

#[test]
fn fail_fast_does_not_break_disjunctions() {
    let schema = json!({"anyOf": [{"type": "string"}, {"type": "integer"}]});
    let validator = Validator::options().with_fail_fast(true).build();
    assert!(validator.is_valid(&schema, &json!(5), &base()).unwrap());
    let schema = json!({"not": {"type": "string"}});
    assert!(validator.is_valid(&schema, &json!(5), &base()).unwrap());
}

#[test]
fn format_asserts_per_draft_by_default() {
    let draft7 = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "format": "ipv4"
    });
    let validator = Validator::new();
    assert!(!validator.is_valid(&draft7, &json!("999.1.1.1"), &base()).unwrap());
    // 2019-09 annotates by default.
    let draft2019 = json!({"format": "ipv4"});
    assert!(validator.is_valid(&draft2019, &json!("999.1.1.1"), &base()).unwrap());
    // The option forces either behavior.
    let asserting = Validator::options().with_format(true).build();
    assert!(!asserting.is_valid(&draft2019, &json!("999.1.1.1"), &base()).unwrap());
    let annotating = Validator::options().with_format(false).build();
    assert!(annotating.is_valid(&draft7, &json!("999.1.1.1"), &base()).unwrap());
}

#[test]
fn unknown_formats_are_annotations() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "format": "custom"
    });
    assert!(Validator::new().is_valid(&schema, &json!("anything"), &base()).unwrap());
}

#[test]
fn content_keywords_annotate_by_default_and_assert_with_the_option() {
    let schema = json!({
        "contentEncoding": "base64",
        "contentMediaType": "application/json"
    });
    let lenient = Validator::new();
    assert!(lenient.is_valid(&schema, &json!("{not json or base64"), &base()).unwrap());

    let checking = Validator::options().with_content(true).build();
    // `eyJmb28iOiAiYmFyIn0=` is `{"foo": "bar"}`.
    assert!(checking
        .is_valid(&schema, &json!("eyJmb28iOiAiYmFyIn0="), &base())
        .unwrap());
    assert!(!checking.is_valid(&schema, &json!("^^garbage^^"), &base()).unwrap());
    // Valid base64, but not JSON.
    assert!(!checking.is_valid(&schema, &json!("aGVsbG8="), &base()).unwrap());
    // Non-strings are out of scope for content keywords.
    assert!(checking.is_valid(&schema, &json!(42), &base()).unwrap());
}

#[test]
fn content_schema_applies_to_the_decoded_document() {
    let schema = json!({
        "contentEncoding": "base64",
        "contentMediaType": "application/json",
        "contentSchema": {"required": ["foo"]}
    });
    let checking = Validator::options().with_content(true).build();
    assert!(checking
        .is_valid(&schema, &json!("eyJmb28iOiAiYmFyIn0="), &base())
        .unwrap());
    // `eyJiYXIiOiAxfQ==` is `{"bar": 1}`.
    assert!(!checking
        .is_valid(&schema, &json!("eyJiYXIiOiAxfQ=="), &base())
        .unwrap());
}

#[test]
fn auto_resolve_governs_relative_ids() {
    let schema = json!({"$id": "relative/only"});
    assert!(Validator::new().validate(&schema, &json!(1), &base()).is_ok());
    let strict = Validator::options().with_auto_resolve(false).build();
    assert!(strict.validate(&schema, &json!(1), &base()).is_err());
}

#[test]
fn default_specification_is_used_without_schema_keyword() {
    let schema = json!({"dependentRequired": {"a": ["b"]}});
    let draft7 = Validator::options()
        .with_default_specification(Specification::Draft7)
        .build();
    // Not a Draft 7 keyword, hence no constraint.
    assert!(draft7.is_valid(&schema, &json!({"a": 1}), &base()).unwrap());
    assert!(!Validator::new().is_valid(&schema, &json!({"a": 1}), &base()).unwrap());
}
