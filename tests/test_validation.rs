use jsonschema_eval::{is_valid, Specification, Validator};
use serde_json::{json, Value};
use test_case::test_case;
use url::Url;

fn base() -> Url {
    Url::parse("https://example.com/schema").unwrap()
}

fn check(schema: &Value, instance: &Value, expected: bool) {
    let outcome = Validator::new().validate(schema, instance, &base()).unwrap();
    assert_eq!(
        outcome.is_valid(),
        expected,
        "{} against {}",
        instance,
        schema
    );
    if !expected {
        assert!(!outcome.failures().is_empty());
    }
}

#[test_case(&json!(0), true)]
#[test_case(&json!(9), true)]
#[test_case(&json!(10), false ; "at the exclusive maximum")]
#[test_case(&json!(9.9), false ; "not an integer")]
#[test_case(&json!("5"), false ; "not a number")]
fn draft7_numeric_bounds(instance: &Value, expected: bool) {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "integer",
        "minimum": 0,
        "exclusiveMaximum": 10
    });
    check(&schema, instance, expected);
}

#[test_case(&json!({"a": "x"}), true)]
#[test_case(&json!({"a": "x", "b": 1}), false)]
#[test_case(&json!({}), true)]
fn unevaluated_properties(instance: &Value, expected: bool) {
    let schema = json!({
        "properties": {"a": {"type": "string"}},
        "unevaluatedProperties": false
    });
    check(&schema, instance, expected);
}

#[test_case(&json!({"n": 1}), true)]
#[test_case(&json!({"n": 1, "x": 2}), false)]
fn additional_properties_next_to_all_of(instance: &Value, expected: bool) {
    let schema = json!({
        "allOf": [{"type": "object"}],
        "properties": {"n": {"type": "number"}},
        "additionalProperties": false
    });
    check(&schema, instance, expected);
}

#[test_case(&json!([1, 2, 3]), true)]
#[test_case(&json!([1, "x"]), false)]
#[test_case(&json!([]), true)]
fn items_through_a_reference(instance: &Value, expected: bool) {
    let schema = json!({
        "$id": "https://e.x/s",
        "items": {"$ref": "#/$defs/T"},
        "$defs": {"T": {"type": "integer"}}
    });
    check(&schema, instance, expected);
}

#[test_case(&json!(5), false ; "matches both alternatives")]
#[test_case(&json!(5.5), true ; "matches exactly one")]
#[test_case(&json!("x"), false ; "matches neither")]
fn one_of_overlapping_alternatives(instance: &Value, expected: bool) {
    let schema = json!({"oneOf": [{"type": "number"}, {"type": "integer"}]});
    check(&schema, instance, expected);
}

#[test_case(&json!([1, 42, 42, 3]), true)]
#[test_case(&json!([42]), false)]
#[test_case(&json!([42, 42, 42]), true)]
fn contains_with_min_contains(instance: &Value, expected: bool) {
    let schema = json!({"contains": {"const": 42}, "minContains": 2});
    check(&schema, instance, expected);
}

#[test]
fn multiple_of_uses_exact_decimals() {
    let schema = json!({"multipleOf": 0.1});
    check(&schema, &json!(0.3), true);
    check(&schema, &json!(0.25), false);
}

#[test_case(&json!([1, 42, 42]), true)]
#[test_case(&json!([42, 42, 42]), false ; "too many matches")]
#[test_case(&json!([1, 2, 3]), true ; "zero matches allowed by minContains zero")]
fn max_contains_with_min_contains_zero(instance: &Value, expected: bool) {
    let schema = json!({"contains": {"const": 42}, "minContains": 0, "maxContains": 2});
    check(&schema, instance, expected);
}

#[test]
fn if_then_else() {
    let schema = json!({
        "if": {"type": "string"},
        "then": {"minLength": 2},
        "else": {"minimum": 10}
    });
    check(&schema, &json!("ab"), true);
    check(&schema, &json!("a"), false);
    check(&schema, &json!(12), true);
    check(&schema, &json!(2), false);
}

#[test]
fn dependencies_both_forms() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "dependencies": {
            "credit_card": ["billing_address"],
            "name": {"required": ["first"]}
        }
    });
    check(&schema, &json!({"credit_card": 1, "billing_address": "x"}), true);
    check(&schema, &json!({"credit_card": 1}), false);
    check(&schema, &json!({"name": "n", "first": "f"}), true);
    check(&schema, &json!({"name": "n"}), false);
    check(&schema, &json!({}), true);
}

#[test]
fn dependencies_is_not_a_keyword_in_2019() {
    // Replaced by `dependentRequired` / `dependentSchemas`.
    let schema = json!({"dependencies": {"credit_card": ["billing_address"]}});
    check(&schema, &json!({"credit_card": 1}), true);
}

#[test]
fn dependent_keywords() {
    let schema = json!({
        "dependentRequired": {"a": ["b"]},
        "dependentSchemas": {"c": {"minProperties": 2}}
    });
    check(&schema, &json!({"a": 1, "b": 2}), true);
    check(&schema, &json!({"a": 1}), false);
    check(&schema, &json!({"c": 1, "d": 2}), true);
    check(&schema, &json!({"c": 1}), false);
}

#[test]
fn property_names() {
    let schema = json!({"propertyNames": {"maxLength": 3}});
    check(&schema, &json!({"ab": 1, "abc": 2}), true);
    check(&schema, &json!({"abcd": 1}), false);
}

#[test]
fn array_form_items_and_additional_items() {
    let schema = json!({
        "items": [{"type": "integer"}, {"type": "string"}],
        "additionalItems": {"type": "boolean"}
    });
    check(&schema, &json!([1, "a"]), true);
    check(&schema, &json!([1, "a", true, false]), true);
    check(&schema, &json!([1, "a", 3]), false);
    check(&schema, &json!(["a"]), false);
}

#[test]
fn unevaluated_items() {
    let schema = json!({
        "allOf": [{"items": [{"type": "integer"}]}],
        "unevaluatedItems": {"type": "string"}
    });
    check(&schema, &json!([1, "a", "b"]), true);
    check(&schema, &json!([1, 2]), false);
}

#[test]
fn unique_items_is_structural() {
    let schema = json!({"uniqueItems": true});
    check(&schema, &json!([{"a": 1, "b": 2}, {"b": 2.0, "a": 1.0}]), false);
    check(&schema, &json!([1, "1", true, null]), true);
}

#[test]
fn annotation_only_keywords_never_change_the_verdict() {
    let bare = json!({"type": "string"});
    let decorated = json!({
        "type": "string",
        "title": "a string",
        "description": "any string at all",
        "default": "x",
        "examples": ["y"],
        "readOnly": false
    });
    for instance in &[json!("ok"), json!(1)] {
        assert_eq!(is_valid(&bare, instance), is_valid(&decorated, instance));
    }
}

#[test]
fn enum_is_equivalent_to_any_of_consts() {
    let with_enum = json!({"enum": [1, "two", [3], {"four": 4}, null]});
    let with_any_of = json!({"anyOf": [
        {"const": 1},
        {"const": "two"},
        {"const": [3]},
        {"const": {"four": 4}},
        {"const": null}
    ]});
    for instance in &[
        json!(1),
        json!(1.0),
        json!("two"),
        json!([3]),
        json!({"four": 4}),
        json!(null),
        json!("three"),
        json!([4]),
    ] {
        assert_eq!(
            is_valid(&with_enum, instance),
            is_valid(&with_any_of, instance),
            "{}",
            instance
        );
    }
}

#[test]
fn wrapping_in_not_inverts_the_verdict() {
    for (schema, instance) in &[
        (json!({"type": "integer"}), json!(5)),
        (json!({"minLength": 3}), json!("ab")),
        (json!({"required": ["a"]}), json!({"a": 1})),
    ] {
        let inverted = json!({"not": schema});
        assert_eq!(is_valid(schema, instance), !is_valid(&inverted, instance));
    }
}

#[test]
fn equal_instances_get_equal_verdicts() {
    let schema = json!({"type": "integer", "maximum": 5});
    assert_eq!(is_valid(&schema, &json!(5)), is_valid(&schema, &json!(5.0)));
    let schema = json!({"const": {"a": [1]}});
    assert_eq!(
        is_valid(&schema, &json!({"a": [1]})),
        is_valid(&schema, &json!({"a": [1.0]}))
    );
}

#[test]
fn boolean_schemas() {
    check(&json!(true), &json!({"anything": 1}), true);
    check(&json!(false), &json!(null), false);
    check(&json!({}), &json!(null), true);
}

#[test]
fn malformed_schemas_are_fatal() {
    let validator = Validator::new();
    for schema in &[
        json!({"minimum": "x"}),
        json!({"multipleOf": 0}),
        json!({"allOf": []}),
        json!({"type": "float"}),
        json!({"required": [1]}),
        json!(1),
    ] {
        let error = validator.validate(schema, &json!(1), &base()).unwrap_err();
        assert!(!error.message.is_empty(), "{} should be malformed", schema);
    }
}

#[test]
fn draft6_has_no_conditionals() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-06/schema#",
        "if": {"type": "string"},
        "then": {"minLength": 100}
    });
    // `if`/`then` are not keywords in Draft 6, so nothing constrains this.
    check(&schema, &json!("x"), true);
}

#[test]
fn default_specification_option() {
    let schema = json!({"unevaluatedProperties": false});
    // Under Draft 7 the keyword does not exist and everything passes.
    let validator = Validator::options()
        .with_default_specification(Specification::Draft7)
        .build();
    assert!(validator
        .is_valid(&schema, &json!({"a": 1}), &base())
        .unwrap());
    assert!(!Validator::new()
        .is_valid(&schema, &json!({"a": 1}), &base())
        .unwrap());
}
