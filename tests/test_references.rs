use jsonschema_eval::{scan_ids, Specification, Validator};
use serde_json::{json, Value};
use url::Url;

fn base() -> Url {
    Url::parse("https://example.com/schema").unwrap()
}

fn check(schema: &Value, instance: &Value, expected: bool) {
    assert_eq!(
        Validator::new().is_valid(schema, instance, &base()).unwrap(),
        expected,
        "{} against {}",
        instance,
        schema
    );
}

#[test]
fn pointer_reference_into_defs() {
    let schema = json!({
        "$defs": {"positive": {"type": "number", "exclusiveMinimum": 0}},
        "properties": {"price": {"$ref": "#/$defs/positive"}}
    });
    check(&schema, &json!({"price": 3.5}), true);
    check(&schema, &json!({"price": -1}), false);
}

#[test]
fn anchor_reference() {
    let schema = json!({
        "$defs": {"name": {"$anchor": "name", "type": "string"}},
        "properties": {"first": {"$ref": "#name"}}
    });
    check(&schema, &json!({"first": "Ada"}), true);
    check(&schema, &json!({"first": 1}), false);
}

#[test]
fn reference_into_an_embedded_resource() {
    let schema = json!({
        "$id": "https://e.x/root",
        "$defs": {
            "list": {
                "$id": "https://e.x/list",
                "type": "array",
                "items": {"$ref": "#/$defs/entry"},
                "$defs": {"entry": {"type": "string"}}
            }
        },
        "$ref": "list"
    });
    // `#/$defs/entry` must resolve against the embedded resource's base.
    check(&schema, &json!(["a", "b"]), true);
    check(&schema, &json!([1]), false);
}

#[test]
fn sibling_keywords_are_ignored_next_to_ref_before_2019() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "definitions": {"str": {"type": "string"}},
        "properties": {
            "v": {"$ref": "#/definitions/str", "minLength": 100}
        }
    });
    // Draft 7: `minLength` next to `$ref` does not apply.
    check(&schema, &json!({"v": "short"}), true);
    let schema_2019 = json!({
        "$defs": {"str": {"type": "string"}},
        "properties": {
            "v": {"$ref": "#/$defs/str", "minLength": 100}
        }
    });
    // 2019-09: both apply.
    check(&schema_2019, &json!({"v": "short"}), false);
}

#[test]
fn cyclic_references_terminate_on_finite_instances() {
    let schema = json!({
        "type": "object",
        "properties": {"next": {"$ref": "#"}},
        "additionalProperties": {"type": "integer"}
    });
    check(&schema, &json!({"next": {"next": {"data": 1}}}), true);
    check(&schema, &json!({"next": {"next": {"data": "x"}}}), false);
}

#[test]
fn self_reference_without_progress_is_malformed() {
    let schema = json!({"allOf": [{"$ref": "#"}]});
    let error = Validator::new()
        .validate(&schema, &json!(1), &base())
        .unwrap_err();
    assert!(error.message.contains("circular"));
}

#[test]
fn recursive_ref_without_anchor_behaves_like_ref() {
    let schema = json!({
        "type": "object",
        "properties": {"next": {"$recursiveRef": "#"}}
    });
    check(&schema, &json!({"next": {"next": {}}}), true);
    check(&schema, &json!({"next": 1}), false);
}

#[test]
fn recursive_ref_lands_on_the_outermost_anchor() {
    let schema = json!({
        "$id": "https://e.x/strict-tree",
        "$recursiveAnchor": true,
        "$ref": "tree",
        "unevaluatedProperties": false,
        "$defs": {
            "tree": {
                "$id": "https://e.x/tree",
                "$recursiveAnchor": true,
                "type": "object",
                "properties": {
                    "data": true,
                    "children": {
                        "type": "array",
                        "items": {"$recursiveRef": "#"}
                    }
                }
            }
        }
    });
    let base = Url::parse("https://e.x/strict-tree").unwrap();
    let validator = Validator::new();
    let ok = json!({"children": [{"children": []}]});
    assert!(validator.is_valid(&schema, &ok, &base).unwrap());
    // The misspelled property is caught at the nested level only because
    // `$recursiveRef` re-enters the strict root, not the lax `tree` resource.
    let bad = json!({"children": [{"daat": 1}]});
    assert!(!validator.is_valid(&schema, &bad, &base).unwrap());
}

#[test]
fn references_into_known_meta_schemas() {
    let schema = json!({"$ref": "http://json-schema.org/draft-07/schema"});
    check(&schema, &json!({"type": "string", "minLength": 1}), true);
    check(&schema, &json!({"type": 12}), false);
    check(&schema, &json!(true), true);
    check(&schema, &json!({"minLength": -1}), false);
}

#[test]
fn unresolvable_references_are_malformed() {
    let schema = json!({"$ref": "https://nowhere.invalid/schema"});
    let error = Validator::new()
        .validate(&schema, &json!(1), &base())
        .unwrap_err();
    assert!(error.message.contains("could not resolve"));
}

#[test]
fn scan_ids_is_exposed_for_preflight() {
    let schema = json!({
        "$id": "https://e.x/root",
        "$defs": {"sub": {"$anchor": "mark"}}
    });
    let ids = scan_ids(
        &Url::parse("https://e.x/root").unwrap(),
        &schema,
        Specification::Draft201909,
    )
    .unwrap();
    assert_eq!(ids.len(), 2);
}
