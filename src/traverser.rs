//! Structural schema traversal.
//!
//! Walks an arbitrary JSON value while tracking whether each position is a
//! *keyword* position (a value keyed by a known keyword inside a schema
//! object) or a *non-keyword* position (schema-shaped data inside
//! `properties`, `$defs`, `enum`, `const`, `examples` and the like). The ID
//! scanner is built on the classification below.
use crate::paths::{JsonPointer, PathChunk};
use serde_json::Value;

/// How the children of a position are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PositionKind {
    /// A schema: an object whose keys are keywords, or a boolean.
    Schema,
    /// An object whose member values are schemas (`properties`, `$defs`, ...).
    SchemaMap,
    /// An array whose elements are schemas (`allOf`, array-form `items`, ...).
    SchemaList,
    /// Plain data: nothing below is a keyword (`enum`, `const`, `examples`, ...).
    Data,
}

/// Traversal state handed to visitors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TraverserState {
    pub(crate) kind: PositionKind,
}

impl TraverserState {
    /// `true` when the current element is not sitting in a keyword position.
    pub(crate) fn is_not_keyword(&self) -> bool {
        self.kind != PositionKind::Schema
    }
}

/// Keywords whose value is a single subschema.
const SUBSCHEMA_KEYWORDS: &[&str] = &[
    "additionalItems",
    "additionalProperties",
    "contains",
    "contentSchema",
    "else",
    "if",
    "not",
    "propertyNames",
    "then",
    "unevaluatedItems",
    "unevaluatedProperties",
];

/// Keywords whose value is an object of subschemas.
const SCHEMA_MAP_KEYWORDS: &[&str] = &[
    "$defs",
    "definitions",
    "dependentSchemas",
    "patternProperties",
    "properties",
];

/// Keywords whose value is an array of subschemas.
const SCHEMA_LIST_KEYWORDS: &[&str] = &["allOf", "anyOf", "oneOf"];

/// Classify the children of `element` at a position of `kind`.
pub(crate) fn children<'a>(
    element: &'a Value,
    kind: PositionKind,
) -> Vec<(PathChunk, &'a Value, PositionKind)> {
    let mut result = Vec::new();
    match (kind, element) {
        (PositionKind::Schema, Value::Object(object)) => {
            for (keyword, value) in object {
                let child_kind = if SUBSCHEMA_KEYWORDS.contains(&keyword.as_str()) {
                    PositionKind::Schema
                } else if SCHEMA_MAP_KEYWORDS.contains(&keyword.as_str()) {
                    PositionKind::SchemaMap
                } else if SCHEMA_LIST_KEYWORDS.contains(&keyword.as_str()) {
                    PositionKind::SchemaList
                } else if keyword == "items" {
                    match value {
                        Value::Array(_) => PositionKind::SchemaList,
                        _ => PositionKind::Schema,
                    }
                } else if keyword == "dependencies" {
                    // Member values are either schemas or arrays of names.
                    PositionKind::SchemaMap
                } else {
                    PositionKind::Data
                };
                result.push((PathChunk::Name(keyword.clone()), value, child_kind));
            }
        }
        (PositionKind::SchemaMap, Value::Object(object)) => {
            for (name, value) in object {
                let child_kind = match value {
                    Value::Object(_) | Value::Bool(_) => PositionKind::Schema,
                    _ => PositionKind::Data,
                };
                result.push((PathChunk::Name(name.clone()), value, child_kind));
            }
        }
        (PositionKind::SchemaList, Value::Array(items)) => {
            for (index, value) in items.iter().enumerate() {
                result.push((PathChunk::Index(index), value, PositionKind::Schema));
            }
        }
        (PositionKind::Data, Value::Object(object)) => {
            for (name, value) in object {
                result.push((PathChunk::Name(name.clone()), value, PositionKind::Data));
            }
        }
        (PositionKind::Data, Value::Array(items)) => {
            for (index, value) in items.iter().enumerate() {
                result.push((PathChunk::Index(index), value, PositionKind::Data));
            }
        }
        _ => {}
    }
    result
}

/// Depth-first walk over `root`, visiting every element with its parent, path
/// and traversal state. The root is visited as a schema position.
pub(crate) fn traverse<'a, F>(root: &'a Value, visitor: &mut F)
where
    F: FnMut(&'a Value, Option<&'a Value>, &JsonPointer, TraverserState),
{
    fn walk<'a, F>(
        element: &'a Value,
        parent: Option<&'a Value>,
        path: &JsonPointer,
        kind: PositionKind,
        visitor: &mut F,
    ) where
        F: FnMut(&'a Value, Option<&'a Value>, &JsonPointer, TraverserState),
    {
        visitor(element, parent, path, TraverserState { kind });
        for (chunk, child, child_kind) in children(element, kind) {
            walk(child, Some(element), &path.join(chunk), child_kind, visitor);
        }
    }
    walk(root, None, &JsonPointer::default(), PositionKind::Schema, visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_keyword_positions() {
        let schema = json!({
            "properties": {"a": {"type": "string"}},
            "allOf": [{"minimum": 0}],
            "items": {"const": 1},
            "enum": [{"$id": "not-a-keyword"}]
        });
        let mut schemas = Vec::new();
        let mut non_keywords = Vec::new();
        traverse(&schema, &mut |_, _, path, state| {
            if state.is_not_keyword() {
                non_keywords.push(path.to_string());
            } else {
                schemas.push(path.to_string());
            }
        });
        assert!(schemas.contains(&"".to_string()));
        assert!(schemas.contains(&"/properties/a".to_string()));
        assert!(schemas.contains(&"/allOf/0".to_string()));
        assert!(schemas.contains(&"/items".to_string()));
        // The `properties` map itself and everything under `enum` is data.
        assert!(non_keywords.contains(&"/properties".to_string()));
        assert!(non_keywords.contains(&"/enum".to_string()));
        assert!(non_keywords.contains(&"/enum/0".to_string()));
        assert!(non_keywords.contains(&"/enum/0/$id".to_string()));
    }

    #[test]
    fn array_items_split_by_shape() {
        let array_form = json!({"items": [{"type": "string"}, true]});
        let mut seen = Vec::new();
        traverse(&array_form, &mut |_, _, path, state| {
            if !state.is_not_keyword() {
                seen.push(path.to_string());
            }
        });
        assert!(seen.contains(&"/items/0".to_string()));
        assert!(seen.contains(&"/items/1".to_string()));
    }
}
