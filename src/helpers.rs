use crate::{numbers, paths};
use serde_json::Value;

fn parse_index(s: &str) -> Option<usize> {
    if s.starts_with('+') || (s.starts_with('0') && s.len() != 1) {
        return None;
    }
    s.parse().ok()
}

/// Follow a JSON Pointer within a schema document, collecting the `$id`
/// lexemes of the objects stepped through so the caller can re-anchor the
/// base URI.
pub(crate) fn pointer<'a>(document: &'a Value, pointer: &str) -> Option<(Vec<&'a str>, &'a Value)> {
    if pointer.is_empty() {
        return Some((vec![], document));
    }
    if !pointer.starts_with('/') {
        return None;
    }
    let tokens = pointer.split('/').skip(1).map(paths::unescape);
    let mut target = document;
    let mut folders = vec![];
    for token in tokens {
        let next = match *target {
            Value::Object(ref map) => {
                if let Some(id) = target.get("$id").and_then(Value::as_str) {
                    folders.push(id);
                }
                map.get(&token)
            }
            Value::Array(ref list) => parse_index(&token).and_then(|idx| list.get(idx)),
            _ => return None,
        };
        target = next?;
    }
    Some((folders, target))
}

/// Structural JSON equality: numbers by exact decimal value, objects
/// independent of key order, arrays positional.
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => numbers::equal(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(left, right)| equal(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).map_or(false, |other| equal(value, other)))
        }
        (_, _) => left == right,
    }
}

#[cfg(test)]
mod tests {
    use super::equal;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(&json!(1), &json!(1.0), true)]
    #[test_case(&json!(1), &json!("1"), false)]
    #[test_case(&json!({"a": 1, "b": 2}), &json!({"b": 2.0, "a": 1}), true)]
    #[test_case(&json!({"a": 1}), &json!({"a": 1, "b": 2}), false)]
    #[test_case(&json!([1, 2]), &json!([1.0, 2.0]), true)]
    #[test_case(&json!([1, 2]), &json!([2, 1]), false)]
    #[test_case(&json!(null), &json!(null), true)]
    #[test_case(&json!(null), &json!(false), false)]
    fn test_equal(left: &serde_json::Value, right: &serde_json::Value, expected: bool) {
        assert_eq!(equal(left, right), expected);
    }

    #[test]
    fn pointer_collects_crossed_ids() {
        let document = json!({
            "$id": "https://e.x/root",
            "$defs": {"sub": {"$id": "folder/", "items": {"type": "integer"}}}
        });
        let (folders, target) = super::pointer(&document, "/$defs/sub/items").unwrap();
        assert_eq!(folders, vec!["https://e.x/root", "folder/"]);
        assert_eq!(target, &json!({"type": "integer"}));
        assert!(super::pointer(&document, "/missing").is_none());
        assert_eq!(
            super::pointer(&document, "").map(|(_, target)| target),
            Some(&document)
        );
    }
}
