//! Annotation storage.
//!
//! Annotations are the only channel between applicator keywords: `properties`
//! reports which keys it matched, `additionalProperties` and
//! `unevaluatedProperties` read those reports back. The store is owned by the
//! enclosing validation and addressed by instance location, name and the
//! dynamic schema location that produced the value.
use crate::paths::JsonPointer;
use ahash::AHashMap;
use serde_json::Value;
use url::Url;

/// A single annotation, addressed by (instance location, name, schema location).
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// The producing keyword.
    pub name: String,
    /// Dynamic JSON Pointer through the schema, with `$ref` expansion.
    pub schema_location: JsonPointer,
    /// Absolute schema URI; does not traverse `$ref`.
    pub absolute_schema_location: Url,
    /// JSON Pointer into the instance.
    pub instance_location: JsonPointer,
    /// The annotated value; its domain depends on `name`.
    pub value: Value,
}

type ByName = AHashMap<String, AHashMap<JsonPointer, Annotation>>;

/// Annotations keyed by instance location, then name, then schema location.
#[derive(Debug, Default)]
pub(crate) struct AnnotationStore {
    by_instance: AHashMap<JsonPointer, ByName>,
}

impl AnnotationStore {
    pub(crate) fn add(&mut self, annotation: Annotation) {
        self.by_instance
            .entry(annotation.instance_location.clone())
            .or_default()
            .entry(annotation.name.clone())
            .or_default()
            .insert(annotation.schema_location.clone(), annotation);
    }

    /// Annotations named `name` at exactly `instance_location`, keyed by the
    /// schema location that contributed them.
    pub(crate) fn get(
        &self,
        instance_location: &JsonPointer,
        name: &str,
    ) -> Option<&AHashMap<JsonPointer, Annotation>> {
        self.by_instance
            .get(instance_location)
            .and_then(|names| names.get(name))
    }

    /// Drop every annotation whose schema location starts with `schema_prefix`
    /// at `instance_location` or below it.
    pub(crate) fn prune(&mut self, instance_location: &JsonPointer, schema_prefix: &JsonPointer) {
        for (location, names) in &mut self.by_instance {
            if !location.starts_with(instance_location) {
                continue;
            }
            for annotations in names.values_mut() {
                annotations.retain(|schema_location, _| !schema_location.starts_with(schema_prefix));
            }
            names.retain(|_, annotations| !annotations.is_empty());
        }
        self.by_instance.retain(|_, names| !names.is_empty());
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.by_instance
            .values()
            .flat_map(|names| names.values())
            .flat_map(|annotations| annotations.values())
    }

    pub(crate) fn into_vec(self) -> Vec<Annotation> {
        self.by_instance
            .into_iter()
            .flat_map(|(_, names)| names)
            .flat_map(|(_, annotations)| annotations)
            .map(|(_, annotation)| annotation)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn annotation(instance: &str, name: &str, schema: &[&str], value: Value) -> Annotation {
        Annotation {
            name: name.to_string(),
            schema_location: JsonPointer::from(schema),
            absolute_schema_location: Url::parse("https://e.x/s").unwrap(),
            instance_location: JsonPointer::from(
                &instance.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>()[..],
            ),
            value,
        }
    }

    #[test]
    fn add_get_prune() {
        let mut store = AnnotationStore::default();
        store.add(annotation("", "properties", &["properties"], json!(["a"])));
        store.add(annotation("", "properties", &["allOf", "0", "properties"], json!(["b"])));
        store.add(annotation("/a", "items", &["properties", "a", "items"], json!(true)));

        let root = JsonPointer::default();
        assert_eq!(store.get(&root, "properties").map(|found| found.len()), Some(2));

        // Pruning a failed branch removes its annotations at and below the
        // instance location, leaving siblings alone.
        store.prune(&root, &JsonPointer::from(&["allOf", "0"][..]));
        assert_eq!(store.get(&root, "properties").map(|found| found.len()), Some(1));
        store.prune(&root, &JsonPointer::from(&["properties"][..]));
        assert!(store.get(&root, "properties").is_none());
        assert_eq!(store.iter().count(), 0);
    }
}
