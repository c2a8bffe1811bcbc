//! The validator context: per-evaluation state threaded through every keyword
//! apply, and the orchestration of keyword evaluation over a schema object.
use crate::{
    annotations::{Annotation, AnnotationStore},
    error::{SchemaError, ValidationFailure},
    helpers,
    ids::{Id, IdMap},
    keywords,
    metaschemas,
    options::ValidationOptions,
    paths::{JsonPointer, PathChunk},
    specification::{KeywordClass, Specification},
    uri,
};
use ahash::AHashMap;
use ahash::AHashSet;
use serde_json::Value;
use url::Url;

/// The mutable portion of the context. Cloned on entering a subschema and
/// restored on unwind, so sibling keywords observe each other's effects only
/// within one schema object.
#[derive(Debug, Clone)]
struct Frame<'a> {
    base_uri: Url,
    recursive_base_uri: Option<Url>,
    prev_recursive_base_uri: Option<Url>,
    specification: Specification,
    schema_object: &'a Value,
    is_root: bool,
    /// Dynamic pointer of the enclosing schema object.
    schema_parent_location: JsonPointer,
    /// Dynamic pointer of the current evaluation point; follows `$ref`.
    schema_location: JsonPointer,
    /// Absolute keyword URI; resets at `$ref` targets instead of traversing.
    abs_keyword_location: Url,
    instance_location: JsonPointer,
    collect_annotations: bool,
    /// Inside a branch whose failure does not fail the whole evaluation.
    speculative: bool,
    /// `(target URI, instance location)` pairs on the current dynamic path.
    active_refs: AHashSet<(Url, JsonPointer)>,
}

/// The engine state for one `validate` call.
pub(crate) struct ValidatorContext<'a> {
    options: &'a ValidationOptions,
    known_ids: &'a IdMap<'a>,
    pub(crate) annotations: AnnotationStore,
    pub(crate) errors: Vec<ValidationFailure>,
    state: Frame<'a>,
    halted: bool,
    next_is_root: bool,
}

impl<'a> ValidatorContext<'a> {
    pub(crate) fn new(
        options: &'a ValidationOptions,
        known_ids: &'a IdMap<'a>,
        root: &'a Value,
        base_uri: Url,
        specification: Specification,
    ) -> ValidatorContext<'a> {
        ValidatorContext {
            options,
            known_ids,
            annotations: AnnotationStore::default(),
            errors: Vec::new(),
            state: Frame {
                base_uri: base_uri.clone(),
                recursive_base_uri: None,
                prev_recursive_base_uri: None,
                specification,
                schema_object: root,
                is_root: true,
                schema_parent_location: JsonPointer::default(),
                schema_location: JsonPointer::default(),
                abs_keyword_location: base_uri,
                instance_location: JsonPointer::default(),
                collect_annotations: true,
                speculative: false,
                active_refs: AHashSet::default(),
            },
            halted: false,
            next_is_root: true,
        }
    }

    // ---- accessors used by keyword reducers ----

    pub(crate) fn options(&self) -> &ValidationOptions {
        self.options
    }

    pub(crate) fn specification(&self) -> Specification {
        self.state.specification
    }

    pub(crate) fn set_specification(&mut self, specification: Specification) {
        self.state.specification = specification;
    }

    pub(crate) fn base_uri(&self) -> &Url {
        &self.state.base_uri
    }

    pub(crate) fn set_base_uri(&mut self, base_uri: Url) {
        self.state.base_uri = base_uri;
    }

    pub(crate) fn prev_recursive_base_uri(&self) -> Option<&Url> {
        self.state.prev_recursive_base_uri.as_ref()
    }

    /// `$recursiveAnchor = true`: the previous recursive base becomes what the
    /// current one was, and the current recursive base becomes the current
    /// base. The first anchor points both at the current base.
    pub(crate) fn promote_recursive_base(&mut self) {
        match self.state.recursive_base_uri.take() {
            Some(current) => {
                self.state.prev_recursive_base_uri = Some(current);
                self.state.recursive_base_uri = Some(self.state.base_uri.clone());
            }
            None => {
                self.state.prev_recursive_base_uri = Some(self.state.base_uri.clone());
                self.state.recursive_base_uri = Some(self.state.base_uri.clone());
            }
        }
    }

    /// The schema object enclosing the currently applied keyword.
    pub(crate) fn parent_object(&self) -> &'a Value {
        self.state.schema_object
    }

    pub(crate) fn is_root(&self) -> bool {
        self.state.is_root
    }

    pub(crate) fn schema_parent_location(&self) -> &JsonPointer {
        &self.state.schema_parent_location
    }

    /// Name of the keyword currently being applied.
    pub(crate) fn current_keyword(&self) -> String {
        match self.state.schema_location.iter().last() {
            Some(PathChunk::Name(name)) => name.clone(),
            _ => String::new(),
        }
    }

    pub(crate) fn halted(&self) -> bool {
        self.halted
    }

    /// Record a validation failure at the current location. Under `FAIL_FAST`
    /// the first non-speculative failure short-circuits the evaluation.
    pub(crate) fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(ValidationFailure::new(
            &self.state.schema_location,
            &self.state.abs_keyword_location,
            &self.state.instance_location,
            message,
        ));
        if self.options.fail_fast() && !self.state.speculative {
            self.halted = true;
        }
    }

    /// Store an annotation at the current instance location.
    pub(crate) fn add_annotation(&mut self, name: &str, value: Value) {
        if !self.state.collect_annotations {
            return;
        }
        self.annotations.add(Annotation {
            name: name.to_string(),
            schema_location: self.state.schema_location.clone(),
            absolute_schema_location: self.state.abs_keyword_location.clone(),
            instance_location: self.state.instance_location.clone(),
            value,
        });
    }

    /// Annotations named `name` scoped to the current instance location,
    /// keyed by the schema location that produced them.
    pub(crate) fn get_annotations(
        &self,
        name: &str,
    ) -> Option<&AHashMap<JsonPointer, Annotation>> {
        self.annotations.get(&self.state.instance_location, name)
    }

    /// Toggle annotation collection for subschemas applied from here on;
    /// returns the previous setting.
    pub(crate) fn set_collect_sub_annotations(&mut self, collect: bool) -> bool {
        std::mem::replace(&mut self.state.collect_annotations, collect)
    }

    /// Mark subsequent subschema applications as speculative: their failures
    /// are recorded but do not short-circuit under `FAIL_FAST`. Returns the
    /// previous setting.
    pub(crate) fn set_speculative(&mut self, speculative: bool) -> bool {
        std::mem::replace(&mut self.state.speculative, speculative)
    }

    /// A malformed-schema error at the current keyword.
    pub(crate) fn schema_error(&self, message: impl Into<String>) -> SchemaError {
        SchemaError::new(self.state.abs_keyword_location.clone(), message)
    }

    /// A malformed-schema error at a position below the current keyword.
    pub(crate) fn schema_error_at(&self, segment: &str, message: impl Into<String>) -> SchemaError {
        SchemaError::new(
            uri::append_fragment_chunk(
                &self.state.abs_keyword_location,
                &PathChunk::Name(segment.to_string()),
            ),
            message,
        )
    }

    /// Structural check that `value` can be applied as a schema.
    pub(crate) fn check_schema(&self, value: &Value, segment: Option<&str>) -> Result<(), SchemaError> {
        match value {
            Value::Object(_) | Value::Bool(_) => Ok(()),
            _ => Err(match segment {
                Some(segment) => self.schema_error_at(segment, "not a schema"),
                None => self.schema_error("not a schema"),
            }),
        }
    }

    // ---- subschema application ----

    /// Apply `schema` to `instance`. This is the single point of recursion:
    /// state is cloned on entry and restored on unwind, and on failure every
    /// annotation contributed beneath the applied location is removed.
    pub(crate) fn apply(
        &mut self,
        schema: &'a Value,
        schema_segment: Option<PathChunk>,
        instance: &Value,
        instance_segment: Option<PathChunk>,
    ) -> Result<bool, SchemaError> {
        if self.halted {
            return Ok(false);
        }
        let saved = self.state.clone();
        if let Some(segment) = schema_segment {
            self.state.abs_keyword_location =
                uri::append_fragment_chunk(&self.state.abs_keyword_location, &segment);
            self.state.schema_location.push(segment);
        }
        if let Some(segment) = instance_segment {
            self.state.instance_location.push(segment);
        }
        let object_location = self.state.schema_location.clone();
        let object_instance = self.state.instance_location.clone();
        let result = self.apply_object(schema, instance, &object_location);
        if let Ok(false) = result {
            if !self.options.collect_annotations_for_failed() {
                self.annotations.prune(&object_instance, &object_location);
            }
        }
        self.state = saved;
        result
    }

    fn apply_object(
        &mut self,
        schema: &'a Value,
        instance: &Value,
        object_location: &JsonPointer,
    ) -> Result<bool, SchemaError> {
        let object = match schema {
            Value::Bool(true) => return Ok(true),
            Value::Bool(false) => {
                self.add_error("false schema is always invalid");
                return Ok(false);
            }
            Value::Object(object) => object,
            _ => return Err(self.schema_error("a schema must be an object or a boolean")),
        };
        if object.is_empty() {
            return Ok(true);
        }

        let entry_base = self.state.base_uri.clone();
        let mut object_abs = self.state.abs_keyword_location.clone();
        self.state.schema_object = schema;
        self.state.is_root = std::mem::take(&mut self.next_is_root) || object.contains_key("$id");

        // A sibling `$ref` suppresses every other keyword before Draft 2019-09.
        if self.state.specification < Specification::Draft201909 {
            if let Some(reference) = object.get("$ref") {
                self.state.schema_parent_location = object_location.clone();
                self.state.schema_location = object_location.join("$ref");
                self.state.abs_keyword_location =
                    uri::append_fragment_chunk(&object_abs, &PathChunk::Name("$ref".to_string()));
                return keywords::ref_::apply(reference, instance, self);
            }
        }

        let mut result = true;

        // Class 1: identity and structure, before anything else may run.
        let entry_specification = self.state.specification;
        for (keyword, value) in object {
            if let Some((KeywordClass::Identity, apply)) = entry_specification.keyword(keyword) {
                self.state.schema_parent_location = object_location.clone();
                self.state.schema_location = object_location.join(keyword.as_str());
                self.state.abs_keyword_location =
                    uri::append_fragment_chunk(&object_abs, &PathChunk::Name(keyword.clone()));
                if !apply(value, instance, self)? {
                    result = false;
                }
            }
        }
        if self.state.base_uri != entry_base {
            object_abs = self.state.base_uri.clone();
        }

        // Classes 2-4, partitioned under the specification in effect after
        // class 1 (`$schema` may have switched it), each class in the
        // insertion order of the schema's keys.
        let specification = self.state.specification;
        let mut general = Vec::new();
        let mut post_applicator = Vec::new();
        let mut unevaluated = Vec::new();
        for (keyword, value) in object {
            match specification.keyword(keyword) {
                Some((KeywordClass::General, apply)) => general.push((keyword, value, apply)),
                Some((KeywordClass::PostApplicator, apply)) => {
                    post_applicator.push((keyword, value, apply))
                }
                Some((KeywordClass::Unevaluated, apply)) => {
                    unevaluated.push((keyword, value, apply))
                }
                Some((KeywordClass::Identity, _)) | None => {}
            }
        }

        'classes: for class in vec![general, post_applicator, unevaluated] {
            for (keyword, value, apply) in class {
                self.state.schema_parent_location = object_location.clone();
                self.state.schema_location = object_location.join(keyword.as_str());
                self.state.abs_keyword_location =
                    uri::append_fragment_chunk(&object_abs, &PathChunk::Name(keyword.clone()));
                if !apply(value, instance, self)? {
                    result = false;
                    if !self.options.collect_annotations_for_failed() {
                        let failed = self.state.schema_location.clone();
                        let at = self.state.instance_location.clone();
                        self.annotations.prune(&at, &failed);
                    }
                    if self.halted {
                        break 'classes;
                    }
                }
            }
        }
        Ok(result)
    }

    // ---- reference resolution ----

    /// Resolve `reference` against `resolution_base` and apply the target.
    pub(crate) fn apply_reference(
        &mut self,
        reference: &str,
        resolution_base: &Url,
        instance: &Value,
    ) -> Result<bool, SchemaError> {
        let resolved = uri::resolve(resolution_base, reference).map_err(|_| {
            self.schema_error(format!("\"{}\" is not a valid URI-reference", reference))
        })?;
        let resolved = uri::normalize(&resolved);
        let saved = self.state.clone();
        // Re-entering the same target at the same instance location cannot
        // make progress.
        let guard = (resolved.clone(), self.state.instance_location.clone());
        if !self.state.active_refs.insert(guard) {
            return Err(self.schema_error(format!(
                "circular reference \"{}\" without instance progress",
                resolved
            )));
        }
        let (target, new_base, specification, is_root) =
            match self.resolve_reference_target(&resolved) {
                Some(found) => found,
                None => {
                    self.state = saved;
                    return Err(
                        self.schema_error(format!("could not resolve \"{}\"", resolved))
                    );
                }
            };
        self.state.base_uri = new_base;
        if let Some(specification) = specification {
            self.state.specification = specification;
        }
        self.state.abs_keyword_location = resolved;
        self.next_is_root = is_root;
        let result = self.apply(target, None, instance, None);
        self.next_is_root = false;
        self.state = saved;
        result
    }

    /// Locate the node a resolved reference URI points at, together with the
    /// base URI, specification and resource-root flag of the target.
    fn resolve_reference_target(
        &self,
        resolved: &Url,
    ) -> Option<(&'a Value, Url, Option<Specification>, bool)> {
        // Exact match: a document root, an `$id` or an anchor.
        if let Some((id, node)) = self.known_ids.get_key_value(&Id::plain(resolved.clone())) {
            let base = if id.is_anchor() {
                id.base
                    .clone()
                    .unwrap_or_else(|| uri::strip_fragment(resolved))
            } else {
                id.id.clone()
            };
            return Some((*node, base, None, !id.is_anchor()));
        }
        if let Some(node) = metaschemas::find_id(resolved) {
            let document = uri::strip_fragment(resolved);
            let base = if uri::has_non_empty_fragment(resolved) {
                document.clone()
            } else {
                resolved.clone()
            };
            let specification = metaschemas::specification_for(&document);
            return Some((node, base, specification, !uri::has_non_empty_fragment(resolved)));
        }
        // Otherwise the fragment must be a JSON Pointer into a known document.
        let document_uri = uri::strip_fragment(resolved);
        let (document, specification) = if let Some(node) =
            self.known_ids.get(&Id::plain(document_uri.clone()))
        {
            (*node, None)
        } else {
            let node = metaschemas::load(&document_uri)?;
            (node, metaschemas::specification_for(&document_uri))
        };
        let fragment = percent_encoding::percent_decode_str(uri::raw_fragment(resolved))
            .decode_utf8()
            .ok()?;
        let (folders, target) = helpers::pointer(document, &fragment)?;
        // `$id` values crossed by the pointer re-anchor the effective base.
        let mut base = document_uri;
        for folder in folders {
            base = uri::resolve(&base, folder).ok()?;
        }
        Some((target, uri::normalize(&base), specification, fragment.is_empty()))
    }
}
