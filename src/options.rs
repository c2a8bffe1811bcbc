//! Validation options.
use crate::{specification::Specification, validator::Validator};

/// The closed set of evaluation options.
///
/// Options are assembled builder-style and frozen into a [`Validator`]:
///
/// ```rust
/// # use jsonschema_eval::{Specification, Validator};
/// let validator = Validator::options()
///     .with_fail_fast(true)
///     .with_default_specification(Specification::Draft7)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    format: Option<bool>,
    content: bool,
    default_specification: Specification,
    collect_annotations_for_failed: bool,
    fail_fast: bool,
    auto_resolve: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            format: None,
            content: false,
            default_specification: Specification::default(),
            collect_annotations_for_failed: false,
            fail_fast: false,
            auto_resolve: true,
        }
    }
}

impl ValidationOptions {
    /// Treat `format` as an assertion (`true`) or as an annotation (`false`).
    /// When unset, Draft 7 and earlier assert and later drafts annotate.
    pub fn with_format(mut self, assert: bool) -> Self {
        self.format = Some(assert);
        self
    }

    /// Enforce `contentEncoding` / `contentMediaType` instead of annotating.
    pub fn with_content(mut self, enforce: bool) -> Self {
        self.content = enforce;
        self
    }

    /// The specification assumed when a schema has no `$schema`.
    pub fn with_default_specification(mut self, specification: Specification) -> Self {
        self.default_specification = specification;
        self
    }

    /// Retain annotations contributed by failed subschemas.
    pub fn with_collect_annotations_for_failed(mut self, collect: bool) -> Self {
        self.collect_annotations_for_failed = collect;
        self
    }

    /// Stop at the first validation error.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Resolve relative `$id`s against the caller's base URI. On by default;
    /// when disabled, a relative identifier is malformed.
    pub fn with_auto_resolve(mut self, auto_resolve: bool) -> Self {
        self.auto_resolve = auto_resolve;
        self
    }

    /// Freeze the options into a validator.
    pub fn build(self) -> Validator {
        Validator::with_options(self)
    }

    pub(crate) fn format_is_assertion(&self, specification: Specification) -> bool {
        self.format
            .unwrap_or(specification <= Specification::Draft7)
    }

    pub(crate) fn content_is_checked(&self) -> bool {
        self.content
    }

    pub(crate) fn default_specification(&self) -> Specification {
        self.default_specification
    }

    pub(crate) fn collect_annotations_for_failed(&self) -> bool {
        self.collect_annotations_for_failed
    }

    pub(crate) fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    pub(crate) fn auto_resolve(&self) -> bool {
        self.auto_resolve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_follow_the_draft() {
        let options = ValidationOptions::default();
        assert!(options.format_is_assertion(Specification::Draft6));
        assert!(options.format_is_assertion(Specification::Draft7));
        assert!(!options.format_is_assertion(Specification::Draft201909));
        let forced = ValidationOptions::default().with_format(true);
        assert!(forced.format_is_assertion(Specification::Draft201909));
    }
}
