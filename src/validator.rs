//! The public validation entry point.
use crate::{
    annotations::Annotation,
    context::ValidatorContext,
    error::{SchemaError, ValidationFailure},
    ids,
    options::ValidationOptions,
    specification::specification_of,
    uri,
};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Frozen options plus the `validate` entry point.
///
/// Every call performs the ID scan and then interprets the schema tree
/// against the instance tree; schemas and instances are treated as immutable
/// for the duration, so a `Validator` may be shared freely.
#[derive(Debug, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    /// A validator with default options.
    pub fn new() -> Validator {
        Validator::default()
    }

    /// Start configuring a validator:
    ///
    /// ```rust
    /// # use jsonschema_eval::Validator;
    /// let validator = Validator::options().with_fail_fast(true).build();
    /// ```
    #[must_use]
    pub fn options() -> ValidationOptions {
        ValidationOptions::default()
    }

    pub(crate) fn with_options(options: ValidationOptions) -> Validator {
        Validator { options }
    }

    /// Validate `instance` against `schema`.
    ///
    /// `base_uri` must be absolute and carry no non-empty fragment; relative
    /// `$id`s resolve against it. Returns the verdict together with the
    /// collected annotation and error reports, or a [`SchemaError`] when the
    /// schema itself is malformed.
    pub fn validate(
        &self,
        schema: &Value,
        instance: &Value,
        base_uri: &Url,
    ) -> Result<Validation, SchemaError> {
        if uri::has_non_empty_fragment(base_uri) {
            return Err(SchemaError::new(
                base_uri.clone(),
                "the base URI must not carry a fragment",
            ));
        }
        let specification =
            specification_of(schema).unwrap_or_else(|| self.options.default_specification());
        let known_ids = ids::scan(base_uri, schema, specification, self.options.auto_resolve())?;
        let base = uri::normalize(base_uri);
        let mut ctx =
            ValidatorContext::new(&self.options, &known_ids, schema, base, specification);
        let valid = ctx.apply(schema, None, instance, None)?;
        Ok(Validation {
            valid,
            annotations: ctx.annotations.into_vec(),
            errors: ctx.errors,
        })
    }

    /// Like [`validate`](Validator::validate), but returns only the verdict.
    pub fn is_valid(
        &self,
        schema: &Value,
        instance: &Value,
        base_uri: &Url,
    ) -> Result<bool, SchemaError> {
        self.validate(schema, instance, base_uri)
            .map(|validation| validation.is_valid())
    }
}

/// The outcome of one validation: the verdict plus the collected reports.
#[derive(Debug)]
pub struct Validation {
    valid: bool,
    annotations: Vec<Annotation>,
    errors: Vec<ValidationFailure>,
}

impl Validation {
    /// Whether the instance satisfied the schema.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Every annotation that survived evaluation.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Every validation failure recorded, including those of branches that
    /// did not decide the verdict (e.g. failed `anyOf` alternatives).
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.errors
    }

    /// Annotations keyed by instance location, then name, then the dynamic
    /// schema location that produced them.
    pub fn annotation_report(&self) -> BTreeMap<String, BTreeMap<String, BTreeMap<String, Value>>> {
        let mut report: BTreeMap<String, BTreeMap<String, BTreeMap<String, Value>>> =
            BTreeMap::new();
        for annotation in &self.annotations {
            report
                .entry(annotation.instance_location.to_string())
                .or_default()
                .entry(annotation.name.clone())
                .or_default()
                .insert(
                    annotation.schema_location.to_string(),
                    annotation.value.clone(),
                );
        }
        report
    }

    /// Failures keyed by schema location, then instance location.
    pub fn error_report(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        let mut report: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for failure in &self.errors {
            report
                .entry(failure.keyword_location.clone())
                .or_default()
                .entry(failure.instance_location.clone())
                .or_insert_with(|| failure.message.clone());
        }
        report
    }

    /// Failures keyed by instance location, then schema location.
    pub fn error_report_by_instance(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        let mut report: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for failure in &self.errors {
            report
                .entry(failure.instance_location.clone())
                .or_default()
                .entry(failure.keyword_location.clone())
                .or_insert_with(|| failure.message.clone());
        }
        report
    }
}
