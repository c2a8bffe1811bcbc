//! Specification (draft) handling and the keyword registry.
use crate::{context::ValidatorContext, error::SchemaError, keywords};
use serde_json::Value;

/// JSON Schema specification version.
///
/// Ordered: a later draft compares greater than an earlier one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum Specification {
    /// JSON Schema Draft 6 (limited compatibility level)
    Draft6,
    /// JSON Schema Draft 7
    Draft7,
    /// JSON Schema Draft 2019-09
    Draft201909,
}

impl Default for Specification {
    fn default() -> Self {
        Specification::Draft201909
    }
}

/// Evaluation classes, executed in declaration order within a schema object.
/// Later classes may observe annotations produced by earlier ones.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub(crate) enum KeywordClass {
    /// `$id`, `$schema` and friends: establish identity before anything runs.
    Identity,
    /// Assertions and unordered applicators.
    General,
    /// Consumers of sibling annotations (`then`, `additionalProperties`, ...).
    PostApplicator,
    /// `unevaluatedItems` / `unevaluatedProperties`: consume everything prior.
    Unevaluated,
}

pub(crate) type KeywordFn<'a> =
    fn(&'a Value, &Value, &mut ValidatorContext<'a>) -> Result<bool, SchemaError>;

impl Specification {
    /// Look up the reducer for `keyword` under this specification.
    pub(crate) fn keyword<'a>(self, keyword: &str) -> Option<(KeywordClass, KeywordFn<'a>)> {
        use KeywordClass::{General, Identity, PostApplicator, Unevaluated};
        match keyword {
            "$anchor" => match self {
                Specification::Draft201909 => Some((Identity, keywords::anchor::apply)),
                _ => None,
            },
            "$comment" => match self {
                Specification::Draft6 => None,
                _ => Some((General, keywords::meta_data::apply)),
            },
            "$defs" => match self {
                Specification::Draft201909 => Some((Identity, keywords::defs::apply)),
                _ => None,
            },
            "$id" => Some((Identity, keywords::id::apply)),
            "$recursiveAnchor" => match self {
                Specification::Draft201909 => Some((Identity, keywords::recursive_anchor::apply)),
                _ => None,
            },
            "$recursiveRef" => match self {
                Specification::Draft201909 => Some((General, keywords::ref_::apply_recursive)),
                _ => None,
            },
            "$ref" => Some((General, keywords::ref_::apply)),
            "$schema" => Some((Identity, keywords::schema::apply)),
            "$vocabulary" => match self {
                Specification::Draft201909 => Some((Identity, keywords::vocabulary::apply)),
                _ => None,
            },
            "additionalItems" => Some((PostApplicator, keywords::additional_items::apply)),
            "additionalProperties" => Some((PostApplicator, keywords::additional_properties::apply)),
            "allOf" => Some((General, keywords::all_of::apply)),
            "anyOf" => Some((General, keywords::any_of::apply)),
            "const" => Some((General, keywords::const_::apply)),
            "contains" => Some((General, keywords::contains::apply)),
            "contentEncoding" => match self {
                Specification::Draft6 => None,
                _ => Some((General, keywords::content::apply_encoding)),
            },
            "contentMediaType" => match self {
                Specification::Draft6 => None,
                _ => Some((General, keywords::content::apply_media_type)),
            },
            "contentSchema" => match self {
                Specification::Draft201909 => Some((General, keywords::content::apply_schema)),
                _ => None,
            },
            "default" => Some((General, keywords::meta_data::apply)),
            "definitions" => Some((Identity, keywords::defs::apply)),
            "dependencies" => match self {
                Specification::Draft201909 => None,
                _ => Some((General, keywords::dependencies::apply)),
            },
            "dependentRequired" => match self {
                Specification::Draft201909 => Some((General, keywords::dependent_required::apply)),
                _ => None,
            },
            "dependentSchemas" => match self {
                Specification::Draft201909 => Some((General, keywords::dependent_schemas::apply)),
                _ => None,
            },
            "deprecated" => match self {
                Specification::Draft201909 => Some((General, keywords::meta_data::apply)),
                _ => None,
            },
            "description" => Some((General, keywords::meta_data::apply)),
            "else" => match self {
                Specification::Draft6 => None,
                _ => Some((PostApplicator, keywords::if_::apply_else)),
            },
            "enum" => Some((General, keywords::enum_::apply)),
            "examples" => Some((General, keywords::meta_data::apply)),
            "exclusiveMaximum" => Some((General, keywords::exclusive_maximum::apply)),
            "exclusiveMinimum" => Some((General, keywords::exclusive_minimum::apply)),
            "format" => Some((General, keywords::format::apply)),
            "if" => match self {
                Specification::Draft6 => None,
                _ => Some((General, keywords::if_::apply)),
            },
            "items" => Some((General, keywords::items::apply)),
            "maxContains" => match self {
                Specification::Draft201909 => Some((PostApplicator, keywords::contains::apply_max)),
                _ => None,
            },
            "maxItems" => Some((General, keywords::max_items::apply)),
            "maxLength" => Some((General, keywords::max_length::apply)),
            "maxProperties" => Some((General, keywords::max_properties::apply)),
            "maximum" => Some((General, keywords::maximum::apply)),
            "minContains" => match self {
                Specification::Draft201909 => Some((PostApplicator, keywords::contains::apply_min)),
                _ => None,
            },
            "minItems" => Some((General, keywords::min_items::apply)),
            "minLength" => Some((General, keywords::min_length::apply)),
            "minProperties" => Some((General, keywords::min_properties::apply)),
            "minimum" => Some((General, keywords::minimum::apply)),
            "multipleOf" => Some((General, keywords::multiple_of::apply)),
            "not" => Some((General, keywords::not::apply)),
            "oneOf" => Some((General, keywords::one_of::apply)),
            "pattern" => Some((General, keywords::pattern::apply)),
            "patternProperties" => Some((General, keywords::pattern_properties::apply)),
            "properties" => Some((General, keywords::properties::apply)),
            "propertyNames" => Some((General, keywords::property_names::apply)),
            "readOnly" => match self {
                Specification::Draft6 => None,
                _ => Some((General, keywords::meta_data::apply)),
            },
            "required" => Some((General, keywords::required::apply)),
            "then" => match self {
                Specification::Draft6 => None,
                _ => Some((PostApplicator, keywords::if_::apply_then)),
            },
            "title" => Some((General, keywords::meta_data::apply)),
            "type" => Some((General, keywords::type_::apply)),
            "unevaluatedItems" => match self {
                Specification::Draft201909 => Some((Unevaluated, keywords::unevaluated_items::apply)),
                _ => None,
            },
            "unevaluatedProperties" => match self {
                Specification::Draft201909 => {
                    Some((Unevaluated, keywords::unevaluated_properties::apply))
                }
                _ => None,
            },
            "uniqueItems" => Some((General, keywords::unique_items::apply)),
            "writeOnly" => match self {
                Specification::Draft6 => None,
                _ => Some((General, keywords::meta_data::apply)),
            },
            _ => None,
        }
    }

    /// The URI its meta-schema is served under.
    pub fn meta_schema_url(self) -> &'static str {
        match self {
            Specification::Draft6 => "http://json-schema.org/draft-06/schema",
            Specification::Draft7 => "http://json-schema.org/draft-07/schema",
            Specification::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
        }
    }
}

/// Get the `Specification` from a JSON Schema URL.
#[inline]
pub(crate) fn specification_from_url(url: &str) -> Option<Specification> {
    match url.trim_end_matches('#') {
        "https://json-schema.org/draft/2019-09/schema" => Some(Specification::Draft201909),
        "http://json-schema.org/draft-07/schema" => Some(Specification::Draft7),
        "http://json-schema.org/draft-06/schema" => Some(Specification::Draft6),
        _ => None,
    }
}

/// Get the `Specification` declared by a schema value, if any.
#[inline]
pub(crate) fn specification_of(schema: &Value) -> Option<Specification> {
    schema
        .get("$schema")
        .and_then(Value::as_str)
        .and_then(specification_from_url)
}
