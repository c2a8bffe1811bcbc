//! Error types
use crate::paths::JsonPointer;
use serde::Serialize;
use std::{error, fmt};
use url::Url;

/// The error type that happens when the input schema is not valid.
///
/// It includes cases found during the pre-validation ID scan (duplicate or
/// malformed `$id`/`$anchor`) as well as structurally invalid keyword values
/// discovered while validating (e.g. a non-numeric `minimum`), which cannot
/// all be known upfront because references may land in other resources.
/// Fatal: aborts the whole `validate` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    /// Absolute URI of the keyword at which the schema is malformed.
    pub location: Url,
    /// A human-readable description of the defect.
    pub message: String,
}

impl SchemaError {
    pub(crate) fn new(location: Url, message: impl Into<String>) -> SchemaError {
        SchemaError {
            location,
            message: message.into(),
        }
    }
}

impl error::Error for SchemaError {}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.location)
    }
}

/// A single validation failure: the instance does not satisfy a keyword.
///
/// Local and non-fatal; recorded in the error report and surfaced as `false`
/// from the containing keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    /// Dynamic JSON Pointer through the schema, with `$ref` expansion.
    #[serde(rename = "keywordLocation")]
    pub keyword_location: String,
    /// Absolute keyword URI; does not traverse `$ref`.
    #[serde(rename = "absoluteKeywordLocation")]
    pub absolute_keyword_location: String,
    /// JSON Pointer into the instance.
    #[serde(rename = "instanceLocation")]
    pub instance_location: String,
    /// Why the instance failed.
    #[serde(rename = "error")]
    pub message: String,
}

impl ValidationFailure {
    pub(crate) fn new(
        keyword_location: &JsonPointer,
        absolute_keyword_location: &Url,
        instance_location: &JsonPointer,
        message: impl Into<String>,
    ) -> ValidationFailure {
        ValidationFailure {
            keyword_location: keyword_location.to_string(),
            absolute_keyword_location: absolute_keyword_location.to_string(),
            instance_location: instance_location.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
