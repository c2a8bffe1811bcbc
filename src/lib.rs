//! # jsonschema-eval
//!
//! An interpreting JSON Schema validator for drafts 6, 7 and 2019-09. The
//! schema tree is walked directly against the instance tree; applicators
//! communicate exclusively through collected annotations, which is what makes
//! `additionalProperties`, `unevaluatedProperties` and friends observable in
//! the reports.
//!
//! ## Usage
//!
//! ```rust
//! use jsonschema_eval::Validator;
//! use serde_json::json;
//! use url::Url;
//!
//! let schema = json!({"type": "integer", "minimum": 0, "exclusiveMaximum": 10});
//! let base = Url::parse("https://example.com/schema").unwrap();
//! let validator = Validator::new();
//! let outcome = validator.validate(&schema, &json!(5), &base).unwrap();
//! assert!(outcome.is_valid());
//! for failure in validator
//!     .validate(&schema, &json!(10), &base)
//!     .unwrap()
//!     .failures()
//! {
//!     println!("Validation error: {}", failure)
//! }
//! ```
#![warn(
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::redundant_closure,
    clippy::trivially_copy_pass_by_ref,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::unnecessary_wraps, clippy::upper_case_acronyms)]
mod annotations;
mod content_encoding;
mod content_media_type;
mod context;
pub mod error;
mod helpers;
mod ids;
mod keywords;
mod metaschemas;
mod numbers;
mod options;
pub mod paths;
pub mod primitive_type;
mod specification;
mod traverser;
mod uri;
mod validator;

pub use annotations::Annotation;
pub use error::{SchemaError, ValidationFailure};
pub use ids::{scan_ids, Id, IdMap};
pub use options::ValidationOptions;
pub use specification::Specification;
pub use validator::{Validation, Validator};

use serde_json::Value;

/// A shortcut for validating `instance` against `schema` under the default
/// options and base URI.
/// ```rust
/// use jsonschema_eval::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    Validator::new()
        .is_valid(schema, instance, &uri::DEFAULT_SCOPE)
        .expect("Invalid schema")
}


#[cfg(test)]
mod tests {
    use super::is_valid;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&schema, &valid));
        assert!(!is_valid(&schema, &invalid));
    }
}
