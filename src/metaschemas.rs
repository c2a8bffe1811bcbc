//! Embedded meta-schema resources.
//!
//! The known meta-schemas ship with the crate and are parsed once, on first
//! use. Lookup is keyed by the normalized, fragment-less URI, so loading is
//! invariant under URI equality.
use crate::{
    ids::{self, IdMap},
    specification::Specification,
    uri,
};
use ahash::AHashMap;
use serde_json::Value;
use url::Url;

macro_rules! schema {
    ($name:ident, $path:expr) => {
        lazy_static::lazy_static! {
            static ref $name: Value =
                serde_json::from_str(include_str!($path)).expect("Invalid embedded meta-schema");
        }
    };
}

schema!(DRAFT6, "../metaschemas/draft6.json");
schema!(DRAFT7, "../metaschemas/draft7.json");
schema!(DRAFT201909, "../metaschemas/draft2019-09/schema.json");
schema!(
    DRAFT201909_APPLICATOR,
    "../metaschemas/draft2019-09/meta/applicator.json"
);
schema!(
    DRAFT201909_CONTENT,
    "../metaschemas/draft2019-09/meta/content.json"
);
schema!(DRAFT201909_CORE, "../metaschemas/draft2019-09/meta/core.json");
schema!(
    DRAFT201909_FORMAT,
    "../metaschemas/draft2019-09/meta/format.json"
);
schema!(
    DRAFT201909_META_DATA,
    "../metaschemas/draft2019-09/meta/meta-data.json"
);
schema!(
    DRAFT201909_VALIDATION,
    "../metaschemas/draft2019-09/meta/validation.json"
);

fn entries() -> Vec<(&'static str, &'static Value, Specification)> {
    vec![
        (
            "http://json-schema.org/draft-06/schema",
            &*DRAFT6,
            Specification::Draft6,
        ),
        (
            "http://json-schema.org/draft-07/schema",
            &*DRAFT7,
            Specification::Draft7,
        ),
        (
            "https://json-schema.org/draft/2019-09/schema",
            &*DRAFT201909,
            Specification::Draft201909,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/applicator",
            &*DRAFT201909_APPLICATOR,
            Specification::Draft201909,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/content",
            &*DRAFT201909_CONTENT,
            Specification::Draft201909,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/core",
            &*DRAFT201909_CORE,
            Specification::Draft201909,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/format",
            &*DRAFT201909_FORMAT,
            Specification::Draft201909,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/meta-data",
            &*DRAFT201909_META_DATA,
            Specification::Draft201909,
        ),
        (
            "https://json-schema.org/draft/2019-09/meta/validation",
            &*DRAFT201909_VALIDATION,
            Specification::Draft201909,
        ),
    ]
}

lazy_static::lazy_static! {
    static ref META_SCHEMAS: AHashMap<String, (&'static Value, Specification)> = {
        let mut store = AHashMap::with_capacity(9);
        for (url, value, specification) in entries() {
            store.insert(url.to_string(), (value, specification));
        }
        store
    };

    /// `$id` / `$anchor` targets of every embedded resource, scanned once.
    static ref META_IDS: IdMap<'static> = {
        let mut map = IdMap::default();
        for (url, value, specification) in entries() {
            let base = Url::parse(url).expect("Is a valid URL");
            let scanned = ids::scan_ids(&base, value, specification)
                .expect("Embedded meta-schemas have well-formed IDs");
            map.extend(scanned);
        }
        map
    };
}

fn store_key(url: &Url) -> String {
    uri::normalize(&uri::strip_fragment(url)).to_string()
}

/// Load a known meta-schema document by URI, ignoring any fragment.
pub(crate) fn load(url: &Url) -> Option<&'static Value> {
    META_SCHEMAS.get(&store_key(url)).map(|(value, _)| *value)
}

/// The specification a known meta-schema document belongs to.
pub(crate) fn specification_for(url: &Url) -> Option<Specification> {
    META_SCHEMAS
        .get(&store_key(url))
        .map(|(_, specification)| *specification)
}

/// Look up a node of an embedded resource by its full resolved URI.
pub(crate) fn find_id(url: &Url) -> Option<&'static Value> {
    META_IDS
        .get(&ids::Id::plain(url.clone()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_documents_load() {
        for key in &[
            "http://json-schema.org/draft-06/schema",
            "http://json-schema.org/draft-07/schema",
            "https://json-schema.org/draft/2019-09/schema",
            "https://json-schema.org/draft/2019-09/meta/core",
            "https://json-schema.org/draft/2019-09/meta/applicator",
            "https://json-schema.org/draft/2019-09/meta/validation",
            "https://json-schema.org/draft/2019-09/meta/meta-data",
            "https://json-schema.org/draft/2019-09/meta/format",
            "https://json-schema.org/draft/2019-09/meta/content",
        ] {
            let url = Url::parse(key).unwrap();
            assert!(load(&url).is_some(), "{} should be embedded", key);
            assert!(find_id(&url).is_some(), "{} should be scanned", key);
        }
    }

    #[test]
    fn fragments_are_ignored_on_load() {
        let url = Url::parse("http://json-schema.org/draft-07/schema#").unwrap();
        assert!(load(&url).is_some());
        assert_eq!(specification_for(&url), Some(Specification::Draft7));
    }

    #[test]
    fn unknown_documents_do_not_load() {
        let url = Url::parse("https://example.com/schema").unwrap();
        assert!(load(&url).is_none());
    }
}
