//! The pre-validation ID/anchor scan.
//!
//! Builds the map `URI -> schema node` consulted by `$ref` and
//! `$recursiveRef`, failing fast on malformed or duplicate identifiers.
use crate::{
    error::SchemaError,
    paths::{JsonPointer, PathChunk},
    specification::{specification_of, Specification},
    traverser::{children, PositionKind},
    uri,
};
use ahash::AHashMap;
use serde_json::Value;
use std::hash::{Hash, Hasher};
use url::Url;

lazy_static::lazy_static! {
    static ref ANCHOR_RE: regex::Regex =
        regex::Regex::new(r"^[A-Z_a-z][-A-Z_a-z.0-9]*$").expect("Is a valid regex");
}

/// A resolved identifier of a schema node.
///
/// Identity (equality and hashing) is defined by the resolved `id` alone; the
/// remaining fields are provenance.
#[derive(Debug, Clone, Eq)]
pub struct Id {
    /// The resolved URI the node is addressable under.
    pub id: Url,
    /// The identifier exactly as written in the schema, when it came from one.
    pub value: Option<String>,
    /// The base URI in effect where the identifier appeared.
    pub base: Option<Url>,
    /// JSON Pointer to the node from its document root.
    pub path: JsonPointer,
    /// The resolved `$id` of the document root, when it has one.
    pub root_id: Option<Url>,
    /// The URI the document itself was addressed by.
    pub root_uri: Option<Url>,
}

impl Id {
    /// A bare lookup probe carrying only the resolved URI.
    pub(crate) fn plain(id: Url) -> Id {
        Id {
            id,
            value: None,
            base: None,
            path: JsonPointer::default(),
            root_id: None,
            root_uri: None,
        }
    }

    /// An identifier is an anchor when its URI carries a non-empty fragment.
    pub fn is_anchor(&self) -> bool {
        uri::has_non_empty_fragment(&self.id)
    }
}

impl PartialEq for Id {
    fn eq(&self, other: &Id) -> bool {
        self.id == other.id
    }
}

impl Hash for Id {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// Known identifiers of one evaluation: resolved URI to schema node.
pub type IdMap<'a> = AHashMap<Id, &'a Value>;

struct Scanner<'a> {
    map: IdMap<'a>,
    root_id: Option<Url>,
    root_uri: Url,
    auto_resolve: bool,
}

impl<'a> Scanner<'a> {
    fn error(&self, path: &JsonPointer, message: impl Into<String>) -> SchemaError {
        SchemaError::new(uri::with_pointer_fragment(&self.root_uri, path), message)
    }

    fn insert(&mut self, id: Id, node: &'a Value, path: &JsonPointer) -> Result<(), SchemaError> {
        // The implicit entry for the document root may be restated by the
        // root's own `$id`; any other collision is malformed.
        let restated_root = match self.map.get_key_value(&id) {
            Some((existing, _)) => {
                if existing.value.is_none()
                    && existing.path == JsonPointer::default()
                    && id.path == JsonPointer::default()
                {
                    true
                } else if id.is_anchor() {
                    return Err(self.error(path, format!("duplicate anchor \"{}\"", id.id)));
                } else {
                    return Err(self.error(path, format!("duplicate ID \"{}\"", id.id)));
                }
            }
            None => false,
        };
        if restated_root {
            self.map.remove(&id);
        }
        self.map.insert(id, node);
        Ok(())
    }

    fn scan_value(
        &mut self,
        value: &'a Value,
        kind: PositionKind,
        base: &Url,
        path: JsonPointer,
        specification: Specification,
    ) -> Result<(), SchemaError> {
        let mut base = base.clone();
        let mut specification = specification;
        if kind == PositionKind::Schema {
            if let Value::Object(object) = value {
                if let Some(declared) = specification_of(value) {
                    specification = declared;
                }
                if let Some(id) = object.get("$id") {
                    base = self.scan_id(id, value, &base, &path, specification)?;
                }
                if specification >= Specification::Draft201909 {
                    if let Some(anchor) = object.get("$anchor") {
                        self.scan_anchor(anchor, value, &base, &path)?;
                    }
                }
            }
        }
        match kind {
            PositionKind::Schema | PositionKind::SchemaMap | PositionKind::SchemaList => {
                for (chunk, child, child_kind) in children(value, kind) {
                    // Identifiers inside `properties` values are not collected.
                    if kind == PositionKind::Schema
                        && matches!(&chunk, PathChunk::Name(name) if name == "properties")
                    {
                        continue;
                    }
                    if child_kind == PositionKind::Data {
                        continue;
                    }
                    self.scan_value(child, child_kind, &base, path.join(chunk), specification)?;
                }
            }
            PositionKind::Data => {}
        }
        Ok(())
    }

    fn scan_id(
        &mut self,
        id: &Value,
        node: &'a Value,
        base: &Url,
        path: &JsonPointer,
        specification: Specification,
    ) -> Result<Url, SchemaError> {
        let id_path = path.join("$id");
        let lexeme = match id {
            Value::String(lexeme) => lexeme,
            _ => return Err(self.error(&id_path, "$id must be a string")),
        };
        let resolved = if self.auto_resolve {
            uri::resolve(base, lexeme)
        } else {
            Url::parse(lexeme)
        }
        .map_err(|_| self.error(&id_path, format!("\"{}\" is not a valid URI-reference", lexeme)))?;
        if uri::has_non_empty_fragment(&resolved) {
            if specification >= Specification::Draft201909 {
                return Err(self.error(&id_path, "$id must not carry a non-empty fragment"));
            }
            if !ANCHOR_RE.is_match(uri::raw_fragment(&resolved)) {
                return Err(self.error(
                    &id_path,
                    format!("\"{}\" is not a valid anchor fragment", uri::raw_fragment(&resolved)),
                ));
            }
            // Anchor-form identifier: addressable, but the base is unchanged.
            self.insert(
                Id {
                    id: resolved,
                    value: Some(lexeme.clone()),
                    base: Some(base.clone()),
                    path: path.clone(),
                    root_id: self.root_id.clone(),
                    root_uri: Some(self.root_uri.clone()),
                },
                node,
                path,
            )?;
            return Ok(base.clone());
        }
        let new_base = uri::normalize(&resolved);
        self.insert(
            Id {
                id: new_base.clone(),
                value: Some(lexeme.clone()),
                base: Some(base.clone()),
                path: path.clone(),
                root_id: self.root_id.clone(),
                root_uri: Some(self.root_uri.clone()),
            },
            node,
            path,
        )?;
        Ok(new_base)
    }

    fn scan_anchor(
        &mut self,
        anchor: &Value,
        node: &'a Value,
        base: &Url,
        path: &JsonPointer,
    ) -> Result<(), SchemaError> {
        let anchor_path = path.join("$anchor");
        let name = match anchor {
            Value::String(name) => name,
            _ => return Err(self.error(&anchor_path, "$anchor must be a string")),
        };
        if !ANCHOR_RE.is_match(name) {
            return Err(self.error(&anchor_path, format!("\"{}\" is not a valid anchor", name)));
        }
        let mut id = base.clone();
        id.set_fragment(Some(name));
        self.insert(
            Id {
                id,
                value: Some(name.clone()),
                base: Some(base.clone()),
                path: path.clone(),
                root_id: self.root_id.clone(),
                root_uri: Some(self.root_uri.clone()),
            },
            node,
            path,
        )
    }
}

/// Scan `schema` for `$id` / `$anchor` declarations, producing the map used
/// for reference resolution. `base_uri` must be absolute and carry no
/// non-empty fragment.
pub fn scan_ids<'a>(
    base_uri: &Url,
    schema: &'a Value,
    specification: Specification,
) -> Result<IdMap<'a>, SchemaError> {
    scan(base_uri, schema, specification, true)
}

pub(crate) fn scan<'a>(
    base_uri: &Url,
    schema: &'a Value,
    specification: Specification,
    auto_resolve: bool,
) -> Result<IdMap<'a>, SchemaError> {
    if uri::has_non_empty_fragment(base_uri) {
        return Err(SchemaError::new(
            base_uri.clone(),
            "the base URI must not carry a fragment",
        ));
    }
    let base = uri::normalize(base_uri);
    let root_id = schema
        .get("$id")
        .and_then(Value::as_str)
        .and_then(|id| uri::resolve(&base, id).ok());
    let mut scanner = Scanner {
        map: IdMap::default(),
        root_id,
        root_uri: base.clone(),
        auto_resolve,
    };
    scanner.map.insert(
        Id {
            id: base.clone(),
            value: None,
            base: None,
            path: JsonPointer::default(),
            root_id: scanner.root_id.clone(),
            root_uri: Some(base.clone()),
        },
        schema,
    );
    scanner.scan_value(
        schema,
        PositionKind::Schema,
        &base,
        JsonPointer::default(),
        specification,
    )?;
    Ok(scanner.map)
}
