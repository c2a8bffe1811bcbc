//! Facilities for working with paths within schemas or validated instances.
use serde_json::Value;
use std::fmt::Write;
use std::fmt;

/// JSON Pointer as a wrapper around individual path components.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct JsonPointer(Vec<PathChunk>);

impl JsonPointer {
    pub(crate) fn push(&mut self, chunk: impl Into<PathChunk>) {
        self.0.push(chunk.into())
    }

    pub(crate) fn join(&self, chunk: impl Into<PathChunk>) -> JsonPointer {
        let mut copy = self.clone();
        copy.push(chunk);
        copy
    }

    /// Whether `prefix` is a chunk-wise prefix of this pointer.
    pub(crate) fn starts_with(&self, prefix: &JsonPointer) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    pub(crate) fn parent(&self) -> JsonPointer {
        let mut copy = self.clone();
        copy.0.pop();
        copy
    }

    /// JSON pointer as a vector of strings. Each component is casted to `String`.
    pub fn into_vec(self) -> Vec<String> {
        self.0
            .iter()
            .map(|item| match item {
                PathChunk::Name(value) => value.to_string(),
                PathChunk::Index(idx) => idx.to_string(),
            })
            .collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &PathChunk> {
        self.0.iter()
    }

    /// Parse a rendered pointer back into its components. Returns `None` when
    /// the input is non-empty and does not start with `/`.
    pub fn parse(pointer: &str) -> Option<JsonPointer> {
        if pointer.is_empty() {
            return Some(JsonPointer::default());
        }
        if !pointer.starts_with('/') {
            return None;
        }
        Some(JsonPointer(
            pointer
                .split('/')
                .skip(1)
                .map(|token| PathChunk::Name(unescape(token)))
                .collect(),
        ))
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, mut f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_empty() {
            for chunk in &self.0 {
                f.write_char('/')?;
                match chunk {
                    PathChunk::Name(value) => f.write_str(&escape(value))?,
                    PathChunk::Index(idx) => itoa::fmt(&mut f, *idx)?,
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathChunk {
    Name(String),
    Index(usize),
}

impl From<String> for PathChunk {
    #[inline]
    fn from(value: String) -> Self {
        PathChunk::Name(value)
    }
}
impl From<&str> for PathChunk {
    #[inline]
    fn from(value: &str) -> Self {
        PathChunk::Name(value.to_string())
    }
}
impl From<usize> for PathChunk {
    #[inline]
    fn from(value: usize) -> Self {
        PathChunk::Index(value)
    }
}

impl From<&[&str]> for JsonPointer {
    #[inline]
    fn from(path: &[&str]) -> Self {
        JsonPointer(
            path.iter()
                .map(|item| PathChunk::Name(item.to_string()))
                .collect(),
        )
    }
}

/// Escape a single reference token: `~` as `~0`, `/` as `~1`.
pub(crate) fn escape(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Decode a single reference token. `~1` before `~0` so `~01` round-trips to `~1`.
pub(crate) fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

fn parse_index(s: &str) -> Option<usize> {
    if s.starts_with('+') || (s.starts_with('0') && s.len() != 1) {
        return None;
    }
    s.parse().ok()
}

/// Follow a rendered JSON Pointer within `document`. Numeric tokens index
/// arrays when the current node is an array; otherwise they key objects.
pub fn follow<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return Some(document);
    }
    if !pointer.starts_with('/') {
        return None;
    }
    let tokens = pointer.split('/').skip(1).map(unescape);
    let mut target = document;
    for token in tokens {
        target = match target {
            Value::Object(map) => map.get(&token)?,
            Value::Array(list) => list.get(parse_index(&token)?)?,
            _ => return None,
        };
    }
    Some(target)
}
