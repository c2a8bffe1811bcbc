//! A small URI algebra on top of `url::Url`: reference resolution, fragment
//! handling and rendering of JSON Pointer tokens into URI fragments.
use crate::paths::{escape, JsonPointer, PathChunk};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::{ParseError, Url};

/// Scope used when the caller does not provide a base URI.
pub(crate) const DEFAULT_ROOT_URL: &str = "json-schema:///";

lazy_static::lazy_static! {
    pub(crate) static ref DEFAULT_SCOPE: Url =
        Url::parse(DEFAULT_ROOT_URL).expect("Is a valid URL");
}

// The URI fragment character set: pchar / "/" / "?".
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'%');

/// RFC 3986 reference resolution against `base`.
#[inline]
pub(crate) fn resolve(base: &Url, reference: &str) -> Result<Url, ParseError> {
    Url::options().base_url(Some(base)).parse(reference)
}

/// Case-normalized form with `./` and `../` folded (done by the parser) and an
/// empty fragment dropped, so `http://e.x/s#` and `http://e.x/s` compare equal.
pub(crate) fn normalize(url: &Url) -> Url {
    if url.fragment() == Some("") {
        strip_fragment(url)
    } else {
        url.clone()
    }
}

pub(crate) fn strip_fragment(url: &Url) -> Url {
    let mut copy = url.clone();
    copy.set_fragment(None);
    copy
}

/// The fragment exactly as written, not percent-decoded, so anchors round-trip.
#[inline]
pub(crate) fn raw_fragment(url: &Url) -> &str {
    url.fragment().unwrap_or("")
}

#[inline]
pub(crate) fn has_non_empty_fragment(url: &Url) -> bool {
    !raw_fragment(url).is_empty()
}

/// Append one pointer token to the raw fragment: pointer-escaped first, then
/// percent-encoded with the fragment character set, then prefixed with `/`.
pub(crate) fn append_fragment_chunk(url: &Url, chunk: &PathChunk) -> Url {
    let mut fragment = raw_fragment(url).to_string();
    fragment.push('/');
    match chunk {
        PathChunk::Name(name) => {
            fragment.push_str(&utf8_percent_encode(&escape(name), FRAGMENT).to_string())
        }
        PathChunk::Index(idx) => fragment.push_str(&idx.to_string()),
    }
    let mut copy = url.clone();
    copy.set_fragment(Some(&fragment));
    copy
}

/// Render a whole pointer into the fragment of `url`.
pub(crate) fn with_pointer_fragment(url: &Url, pointer: &JsonPointer) -> Url {
    let mut copy = strip_fragment(url);
    for chunk in pointer.iter() {
        copy = append_fragment_chunk(&copy, chunk);
    }
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::JsonPointer;
    use test_case::test_case;

    #[test_case("http://e.x/a/b", "c", "http://e.x/a/c")]
    #[test_case("http://e.x/a/b", "/c", "http://e.x/c")]
    #[test_case("http://e.x/a/b", "../c", "http://e.x/c" ; "dot dot slash reference")]
    #[test_case("http://e.x/a/b", "#frag", "http://e.x/a/b#frag")]
    #[test_case("http://e.x/a/b", "https://other.y/z", "https://other.y/z")]
    fn test_resolve(base: &str, reference: &str, expected: &str) {
        let base = Url::parse(base).unwrap();
        assert_eq!(resolve(&base, reference).unwrap().as_str(), expected);
    }

    #[test]
    fn fragments() {
        let url = Url::parse("http://e.x/s#anchor").unwrap();
        assert_eq!(raw_fragment(&url), "anchor");
        assert!(has_non_empty_fragment(&url));
        assert_eq!(strip_fragment(&url).as_str(), "http://e.x/s");
        let empty = Url::parse("http://e.x/s#").unwrap();
        assert!(!has_non_empty_fragment(&empty));
        assert_eq!(normalize(&empty).as_str(), "http://e.x/s");
    }

    #[test]
    fn pointer_fragments() {
        let url = Url::parse("http://e.x/s").unwrap();
        let mut pointer = JsonPointer::default();
        pointer.push("$defs");
        pointer.push("a/b");
        let rendered = with_pointer_fragment(&url, &pointer);
        assert_eq!(rendered.as_str(), "http://e.x/s#/$defs/a~1b");
    }
}
