//! `contentMediaType` checks.
use serde_json::Value;

pub(crate) fn is_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<Value>(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::is_json;

    #[test]
    fn json() {
        assert!(is_json(br#"{"foo": "bar"}"#));
        assert!(!is_json(b"{"));
    }
}
