//! `contentEncoding` checks and converters.

pub(crate) fn is_base64(item: &str) -> bool {
    base64::decode(item).is_ok()
}

pub(crate) fn from_base64(item: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::decode(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64() {
        assert!(is_base64("eyJmb28iOiAiYmFyIn0="));
        assert!(!is_base64("not base64!"));
        assert_eq!(from_base64("aGk=").unwrap(), b"hi");
    }
}
