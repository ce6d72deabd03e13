#![forbid(unsafe_code)]

//! Base64 helpers shared by elements that carry binary content.

use base64::Engine;
use sigtuna_core::{Error, Result};

/// Cheap plausibility check for base64 content: alphabet, padding position
/// and four-character grouping. Whitespace is ignored since XML content is
/// commonly line-wrapped. This never decodes.
pub(crate) fn is_plausible_base64(value: &str) -> bool {
    let clean: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.is_empty() || clean.len() % 4 != 0 {
        return false;
    }
    let body = clean.trim_end_matches('=');
    if clean.len() - body.len() > 2 {
        return false;
    }
    body.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/')
}

/// Decode base64 content, ignoring embedded whitespace.
pub(crate) fn decode_base64(value: &str) -> Result<Vec<u8>> {
    let clean: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(&clean)
        .map_err(|e| Error::InvalidArgument(format!("invalid base64 content: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_base64_accepts_valid() {
        assert!(is_plausible_base64("MTIzNA=="));
        assert!(is_plausible_base64("aGVsbG8gd29ybGQh"));
        assert!(is_plausible_base64("YWJj\nZGVm")); // wrapped
    }

    #[test]
    fn test_plausible_base64_rejects_illegal() {
        assert!(!is_plausible_base64(""));
        assert!(!is_plausible_base64("ab!="));
        assert!(!is_plausible_base64("ab%c"));
        assert!(!is_plausible_base64("abcde")); // bad grouping
        assert!(!is_plausible_base64("a==="));
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        assert_eq!(decode_base64("aGVs\nbG8=").unwrap(), b"hello");
        assert!(decode_base64("not base64!").is_err());
    }
}
