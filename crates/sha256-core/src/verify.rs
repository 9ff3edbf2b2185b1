//! # Verifier
//!
//! Checks a candidate digest string against the digest of a message.
//!
//! The comparison is exact string equality against the lowercase rendering.
//! A candidate is never parsed or normalized: uppercase hex, surrounding
//! whitespace, or a `sha256:` prefix all make it a mismatch. Any string is
//! an acceptable candidate; malformed ones simply do not match.
//!
//! The comparison is not constant-time.

use crate::hasher::{sha256_hex, sha256_text};

/// True iff `candidate` equals the SHA-256 hex digest of `text` (UTF-8).
pub fn verify(text: &str, candidate: &str) -> bool {
    sha256_text(text) == candidate
}

/// True iff `candidate` equals the SHA-256 hex digest of `data`.
pub fn verify_bytes(data: &[u8], candidate: &str) -> bool {
    sha256_hex(data) == candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Mensagem para calcular o hash";

    #[test]
    fn test_matching_digest() {
        let digest = sha256_text(SAMPLE);
        assert!(verify(SAMPLE, &digest));
    }

    #[test]
    fn test_short_wrong_digest() {
        assert!(!verify(SAMPLE, "abcdef1234567890"));
    }

    #[test]
    fn test_uppercase_digest_does_not_match() {
        let digest = sha256_text(SAMPLE).to_uppercase();
        assert!(!verify(SAMPLE, &digest));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let digest = format!("{}\n", sha256_text(SAMPLE));
        assert!(!verify(SAMPLE, &digest));
    }

    #[test]
    fn test_empty_candidate() {
        assert!(!verify("", ""));
    }

    #[test]
    fn test_arbitrary_characters_never_error() {
        assert!(!verify(SAMPLE, "ünïcödé 🙂 not hex at all"));
    }

    #[test]
    fn test_verify_bytes() {
        let data = [0u8, 159, 146, 150];
        let digest = sha256_hex(&data);
        assert!(verify_bytes(&data, &digest));
        assert!(!verify_bytes(&data[..3], &digest));
    }
}
