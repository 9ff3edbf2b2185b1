//! # Digest Value — 256-bit Output and Its Hex Form
//!
//! `Sha256Digest` holds the 32 raw digest bytes produced from the final hash
//! state. Its canonical text form is 64 lowercase hex characters, which is
//! what `Display`, [`Sha256Digest::to_hex`] and the serde representation emit.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{DIGEST_LEN, HEX_DIGEST_LEN};
use crate::error::Sha256Error;

/// A SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Serialize the final chaining words H0..H7 big-endian.
    pub fn from_state(state: &[u32; 8]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self(bytes)
    }

    /// Parse a digest from exactly 64 hex characters.
    ///
    /// Either letter case is accepted here; this is a parser, not the
    /// verifier, which compares rendered strings exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Sha256Error::InvalidDigest`] on a wrong length or a
    /// non-hex character.
    pub fn from_hex(s: &str) -> Result<Self, Sha256Error> {
        if s.len() != HEX_DIGEST_LEN {
            return Err(Sha256Error::InvalidDigest(format!(
                "expected {HEX_DIGEST_LEN} hex characters, got {}",
                s.len()
            )));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// The raw 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render as 64 lowercase hex characters, one 8-character group per word.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(HEX_DIGEST_LEN);
        for word in self.0.chunks_exact(4) {
            let word = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
            // Writing into a String cannot fail.
            let _ = write!(out, "{word:08x}");
        }
        out
    }
}

fn hex_value(c: u8) -> Result<u8, Sha256Error> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Sha256Error::InvalidDigest(format!(
            "non-hex character {:?}",
            char::from(c)
        ))),
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Sha256Digest {
    type Err = Sha256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Sha256Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Sha256Digest) -> Self {
        digest.0
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_STATE;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_from_state_is_big_endian() {
        let digest = Sha256Digest::from_state(&INITIAL_STATE);
        assert_eq!(&digest.as_bytes()[..4], &[0x6a, 0x09, 0xe6, 0x67]);
        assert_eq!(&digest.as_bytes()[28..], &[0x5b, 0xe0, 0xcd, 0x19]);
    }

    #[test]
    fn test_to_hex_pads_each_word() {
        let digest = Sha256Digest::from_state(&[0, 1, 0xa, 0xff, 0x100, 0, 0, 0xffff_ffff]);
        let expected = [
            "00000000", "00000001", "0000000a", "000000ff", "00000100", "00000000", "00000000",
            "ffffffff",
        ]
        .concat();
        assert_eq!(digest.to_hex(), expected);
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        let digest = Sha256Digest::new([0xab; DIGEST_LEN]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), HEX_DIGEST_LEN);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_display_matches_to_hex() {
        let digest = Sha256Digest::from_hex(ABC_HEX).unwrap();
        assert_eq!(digest.to_string(), ABC_HEX);
    }

    #[test]
    fn test_from_hex_accepts_uppercase() {
        let lower = Sha256Digest::from_hex(ABC_HEX).unwrap();
        let upper = Sha256Digest::from_hex(&ABC_HEX.to_uppercase()).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(matches!(
            Sha256Digest::from_hex("abcdef1234567890"),
            Err(Sha256Error::InvalidDigest(_))
        ));
        assert!(Sha256Digest::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let bad = format!("{}zz", &ABC_HEX[..62]);
        assert!(Sha256Digest::from_hex(&bad).is_err());
    }

    #[test]
    fn test_from_hex_rejects_multibyte_text_of_right_byte_length() {
        // 32 two-byte characters: 64 bytes, none of them hex digits.
        let bad = "é".repeat(32);
        assert_eq!(bad.len(), HEX_DIGEST_LEN);
        assert!(Sha256Digest::from_hex(&bad).is_err());
    }

    #[test]
    fn test_from_str() {
        let digest: Sha256Digest = ABC_HEX.parse().unwrap();
        assert_eq!(digest.to_hex(), ABC_HEX);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let digest = Sha256Digest::from_hex(ABC_HEX).unwrap();
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{ABC_HEX}\""));
        let back: Sha256Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }

    #[test]
    fn test_serde_rejects_invalid_hex() {
        let result: Result<Sha256Digest, _> = serde_json::from_str("\"not-a-digest\"");
        assert!(result.is_err());
    }
}
