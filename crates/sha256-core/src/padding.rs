//! # Message Padding
//!
//! `PaddedMessage` is the only way the hasher obtains blocks. Its buffer is
//! private and built once by [`PaddedMessage::new`], so every value of the
//! type satisfies `len % 64 == 0` and ends with the encoded bit length.
//!
//! The layout follows FIPS 180-4 §5.1.1:
//!
//! ```text
//! message || 0x80 || 0x00 * k || bit_length (u64, big-endian)
//! ```
//!
//! where `k` is the smallest count that makes the total a multiple of 64.
//!
//! ## Length Field
//!
//! The bit length is `len * 8` wrapped modulo 2^64. Messages of 2^61 bytes or
//! more are outside SHA-256's domain; they are hashed with the wrapped length
//! rather than rejected.

use crate::compress::Block;
use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};

const PAD_MARKER: u8 = 0x80;

/// Padded length in bytes for a message of `message_len` bytes:
/// `64 * ceil((message_len + 9) / 64)`.
pub fn padded_len(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_FIELD_LEN).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Message bit length as written into the trailing length field.
pub fn bit_length(message_len: usize) -> u64 {
    (message_len as u64).wrapping_mul(8)
}

/// A message padded to a whole number of 64-byte blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage(Vec<u8>);

impl PaddedMessage {
    /// Pad `message` for hashing.
    pub fn new(message: &[u8]) -> Self {
        let total = padded_len(message.len());
        let mut bytes = Vec::with_capacity(total);
        bytes.extend_from_slice(message);
        bytes.push(PAD_MARKER);
        bytes.resize(total - LENGTH_FIELD_LEN, 0);
        bytes.extend_from_slice(&bit_length(message.len()).to_be_bytes());
        Self(bytes)
    }

    /// The full padded byte sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Padded length in bytes; always a multiple of 64.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: padding adds at least nine bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of 64-byte blocks.
    pub fn block_count(&self) -> usize {
        self.0.len() / BLOCK_LEN
    }

    /// Blocks in message order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        // chunks_exact never yields a short chunk and the constructor leaves
        // no remainder, so every conversion succeeds.
        self.0
            .chunks_exact(BLOCK_LEN)
            .filter_map(|chunk| <&Block>::try_from(chunk).ok())
    }
}

impl AsRef<[u8]> for PaddedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
