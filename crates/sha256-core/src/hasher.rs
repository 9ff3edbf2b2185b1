//! # Hasher — Whole-Message SHA-256
//!
//! Pads the input, folds the compressor over the blocks in order, and reads
//! the final state out as a digest. Each call owns its padded buffer and
//! hash state; blocks are processed strictly in sequence because each one
//! chains from the state the previous one produced.

use crate::compress::HashState;
use crate::digest::Sha256Digest;
use crate::padding::PaddedMessage;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> Sha256Digest {
    let padded = PaddedMessage::new(data);
    let mut state = HashState::new();
    for block in padded.blocks() {
        state.compress(block);
    }
    state.into_digest()
}

/// Compute the SHA-256 digest of `data` as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    sha256(data).to_hex()
}

/// Compute the SHA-256 digest of `text` encoded as UTF-8.
pub fn sha256_text(text: &str) -> String {
    sha256_hex(text.as_bytes())
}
