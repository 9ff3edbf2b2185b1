//! # Compressor — One Block Into the Hash State
//!
//! Implements the SHA-256 compression function (FIPS 180-4 §6.2.2): expand a
//! 64-byte block into a 64-word message schedule, run 64 rounds over eight
//! working variables, then fold the result back into the hash state.
//!
//! ## Invariants
//!
//! - All word arithmetic wraps modulo 2^32 (`wrapping_add`, `rotate_right`).
//! - The final element-wise addition is the only write to the hash state.
//! - [`compress`] rejects any slice that is not exactly [`BLOCK_LEN`] bytes and
//!   leaves the state untouched when it does.

use crate::constants::{BLOCK_LEN, INITIAL_STATE, ROUND_CONSTANTS, SCHEDULE_LEN};
use crate::digest::Sha256Digest;
use crate::error::Sha256Error;

/// One 512-bit message block.
pub type Block = [u8; BLOCK_LEN];

/// σ0, used by schedule expansion.
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1, used by schedule expansion.
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Σ0, applied to working variable `a`.
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1, applied to working variable `e`.
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn choose(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

fn majority(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Build the 64-word message schedule for one block.
///
/// Words 0..15 are the block read as big-endian `u32`s; words 16..63 are
/// derived from earlier words with σ0 and σ1.
pub fn message_schedule(block: &Block) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for i in 16..SCHEDULE_LEN {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }
    w
}

/// Compress one block into `state`.
///
/// The block type carries the 64-byte length, so this path cannot fail.
pub fn compress_block(state: &mut [u32; 8], block: &Block) {
    let w = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (k, wi) in ROUND_CONSTANTS.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wi);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }
}

/// Compress a block supplied as a byte slice.
///
/// # Errors
///
/// Returns [`Sha256Error::InvalidBlockLength`] if `block` is not exactly
/// 64 bytes. The state is not modified in that case.
pub fn compress(state: &mut [u32; 8], block: &[u8]) -> Result<(), Sha256Error> {
    let block: &Block = block
        .try_into()
        .map_err(|_| Sha256Error::InvalidBlockLength {
            expected: BLOCK_LEN,
            actual: block.len(),
        })?;
    compress_block(state, block);
    Ok(())
}

/// The eight-word chaining state of one hash computation.
///
/// Starts at [`INITIAL_STATE`] and is advanced one block at a time. Each
/// computation owns its own `HashState`; nothing is shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState([u32; 8]);

impl HashState {
    /// A fresh state holding the SHA-256 initial hash values.
    pub fn new() -> Self {
        Self(INITIAL_STATE)
    }

    /// Resume from explicit chaining words.
    pub fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    /// Advance the state by one block.
    pub fn compress(&mut self, block: &Block) {
        compress_block(&mut self.0, block);
    }

    /// Current chaining words H0..H7.
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Read the state out as a digest.
    pub fn into_digest(self) -> Sha256Digest {
        Sha256Digest::from_state(&self.0)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}
