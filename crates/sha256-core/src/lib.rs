//! # sha256-core — SHA-256 Message Digest
//!
//! A self-contained implementation of SHA-256 (FIPS 180-4) over in-memory
//! messages, plus a digest verification predicate.
//!
//! ## Layers
//!
//! - **Compressor** ([`compress`]) — one 64-byte block into the eight-word
//!   hash state: schedule expansion and 64 rounds.
//! - **Hasher** ([`hasher`], [`padding`]) — padding to whole blocks, the
//!   sequential block loop, and lowercase hex rendering.
//! - **Verifier** ([`verify`]) — exact string comparison of a candidate
//!   against the computed digest.
//!
//! ```
//! use sha256_core::{sha256_text, verify};
//!
//! let digest = sha256_text("abc");
//! assert_eq!(
//!     digest,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! assert!(verify("abc", &digest));
//! ```
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf of the DAG).
//! - No `unsafe` code, no I/O, no global mutable state.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Whole-message API only; there is no incremental hasher.

#![forbid(unsafe_code)]

pub mod compress;
pub mod constants;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod padding;
pub mod vectors;
pub mod verify;

// Re-export primary types for ergonomic imports.
pub use compress::{compress_block, message_schedule, Block, HashState};
pub use constants::{BLOCK_LEN, DIGEST_LEN, HEX_DIGEST_LEN, INITIAL_STATE, ROUND_CONSTANTS};
pub use digest::Sha256Digest;
pub use error::Sha256Error;
pub use hasher::{sha256, sha256_hex, sha256_text};
pub use padding::{padded_len, PaddedMessage};
pub use vectors::{KnownAnswer, KNOWN_ANSWERS};
pub use verify::{verify, verify_bytes};
