//! # Error Types
//!
//! Structured errors for the few fallible entry points in `sha256-core`.
//! Hashing itself cannot fail; errors only arise when a caller hands the
//! compressor a slice of the wrong length or parses a digest from text.

use thiserror::Error;

/// Errors from SHA-256 operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sha256Error {
    /// A block passed to the compressor was not exactly 64 bytes long.
    #[error("invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength {
        /// Required block length in bytes.
        expected: usize,
        /// Length of the slice that was supplied.
        actual: usize,
    },

    /// Text could not be parsed as a 64-character hex digest.
    #[error("invalid SHA-256 digest: {0}")]
    InvalidDigest(String),
}
