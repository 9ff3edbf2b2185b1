//! # sha256-cli — SHA-256 Command-Line Interface
//!
//! Provides the `sha256` binary, a thin wrapper over `sha256-core`.
//!
//! ## Subcommands
//!
//! - `sha256 digest` — print the digest of TEXT, a file, or stdin.
//! - `sha256 verify` — compare a candidate digest and print `true`/`false`.
//! - `sha256 selftest` — recompute the built-in known-answer vectors.
//!
//! ```bash
//! sha256 digest abc
//! sha256 digest --file release.tar.gz --json
//! printf abc | sha256 verify --digest ba7816bf...15ad
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from hashing; handlers delegate to
//!   `sha256-core` and contain no digest logic.
//! - Handlers write results to the supplied writer and return an exit code;
//!   diagnostics go through `tracing` to stderr.

pub mod digest;
pub mod input;
pub mod selftest;
pub mod verify;
