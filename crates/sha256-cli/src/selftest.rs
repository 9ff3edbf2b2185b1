//! # Selftest Subcommand
//!
//! Recomputes the built-in known-answer vectors and reports each one. Also
//! exercises the verifier with a correct and a truncated digest.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use sha256_core::{sha256_text, verify, KnownAnswer, KNOWN_ANSWERS};

/// Sample message for the verifier round of the selftest.
const VERIFY_SAMPLE: &str = "Mensagem para calcular o hash";

/// Arguments for the `sha256 selftest` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SelftestArgs {
    /// Skip the one-million-byte vector.
    #[arg(long)]
    pub quick: bool,
}

/// Execute the selftest subcommand.
///
/// Returns exit code: 0 if every check passes, 1 otherwise.
pub fn run_selftest(args: &SelftestArgs, out: &mut impl Write) -> Result<u8> {
    let vectors: Vec<&KnownAnswer> = KNOWN_ANSWERS
        .iter()
        .filter(|kat| !args.quick || kat.input_len() <= 1024)
        .collect();

    let mut failures = 0usize;
    for kat in &vectors {
        if kat.check() {
            writeln!(out, "OK: {}", kat.name)?;
        } else {
            tracing::error!(vector = kat.name, "known-answer mismatch");
            writeln!(out, "FAIL: {}", kat.name)?;
            failures += 1;
        }
    }

    let digest = sha256_text(VERIFY_SAMPLE);
    let accepts = verify(VERIFY_SAMPLE, &digest);
    let rejects = !verify(VERIFY_SAMPLE, &digest[..16]);
    if accepts && rejects {
        writeln!(out, "OK: verify")?;
    } else {
        tracing::error!(accepts, rejects, "verifier self-check failed");
        writeln!(out, "FAIL: verify")?;
        failures += 1;
    }

    tracing::info!(checks = vectors.len() + 1, failures, "selftest complete");
    Ok(if failures == 0 { 0 } else { 1 })
}
