//! # Verify Subcommand
//!
//! Checks a candidate digest against a message and prints `true` or `false`.
//! The candidate is compared exactly; uppercase hex does not match.

use std::io::{Read, Write};

use anyhow::Result;
use clap::Args;

use sha256_core::verify_bytes;

use crate::input::InputArgs;

/// Arguments for the `sha256 verify` subcommand.
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Expected lowercase hex digest.
    #[arg(long, short, value_name = "HEX")]
    pub digest: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 if the digest matches, 1 if it does not.
pub fn run_verify(args: &VerifyArgs, stdin: impl Read, out: &mut impl Write) -> Result<u8> {
    let (source, message) = args.input.read_message(stdin)?;
    let matched = verify_bytes(&message, &args.digest);

    tracing::info!(?source, bytes = message.len(), matched, "verified digest");

    writeln!(out, "{matched}")?;
    Ok(if matched { 0 } else { 1 })
}
