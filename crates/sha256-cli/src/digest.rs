//! # Digest Subcommand
//!
//! Prints the SHA-256 digest of a message, as bare hex or as a JSON record.

use std::io::{Read, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use sha256_core::{sha256, Sha256Digest};

use crate::input::InputArgs;

/// Arguments for the `sha256 digest` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct DigestArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit a JSON object instead of the bare hex digest.
    #[arg(long)]
    pub json: bool,
}

/// JSON output record.
#[derive(Debug, Serialize)]
struct DigestReport {
    algorithm: &'static str,
    digest: Sha256Digest,
    bytes: usize,
}

/// Execute the digest subcommand. Always returns exit code 0 on success.
pub fn run_digest(args: &DigestArgs, stdin: impl Read, out: &mut impl Write) -> Result<u8> {
    let (source, message) = args.input.read_message(stdin)?;
    let digest = sha256(&message);

    tracing::debug!(?source, bytes = message.len(), %digest, "computed digest");

    if args.json {
        let report = DigestReport {
            algorithm: "sha256",
            digest,
            bytes: message.len(),
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "{digest}")?;
    }

    Ok(0)
}
