//! # sha256 CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sha256_cli::digest::{run_digest, DigestArgs};
use sha256_cli::selftest::{run_selftest, SelftestArgs};
use sha256_cli::verify::{run_verify, VerifyArgs};

/// Compute and verify SHA-256 digests.
#[derive(Parser, Debug)]
#[command(name = "sha256", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of TEXT, a file, or standard input.
    Digest(DigestArgs),

    /// Check a digest against TEXT, a file, or standard input.
    Verify(VerifyArgs),

    /// Recompute the built-in known-answer vectors.
    Selftest(SelftestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sha256 CLI starting");

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Digest(args) => run_digest(&args, stdin, &mut stdout),
        Commands::Verify(args) => run_verify(&args, stdin, &mut stdout),
        Commands::Selftest(args) => run_selftest(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
