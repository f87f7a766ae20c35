//! # shs CLI Entry Point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shs_cli::hash::{run_hash, HashArgs};
use shs_cli::selftest::{run_selftest, SelftestArgs};
use shs_cli::verify::{run_verify, VerifyArgs};

/// SHS — SHA-256 message digests (FIPS 180-4).
#[derive(Parser, Debug)]
#[command(name = "shs", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash text, files, or stdin.
    Hash(HashArgs),

    /// Check a message against an expected digest.
    Verify(VerifyArgs),

    /// Run the built-in FIPS 180-4 known-answer vectors.
    Selftest(SelftestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args),
        Commands::Verify(args) => run_verify(&args),
        Commands::Selftest(args) => run_selftest(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
