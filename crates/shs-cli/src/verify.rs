//! # Verify Subcommand
//!
//! Compares the digest of one message against an expected digest.
//! Exit status 0 on match, 1 on mismatch.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shs_core::Sha256Digest;

use crate::hash::hash_input;
use crate::input::Input;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Expected digest: 64 hex characters, optionally prefixed `sha256:`.
    pub expected: String,

    /// Text message to check.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// File to check. With neither text nor file, stdin is read.
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    verify_to(args, &mut out)
}

/// Verify and report to `out`. Returns the process exit code.
pub fn verify_to(args: &VerifyArgs, out: &mut impl Write) -> Result<u8> {
    let expected: Sha256Digest = args
        .expected
        .parse()
        .with_context(|| format!("invalid expected digest {:?}", args.expected))?;

    let input = match (&args.text, &args.file) {
        (Some(text), _) => Input::Text(text.clone()),
        (None, Some(path)) => Input::File(path.clone()),
        (None, None) => Input::Stdin,
    };
    let record = hash_input(&input)?;

    if record.digest == expected {
        writeln!(out, "OK: {}", record.input).context("failed to write output")?;
        Ok(0)
    } else {
        tracing::warn!(expected = %expected, actual = %record.digest, "digest mismatch");
        writeln!(out, "FAILED: {}", record.input).context("failed to write output")?;
        writeln!(out, "  expected: {expected}").context("failed to write output")?;
        writeln!(out, "  actual:   {}", record.digest).context("failed to write output")?;
        Ok(1)
    }
}
