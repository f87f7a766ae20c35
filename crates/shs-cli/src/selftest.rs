//! # Selftest Subcommand
//!
//! Runs the built-in FIPS 180-4 known-answer vectors.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use shs_sha256::vectors::{run_all, VectorOutcome};

/// Arguments for the selftest subcommand.
#[derive(Args, Debug)]
pub struct SelftestArgs {
    /// Print only the summary line.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Execute the selftest subcommand.
pub fn run_selftest(args: &SelftestArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(&run_all(), args.quiet, &mut out)
}

/// Write a report for `outcomes`. Returns 0 when every vector passed.
pub fn report(outcomes: &[VectorOutcome], quiet: bool, out: &mut impl Write) -> Result<u8> {
    let mut failed = 0usize;
    for outcome in outcomes {
        let status = if outcome.passed() { "PASS" } else { "FAIL" };
        if !outcome.passed() {
            failed += 1;
            tracing::error!(
                vector = outcome.name,
                expected = outcome.expected_hex,
                actual = %outcome.actual,
                "known-answer vector failed"
            );
        }
        if !quiet {
            writeln!(
                out,
                "  {status}  {} ({} bytes)",
                outcome.name, outcome.message_len
            )
            .context("failed to write output")?;
        }
    }
    writeln!(
        out,
        "selftest: {} passed, {failed} failed",
        outcomes.len() - failed
    )
    .context("failed to write output")?;
    Ok(u8::from(failed > 0))
}
