//! # Hash Subcommand
//!
//! Hashes each input and prints one line per message, in argument order.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use shs_core::Sha256Digest;

use crate::input::{collect_inputs, Input};

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Text messages to hash (UTF-8 bytes).
    pub texts: Vec<String>,

    /// Files to hash. May be repeated.
    #[arg(long = "file", short = 'f')]
    pub files: Vec<PathBuf>,

    /// Print `sha256:<hex>` instead of bare hex.
    #[arg(long)]
    pub tagged: bool,

    /// Print one JSON object per line.
    #[arg(long, conflicts_with = "tagged")]
    pub json: bool,
}

/// One hashed message, as emitted with `--json`.
#[derive(Debug, Serialize)]
pub struct HashRecord {
    /// Input label (quoted text, file path, or `-`).
    pub input: String,
    /// Hex digest.
    pub digest: Sha256Digest,
    /// Message length in bytes.
    pub bytes: usize,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    hash_to(args, &mut out)?;
    Ok(0)
}

/// Hash every input named by `args`, writing result lines to `out`.
pub fn hash_to(args: &HashArgs, out: &mut impl Write) -> Result<()> {
    for input in collect_inputs(&args.texts, &args.files) {
        let record = hash_input(&input)?;
        let line = if args.json {
            serde_json::to_string(&record).context("failed to serialize hash record")?
        } else if args.tagged {
            format!("{}  {}", record.digest.tagged(), record.input)
        } else {
            format!("{}  {}", record.digest, record.input)
        };
        writeln!(out, "{line}").context("failed to write output")?;
    }
    Ok(())
}

/// Read and hash one input.
pub fn hash_input(input: &Input) -> Result<HashRecord> {
    let message = input.read()?;
    let digest = shs_sha256::sha256(&message);
    tracing::debug!(input = %input.label(), bytes = message.len(), "hashed message");
    tracing::info!(%digest, "sha256 {}", input.label());
    Ok(HashRecord {
        input: input.label(),
        digest,
        bytes: message.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(texts: &[&str]) -> HashArgs {
        HashArgs {
            texts: texts.iter().map(|s| s.to_string()).collect(),
            files: Vec::new(),
            tagged: false,
            json: false,
        }
    }

    fn render(args: &HashArgs) -> String {
        let mut buf = Vec::new();
        hash_to(args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(
            render(&args(&["abc"])),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  \"abc\"\n"
        );
    }

    #[test]
    fn test_multiple_texts_in_order() {
        let out = render(&args(&["", "abc"]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("e3b0c442"));
        assert!(lines[1].starts_with("ba7816bf"));
    }

    #[test]
    fn test_tagged_output() {
        let mut a = args(&["abc"]);
        a.tagged = true;
        assert!(render(&a).starts_with("sha256:ba7816bf"));
    }

    #[test]
    fn test_json_output() {
        let mut a = args(&["abc"]);
        a.json = true;
        let out = render(&a);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["input"], "\"abc\"");
        assert_eq!(
            value["digest"],
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(value["bytes"], 3);
    }

    #[test]
    fn test_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.bin");
        std::fs::write(&path, b"abc").unwrap();
        let a = HashArgs {
            texts: Vec::new(),
            files: vec![path.clone()],
            tagged: false,
            json: false,
        };
        let out = render(&a);
        assert!(out.starts_with("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  "));
        assert!(out.trim_end().ends_with(&path.display().to_string()));
    }
}
