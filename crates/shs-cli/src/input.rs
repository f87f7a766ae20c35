//! # Message Inputs
//!
//! Resolves the messages a subcommand should hash: literal text
//! arguments, files, or standard input. Text is hashed as its UTF-8 bytes;
//! files and stdin are hashed as raw bytes.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// One message source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A literal text argument.
    Text(String),
    /// A file read in full.
    File(PathBuf),
    /// Standard input read to EOF.
    Stdin,
}

impl Input {
    /// Label used in output lines: the text quoted, the file path, or `-`.
    pub fn label(&self) -> String {
        match self {
            Self::Text(text) => format!("{text:?}"),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "-".to_string(),
        }
    }

    /// Load the message bytes.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Text(text) => Ok(text.as_bytes().to_vec()),
            Self::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display())),
            Self::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

/// Collect inputs in argument order: texts first, then files. With neither,
/// fall back to stdin.
pub fn collect_inputs(texts: &[String], files: &[PathBuf]) -> Vec<Input> {
    let mut inputs: Vec<Input> = texts
        .iter()
        .cloned()
        .map(Input::Text)
        .chain(files.iter().cloned().map(Input::File))
        .collect();
    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }
    inputs
}
