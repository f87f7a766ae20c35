//! # shs-cli — SHS Stack Command-Line Interface
//!
//! Provides the `shs` binary, a thin host program around `shs-sha256`.
//! All I/O lives here; the library crates never touch files or streams.
//!
//! ## Subcommands
//!
//! - `shs hash` — hash text arguments, files, or stdin
//! - `shs verify` — compare a message against an expected digest
//! - `shs selftest` — run the FIPS 180-4 known-answer vectors
//!
//! ```bash
//! shs hash abc
//! shs hash --file firmware.bin --tagged
//! echo -n abc | shs verify ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from hashing; handlers delegate to
//!   `shs-sha256`.
//! - Handlers return the process exit code; errors propagate as `anyhow`.

pub mod hash;
pub mod input;
pub mod selftest;
pub mod verify;
