//! # shs-sha256 — SHA-256 (FIPS 180-4)
//!
//! Computes the SHA-256 digest of a byte sequence held entirely in memory.
//! The computation is split into the four stages of the standard, each in
//! its own module:
//!
//! - **Padding** (`padding`) — append the `1` bit, zero-fill, append the
//!   64-bit big-endian bit length. Produces `PaddedMessage`.
//! - **Block decomposition** (`block`) — 512-bit blocks of sixteen
//!   big-endian words.
//! - **Message schedule** (`schedule`) — expand 16 words to 64 with σ0/σ1.
//! - **Compression** (`compress`) — 64 rounds per block folded into the
//!   running `HashState`, finalized to 32 bytes in `state`.
//!
//! ## Crate Policy
//!
//! - Depends only on `shs-core` internally.
//! - No streaming API: every call hashes one complete message.
//! - All 32-bit additions use `wrapping_add`.
//! - Tests check against published FIPS vectors and against the `sha2`
//!   crate as an independent oracle.
//! - `unsafe` prohibited.

pub mod block;
pub mod compress;
pub mod constants;
pub mod padding;
pub mod schedule;
pub mod sha256;
pub mod state;
pub mod vectors;

pub use block::{blocks, Block};
pub use compress::compress;
pub use padding::{pad, PaddedMessage};
pub use schedule::{expand, MessageSchedule};
pub use sha256::{sha256, sha256_hex, sha256_str, try_sha256};
pub use shs_core::{ShsError, Sha256Digest};
pub use state::{finalize, HashState};
