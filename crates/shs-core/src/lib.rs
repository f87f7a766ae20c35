//! # shs-core — Foundational Types for the SHS Stack
//!
//! This crate is the leaf of the SHS Stack. It defines the value types that
//! the SHA-256 implementation produces and the errors it reports. Every
//! other crate in the workspace depends on `shs-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`Sha256Digest` newtype.** A digest is exactly 32 bytes. No bare
//!    `Vec<u8>` or `String` digests cross crate boundaries.
//!
//! 2. **Full-width hex.** Every byte renders as two lowercase hex characters,
//!    so digests always render as 64 characters.
//!
//! 3. **Errors are typed.** `ShsError` is a `thiserror` enum. The only
//!    computation error is `LengthOverflow`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shs-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O and no logging. Host programs own both.

pub mod digest;
pub mod error;
pub mod hex;

// Re-export primary types for ergonomic imports.
pub use digest::{Sha256Digest, ALGORITHM, DIGEST_LEN};
pub use error::{HexError, ShsError};
