//! # Errors
//!
//! SHA-256 is total over messages shorter than 2^64 bits, so the only
//! computation error is `LengthOverflow`. The remaining variants come from
//! reading digests back from text. Hex errors carry the offending position
//! and character so callers can point at the bad input.
//!
//! The library crates do no I/O; host programs report their own I/O
//! failures.

use thiserror::Error;

/// Top-level error type for the SHS Stack.
#[derive(Error, Debug)]
pub enum ShsError {
    /// The message is too long for its bit length to be encoded in the
    /// 64-bit length field (length ≥ 2^61 bytes).
    #[error("message of {bytes} bytes exceeds the SHA-256 limit of 2^64 - 1 bits")]
    LengthOverflow {
        /// Length of the rejected message in bytes.
        bytes: u64,
    },

    /// A string could not be interpreted as a SHA-256 digest.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    /// Hex decoding failed.
    #[error("hex error: {0}")]
    Hex(#[from] HexError),
}

/// Error decoding a hexadecimal string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Hex strings encode whole bytes, so the length must be even.
    #[error("hex string must have even length, got {0}")]
    OddLength(usize),

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidCharacter {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },
}
