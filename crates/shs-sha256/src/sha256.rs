//! # SHA-256 Digest Computation
//!
//! Composes the pipeline: pad → decompose → expand → compress → finalize.
//! Each call owns all of its intermediate state, so concurrent calls on
//! different inputs share nothing but the read-only constants.
//!
//! ## Length Precondition
//!
//! FIPS 180-4 defines SHA-256 for messages shorter than 2^64 bits.
//! [`sha256()`] is total and encodes the bit length modulo 2^64;
//! [`try_sha256()`] rejects longer messages with
//! [`ShsError::LengthOverflow`].

use shs_core::{ShsError, Sha256Digest};

use crate::block::blocks;
use crate::compress::compress;
use crate::padding::PaddedMessage;
use crate::state::HashState;

/// Compute the SHA-256 digest of `message`.
pub fn sha256(message: &[u8]) -> Sha256Digest {
    digest_padded(&PaddedMessage::new(message))
}

/// Compute the SHA-256 digest of `message`, enforcing the length precondition.
///
/// # Errors
///
/// Returns [`ShsError::LengthOverflow`] if the message is 2^61 bytes or longer.
pub fn try_sha256(message: &[u8]) -> Result<Sha256Digest, ShsError> {
    Ok(digest_padded(&PaddedMessage::try_new(message)?))
}

/// Compute the SHA-256 digest of a string's UTF-8 bytes.
pub fn sha256_str(text: &str) -> Sha256Digest {
    sha256(text.as_bytes())
}

/// Compute a SHA-256 hex string (64 lowercase characters).
///
/// Convenience wrapper around [`sha256()`] for contexts that need the
/// digest as text.
pub fn sha256_hex(message: &[u8]) -> String {
    sha256(message).to_hex()
}

/// Hash an already padded message.
pub fn digest_padded(padded: &PaddedMessage) -> Sha256Digest {
    blocks(padded)
        .fold(HashState::initial(), |state, block| compress(state, &block))
        .finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            sha256(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_str_matches_bytes() {
        assert_eq!(sha256_str("abc"), sha256(b"abc"));
        assert_eq!(sha256_str("héllo"), sha256("héllo".as_bytes()));
    }

    #[test]
    fn test_try_sha256_matches_sha256() {
        let msg = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(try_sha256(msg).unwrap(), sha256(msg));
    }

    #[test]
    fn test_deterministic() {
        let msg = vec![0x5au8; 1000];
        assert_eq!(sha256(&msg), sha256(&msg));
    }

    #[test]
    fn test_single_bit_flip_changes_digest() {
        let msg = b"abc".to_vec();
        let base = sha256(&msg);
        for byte in 0..msg.len() {
            for bit in 0..8 {
                let mut flipped = msg.clone();
                flipped[byte] ^= 1 << bit;
                assert_ne!(sha256(&flipped), base, "byte {byte} bit {bit}");
            }
        }
    }

    #[test]
    fn test_trailing_zero_byte_changes_digest() {
        // Same padded prefix, different length field.
        assert_ne!(sha256(b"abc"), sha256(b"abc\0"));
    }

    #[test]
    fn test_digest_padded_matches_sha256() {
        let msg = b"hello world";
        assert_eq!(digest_padded(&PaddedMessage::new(msg)), sha256(msg));
    }
}
