//! # Hash State and Finalization
//!
//! `HashState` is the running eight-word digest `H`. It changes once per
//! block, when the compression function folds its working variables back
//! in; rounds never touch it directly.

use shs_core::{Sha256Digest, DIGEST_LEN};

use crate::constants::H0;

/// The running SHA-256 hash state `H[0..7]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState([u32; 8]);

impl HashState {
    /// The FIPS 180-4 initial hash value `H(0)`.
    pub fn initial() -> Self {
        Self(H0)
    }

    /// Build a state from explicit words.
    pub fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    /// The state words `H[0..7]`.
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// `H[i] + v[i] mod 2^32` for each word, in order.
    pub fn fold(self, working: &[u32; 8]) -> Self {
        let mut out = self.0;
        for (h, &v) in out.iter_mut().zip(working.iter()) {
            *h = h.wrapping_add(v);
        }
        Self(out)
    }

    /// Concatenate the state words big-endian into the 32-byte digest.
    pub fn finalize(self) -> Sha256Digest {
        finalize(self)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Render a final state as the 32-byte digest, each word most significant byte first.
pub fn finalize(state: HashState) -> Sha256Digest {
    let mut bytes = [0u8; DIGEST_LEN];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(state.0.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    Sha256Digest::from_bytes(bytes)
}
