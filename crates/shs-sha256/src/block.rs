//! # Block Decomposition (FIPS 180-4 §5.2.1)
//!
//! Splits a `PaddedMessage` into 512-bit blocks of sixteen big-endian words.
//! Blocks are yielded in message order; compression chains state from one
//! block to the next, so that order is significant.

use crate::constants::BLOCK_LEN;
use crate::padding::PaddedMessage;

/// Words per block.
pub const BLOCK_WORDS: usize = 16;

/// One 512-bit message block as sixteen 32-bit words, most significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block([u32; BLOCK_WORDS]);

impl Block {
    /// Interpret 64 bytes as sixteen big-endian words.
    pub fn from_bytes(bytes: &[u8; BLOCK_LEN]) -> Self {
        let mut words = [0u32; BLOCK_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    /// Build a block directly from its words.
    pub fn from_words(words: [u32; BLOCK_WORDS]) -> Self {
        Self(words)
    }

    /// The block's words in order.
    pub fn words(&self) -> &[u32; BLOCK_WORDS] {
        &self.0
    }
}

/// Decompose a padded message into its blocks, in order.
pub fn blocks(padded: &PaddedMessage) -> impl Iterator<Item = Block> + '_ {
    padded.as_bytes().chunks_exact(BLOCK_LEN).map(|chunk| {
        let mut bytes = [0u8; BLOCK_LEN];
        bytes.copy_from_slice(chunk);
        Block::from_bytes(&bytes)
    })
}
