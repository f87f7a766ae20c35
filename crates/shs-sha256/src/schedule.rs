//! # Message Schedule Expansion (FIPS 180-4 §6.2.2 step 1)
//!
//! Extends a block's sixteen words into the 64-word schedule consumed one
//! word per compression round.

use crate::block::{Block, BLOCK_WORDS};
use crate::constants::ROUNDS;

/// The 64-word message schedule `W[0..63]` for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSchedule([u32; ROUNDS]);

impl MessageSchedule {
    /// The schedule words in round order.
    pub fn words(&self) -> &[u32; ROUNDS] {
        &self.0
    }
}

/// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand a block into its message schedule.
pub fn expand(block: &Block) -> MessageSchedule {
    let mut w = [0u32; ROUNDS];
    w[..BLOCK_WORDS].copy_from_slice(block.words());
    for j in BLOCK_WORDS..ROUNDS {
        w[j] = small_sigma1(w[j - 2])
            .wrapping_add(w[j - 7])
            .wrapping_add(small_sigma0(w[j - 15]))
            .wrapping_add(w[j - 16]);
    }
    MessageSchedule(w)
}
