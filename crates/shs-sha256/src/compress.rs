//! # Compression Function (FIPS 180-4 §6.2.2 steps 2–4)
//!
//! Folds one block into the running hash state. Eight working variables are
//! seeded from the state, mutated across 64 rounds, then added back into the
//! state word by word. All arithmetic wraps modulo 2^32.

use crate::block::Block;
use crate::constants::{K, ROUNDS};
use crate::schedule::{expand, MessageSchedule};
use crate::state::HashState;

/// Ch(x, y, z) = (x ∧ y) ⊕ (¬x ∧ z)
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj(x, y, z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// One round over the working variables `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
fn round(v: [u32; 8], k: u32, w: u32) -> [u32; 8] {
    let [a, b, c, d, e, f, g, h] = v;
    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
    [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g]
}

/// Run the 64 rounds over an already-expanded schedule and fold the result
/// into `state`.
pub fn compress_schedule(state: HashState, schedule: &MessageSchedule) -> HashState {
    let mut vars = *state.words();
    for (&k, &w) in K.iter().zip(schedule.words().iter()).take(ROUNDS) {
        vars = round(vars, k, w);
    }
    state.fold(&vars)
}

/// Consume one block and the current state, returning the next state.
pub fn compress(state: HashState, block: &Block) -> HashState {
    compress_schedule(state, &expand(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BLOCK_WORDS;

    fn abc_block() -> Block {
        let mut words = [0u32; BLOCK_WORDS];
        words[0] = 0x6162_6380;
        words[15] = 0x0000_0018;
        Block::from_words(words)
    }

    #[test]
    fn test_ch_selects_by_e() {
        assert_eq!(ch(0xffff_0000, 0xaaaa_aaaa, 0x5555_5555), 0xaaaa_5555);
    }

    #[test]
    fn test_maj_is_bitwise_majority() {
        assert_eq!(maj(0xff00_ff00, 0xf0f0_f0f0, 0x0000_ffff), 0xf000_fff0);
    }

    #[test]
    fn test_big_sigmas_rotate() {
        assert_eq!(big_sigma0(1), (1 << 30) ^ (1 << 19) ^ (1 << 10));
        assert_eq!(big_sigma1(1), (1 << 26) ^ (1 << 21) ^ (1 << 7));
    }

    #[test]
    fn test_first_round_abc() {
        // FIPS 180-2 Appendix B.1, t = 0.
        let schedule = expand(&abc_block());
        let v = round(*HashState::initial().words(), K[0], schedule.words()[0]);
        assert_eq!(
            v,
            [
                0x5d6a_ebcd,
                0x6a09_e667,
                0xbb67_ae85,
                0x3c6e_f372,
                0xfa2a_4622,
                0x510e_527f,
                0x9b05_688c,
                0x1f83_d9ab
            ]
        );
    }

    #[test]
    fn test_single_block_abc_state() {
        let next = compress(HashState::initial(), &abc_block());
        assert_eq!(
            next.words(),
            &[
                0xba78_16bf,
                0x8f01_cfea,
                0x4141_40de,
                0x5dae_2223,
                0xb003_61a3,
                0x9617_7a9c,
                0xb410_ff61,
                0xf200_15ad
            ]
        );
    }

    #[test]
    fn test_compress_depends_on_prior_state() {
        let block = abc_block();
        let once = compress(HashState::initial(), &block);
        let twice = compress(once, &block);
        assert_ne!(once, twice);
    }
}
