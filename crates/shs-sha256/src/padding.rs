//! # Padding & Framing (FIPS 180-4 §5.1.1)
//!
//! Produces `PaddedMessage`, the only input type accepted by block
//! decomposition.
//!
//! ## Invariant
//!
//! The inner buffer is private and the constructors always apply the full
//! padding rule, so every `PaddedMessage` has a length that is a non-zero
//! multiple of 64 bytes and ends with the big-endian bit length of the
//! original message.

use shs_core::ShsError;

use crate::constants::BLOCK_LEN;

/// Width of the trailing length field, in bytes.
const LENGTH_FIELD_LEN: usize = 8;

/// Marker byte carrying the single appended `1` bit.
const MARKER: u8 = 0x80;

/// A message after padding and length framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage(Vec<u8>);

impl PaddedMessage {
    /// Pad a message, encoding its bit length modulo 2^64.
    ///
    /// Messages of 2^61 bytes or more violate the FIPS 180-4 length
    /// precondition; use [`PaddedMessage::try_new`] to reject them instead.
    pub fn new(message: &[u8]) -> Self {
        let bit_len = (message.len() as u64).wrapping_mul(8);
        Self::frame(message, bit_len)
    }

    /// Pad a message, rejecting lengths that do not fit the 64-bit length field.
    ///
    /// # Errors
    ///
    /// Returns [`ShsError::LengthOverflow`] if `8 * message.len()` overflows `u64`.
    pub fn try_new(message: &[u8]) -> Result<Self, ShsError> {
        let bit_len = bit_length(message)?;
        Ok(Self::frame(message, bit_len))
    }

    fn frame(message: &[u8], bit_len: u64) -> Self {
        let total = padded_len(message.len());
        let mut buf = Vec::with_capacity(total);
        buf.extend_from_slice(message);
        buf.push(MARKER);
        buf.resize(total - LENGTH_FIELD_LEN, 0);
        buf.extend_from_slice(&bit_len.to_be_bytes());
        Self(buf)
    }

    /// Access the padded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the padded length in bytes (always a multiple of 64).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: even the empty message pads to one full block.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of 512-bit blocks in the padded message.
    pub fn block_count(&self) -> usize {
        self.0.len() / BLOCK_LEN
    }

    /// The length field as written in the final eight bytes.
    pub fn encoded_bit_length(&self) -> u64 {
        let mut field = [0u8; LENGTH_FIELD_LEN];
        field.copy_from_slice(&self.0[self.0.len() - LENGTH_FIELD_LEN..]);
        u64::from_be_bytes(field)
    }
}

/// Pad a message per FIPS 180-4 §5.1.1.
pub fn pad(message: &[u8]) -> PaddedMessage {
    PaddedMessage::new(message)
}

/// Length of `message` in bits.
///
/// # Errors
///
/// Returns [`ShsError::LengthOverflow`] when the bit length needs more than
/// 64 bits.
pub fn bit_length(message: &[u8]) -> Result<u64, ShsError> {
    bit_length_of(message.len() as u64)
}

/// Bit length of a message of `bytes` bytes.
///
/// # Errors
///
/// Returns [`ShsError::LengthOverflow`] for `bytes ≥ 2^61`.
pub fn bit_length_of(bytes: u64) -> Result<u64, ShsError> {
    bytes
        .checked_mul(8)
        .ok_or(ShsError::LengthOverflow { bytes })
}

/// Smallest `z ≥ 0` with `bit_len + 1 + z + 64 ≡ 0 (mod 512)`.
pub fn zero_pad_bits(bit_len: u64) -> u64 {
    // Work mod 512 so `bit_len + 65` cannot overflow.
    (512 - (bit_len % 512 + 65) % 512) % 512
}

/// Padded length in bytes for a message of `byte_len` bytes: the smallest
/// multiple of 64 that is at least `byte_len + 9`.
pub fn padded_len(byte_len: usize) -> usize {
    let unpadded = byte_len + 1 + LENGTH_FIELD_LEN;
    unpadded.div_ceil(BLOCK_LEN) * BLOCK_LEN
}
