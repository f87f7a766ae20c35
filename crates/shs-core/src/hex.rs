//! # Hex Codec
//!
//! Lowercase hexadecimal rendering and case-insensitive parsing of byte
//! strings. Every byte renders as exactly two characters, so leading zero
//! nibbles are never dropped.

use crate::error::HexError;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Render bytes as lowercase hex, two characters per byte.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(ALPHABET[usize::from(b >> 4)] as char);
        out.push(ALPHABET[usize::from(b & 0x0f)] as char);
    }
    out
}

/// Decode a hex string (either case) into bytes.
///
/// # Errors
///
/// Returns [`HexError::OddLength`] if the string has an odd number of
/// bytes and [`HexError::InvalidCharacter`] for anything outside
/// `[0-9a-fA-F]`.
pub fn decode(hex: &str) -> Result<Vec<u8>, HexError> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength(raw.len()));
    }
    raw.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let hi = nibble(hex, i * 2, pair[0])?;
            let lo = nibble(hex, i * 2 + 1, pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

/// Render the first four bytes of a value, used by `Debug` impls.
pub(crate) fn prefix(bytes: &[u8]) -> String {
    encode(&bytes[..bytes.len().min(4)])
}

fn nibble(hex: &str, position: usize, byte: u8) -> Result<u8, HexError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(HexError::InvalidCharacter {
            position,
            // Report the whole character, not the UTF-8 fragment.
            character: hex
                .get(position..)
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        }),
    }
}
