//! # SHA-256 Digest Value
//!
//! Defines `Sha256Digest`, the 32-byte result of a SHA-256 computation.
//!
//! ## Rendering
//!
//! The canonical textual form is 64 lowercase hex characters, most
//! significant byte first. Every byte is rendered as two characters, so a
//! digest whose words begin with zero nibbles still renders at full length.
//!
//! ## Serde
//!
//! Digests serialize and deserialize as hex strings.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ShsError;
use crate::hex;

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Algorithm tag used by [`Sha256Digest::tagged()`].
pub const ALGORITHM: &str = "sha256";

/// A 256-bit SHA-256 message digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume the digest, returning its bytes.
    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Render the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Render the digest with its algorithm tag, e.g. `sha256:e3b0...b855`.
    pub fn tagged(&self) -> String {
        format!("{ALGORITHM}:{}", self.to_hex())
    }

    /// Parse a digest from a 64-character hex string.
    ///
    /// Surrounding whitespace is ignored and either case is accepted. A
    /// leading `sha256:` tag is also accepted so that [`tagged()`] output
    /// parses back.
    ///
    /// [`tagged()`]: Sha256Digest::tagged
    pub fn from_hex(hex: &str) -> Result<Self, ShsError> {
        let hex = hex.trim();
        let hex = hex
            .strip_prefix(ALGORITHM)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(hex);
        if hex.len() != DIGEST_LEN * 2 {
            return Err(ShsError::InvalidDigest(format!(
                "digest hex must be {} chars, got {}",
                DIGEST_LEN * 2,
                hex.len()
            )));
        }
        let bytes = hex::decode(hex)?;
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl From<[u8; DIGEST_LEN]> for Sha256Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Sha256Digest {
    type Err = ShsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sha256Digest({}...)", hex::prefix(&self.0))
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_HEX: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_hex_roundtrip() {
        let d = Sha256Digest::from_hex(EMPTY_HEX).unwrap();
        assert_eq!(d.to_hex(), EMPTY_HEX);
        assert_eq!(d.as_bytes()[0], 0xe3);
        assert_eq!(d.as_bytes()[31], 0x55);
    }

    #[test]
    fn test_leading_zero_bytes_keep_full_width() {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes[3] = 0x01;
        bytes[31] = 0x0f;
        let d = Sha256Digest::from_bytes(bytes);
        let hex = d.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("00000001"));
        assert!(hex.ends_with("0f"));
        assert_eq!(Sha256Digest::from_hex(&hex).unwrap(), d);
    }

    #[test]
    fn test_all_zero_digest() {
        let d = Sha256Digest::from_bytes([0u8; DIGEST_LEN]);
        assert_eq!(d.to_hex(), "0".repeat(64));
    }

    #[test]
    fn test_from_hex_accepts_uppercase_and_whitespace() {
        let d = Sha256Digest::from_hex(&format!("  {}\n", EMPTY_HEX.to_uppercase())).unwrap();
        assert_eq!(d.to_hex(), EMPTY_HEX);
    }

    #[test]
    fn test_tagged_roundtrip() {
        let d = Sha256Digest::from_hex(EMPTY_HEX).unwrap();
        let tagged = d.tagged();
        assert_eq!(tagged.len(), 7 + 64); // "sha256:" + 64 hex chars
        assert!(tagged.starts_with("sha256:"));
        assert_eq!(tagged.parse::<Sha256Digest>().unwrap(), d);
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert!(matches!(
            Sha256Digest::from_hex("abcd"),
            Err(ShsError::InvalidDigest(_))
        ));
        assert!(Sha256Digest::from_hex(&format!("{EMPTY_HEX}00")).is_err());
    }

    #[test]
    fn test_from_hex_invalid_characters() {
        let bad = "zz".repeat(32);
        assert!(matches!(
            Sha256Digest::from_hex(&bad),
            Err(ShsError::Hex(_))
        ));
    }

    #[test]
    fn test_display_is_plain_hex() {
        let d = Sha256Digest::from_hex(EMPTY_HEX).unwrap();
        assert_eq!(d.to_string(), EMPTY_HEX);
    }

    #[test]
    fn test_debug_shows_prefix() {
        let d = Sha256Digest::from_hex(EMPTY_HEX).unwrap();
        assert_eq!(format!("{d:?}"), "Sha256Digest(e3b0c442...)");
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let d = Sha256Digest::from_hex(EMPTY_HEX).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{EMPTY_HEX}\""));
        let d2: Sha256Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn test_serde_rejects_short_string() {
        let result: Result<Sha256Digest, _> = serde_json::from_str("\"abcd\"");
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Hex rendering is always 64 chars and parses back to the same bytes.
        #[test]
        fn hex_render_roundtrip(bytes in any::<[u8; DIGEST_LEN]>()) {
            let d = Sha256Digest::from_bytes(bytes);
            let hex = d.to_hex();
            prop_assert_eq!(hex.len(), 64);
            prop_assert_eq!(Sha256Digest::from_hex(&hex).unwrap(), d);
        }
    }
}
