//! # Known-Answer Vectors
//!
//! The FIPS 180-4 example messages (NIST CSRC "SHA256.pdf") with their
//! published digests, plus a runner used by the `shs selftest` command.

use shs_core::Sha256Digest;

use crate::sha256::sha256;

/// How a vector's message is built.
#[derive(Debug, Clone, Copy)]
pub enum VectorMessage {
    /// The message bytes, verbatim.
    Literal(&'static [u8]),
    /// `count` copies of `byte`.
    Repeat {
        /// Byte value to repeat.
        byte: u8,
        /// Number of repetitions.
        count: usize,
    },
}

impl VectorMessage {
    /// Materialize the message bytes.
    pub fn bytes(&self) -> Vec<u8> {
        match *self {
            Self::Literal(bytes) => bytes.to_vec(),
            Self::Repeat { byte, count } => vec![byte; count],
        }
    }
}

/// A message with its published SHA-256 digest.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Short label for reports.
    pub name: &'static str,
    /// Message to hash.
    pub message: VectorMessage,
    /// Expected digest, lowercase hex.
    pub expected_hex: &'static str,
}

/// Outcome of checking one vector.
#[derive(Debug, Clone)]
pub struct VectorOutcome {
    /// Label of the vector.
    pub name: &'static str,
    /// Length of the message in bytes.
    pub message_len: usize,
    /// Digest computed by this implementation.
    pub actual: Sha256Digest,
    /// Published digest.
    pub expected_hex: &'static str,
}

impl VectorOutcome {
    /// True when the computed digest equals the published one.
    pub fn passed(&self) -> bool {
        self.actual.to_hex() == self.expected_hex
    }
}

/// FIPS 180-4 example vectors.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: VectorMessage::Literal(b""),
        expected_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        message: VectorMessage::Literal(b"abc"),
        expected_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "448-bit two-block",
        message: VectorMessage::Literal(
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        ),
        expected_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "896-bit",
        message: VectorMessage::Literal(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        expected_hex: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "one million 'a'",
        message: VectorMessage::Repeat {
            byte: b'a',
            count: 1_000_000,
        },
        expected_hex: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
];

/// Hash one known-answer message.
pub fn check(vector: &KnownAnswer) -> VectorOutcome {
    let message = vector.message.bytes();
    VectorOutcome {
        name: vector.name,
        message_len: message.len(),
        actual: sha256(&message),
        expected_hex: vector.expected_hex,
    }
}

/// Check every built-in vector.
pub fn run_all() -> Vec<VectorOutcome> {
    KNOWN_ANSWERS.iter().map(check).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_known_answers_pass() {
        for outcome in run_all() {
            assert!(
                outcome.passed(),
                "{}: got {}, expected {}",
                outcome.name,
                outcome.actual,
                outcome.expected_hex
            );
        }
    }

    #[test]
    fn test_vector_message_lengths() {
        let lens: Vec<usize> = KNOWN_ANSWERS.iter().map(|v| v.message.bytes().len()).collect();
        assert_eq!(lens, vec![0, 3, 56, 112, 1_000_000]);
    }

    #[test]
    fn test_expected_hex_is_canonical() {
        for v in KNOWN_ANSWERS {
            let parsed = Sha256Digest::from_hex(v.expected_hex).unwrap();
            assert_eq!(parsed.to_hex(), v.expected_hex);
        }
    }
}
