//! # Known-Answer Vectors
//!
//! Standard SHA-256 test vectors (FIPS 180-2 Appendix B and the NIST
//! example set), used by the `selftest` command and by the test suites.

use crate::hasher::sha256_hex;

/// One known-answer test: `message` repeated `repeat` times hashes to `digest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Short label for reports.
    pub name: &'static str,
    /// Message fragment.
    pub message: &'static [u8],
    /// How many times the fragment is repeated to form the input.
    pub repeat: usize,
    /// Expected lowercase hex digest.
    pub digest: &'static str,
}

impl KnownAnswer {
    /// The full input bytes.
    pub fn input(&self) -> Vec<u8> {
        self.message.repeat(self.repeat)
    }

    /// Length of the full input in bytes.
    pub fn input_len(&self) -> usize {
        self.message.len() * self.repeat
    }

    /// Recompute the digest and compare.
    pub fn check(&self) -> bool {
        sha256_hex(&self.input()) == self.digest
    }
}

/// The built-in vector set.
pub static KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: b"",
        repeat: 1,
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        message: b"abc",
        repeat: 1,
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "448-bit",
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        repeat: 1,
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "896-bit",
        message: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        repeat: 1,
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "million-a",
        message: b"a",
        repeat: 1_000_000,
        digest: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
];
