//! The digest value type shared by all five algorithms: a fixed-length word array with hex
//! encoding and decoding, word-wise equality, lexicographic ordering and an all-zero null
//! sentinel. Digests are plain values; once a driver has produced one it is never mutated again.

use std::fmt;

use crate::word::Word;

/// digest of a SHA-1 computation, 160 bits
pub type Sha1Digest = Digest<u32, 5>;

/// digest of a SHA-224 computation, 224 bits
pub type Sha224Digest = Digest<u32, 7>;

/// digest of a SHA-256 computation, 256 bits
pub type Sha256Digest = Digest<u32, 8>;

/// digest of a SHA-384 computation, 384 bits
pub type Sha384Digest = Digest<u64, 6>;

/// digest of a SHA-512 computation, 512 bits
pub type Sha512Digest = Digest<u64, 8>;

/// A completed hash value of ``N`` words, most significant word first. A digest is either the
/// all-zero null sentinel (no input was processed, e.g. the file could not be opened) or a valid
/// finished hash; there is no third state. Real SHA outputs are never all-zero for any input, so
/// the sentinel is unambiguous in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest<W: Word, const N: usize> {
    words: [W; N],
}

impl<W: Word, const N: usize> Digest<W, N> {
    /// number of characters in the hex rendition of this digest
    pub const HEX_CHARS: usize = 2 * W::BYTES * N;

    pub fn new(words: [W; N]) -> Self {
        Digest { words }
    }

    /// The all-zero sentinel signalling that no digest could be computed.
    pub fn null() -> Self {
        Digest { words: [W::ZERO; N] }
    }

    /// Whether this digest is the all-zero sentinel.
    pub fn is_null(&self) -> bool {
        self.words.iter().all(|word| *word == W::ZERO)
    }

    /// Reset this digest to the all-zero sentinel.
    pub fn set_null(&mut self) {
        self.words = [W::ZERO; N];
    }

    /// Access the raw hash state words, most significant first.
    pub fn words(&self) -> &[W; N] {
        &self.words
    }

    /// Serialize the digest into its big-endian byte representation.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0_u8; W::BYTES * N];
        for (i, word) in self.words.iter().enumerate() {
            word.store_be(&mut bytes[i * W::BYTES..(i + 1) * W::BYTES]);
        }
        bytes
    }

    /// Render the digest as lowercase hex, most significant word first, most significant nibble
    /// of each word first.
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(Self::HEX_CHARS);
        for word in &self.words {
            word.push_hex(&mut hex);
        }
        hex
    }

    /// Strict inverse of [`to_hex`](Digest::to_hex): the input must have exactly
    /// [`HEX_CHARS`](Digest::HEX_CHARS) characters, all in `[0-9a-f]`. Uppercase digits are
    /// rejected, not normalized. Returns `None` on any violation.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != Self::HEX_CHARS {
            return None;
        }
        if !hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return None;
        }

        let digits_per_word = 2 * W::BYTES;
        let mut words = [W::ZERO; N];
        for (i, word) in words.iter_mut().enumerate() {
            *word = W::parse_hex(&hex[i * digits_per_word..(i + 1) * digits_per_word])?;
        }
        Some(Digest { words })
    }
}

impl<W: Word, const N: usize> Default for Digest<W, N> {
    fn default() -> Self {
        Digest::null()
    }
}

impl<W: Word, const N: usize> fmt::Display for Digest<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
