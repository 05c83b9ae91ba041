//! SHA-256: the full eight-word output of the 32-bit SHA-2 compression function.

#![allow(clippy::unreadable_literal)]

use std::path::Path;

use crate::block::{BufferMessageSource, FileMessageSource, MessageSource};
use crate::digest::Sha256Digest;

use super::digest_to_state;

/// The initial hash state of any SHA-256 computation, the fractional parts of the square roots
/// of the first eight primes.
pub const INITIAL: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Drive ``source`` to exhaustion and return the SHA-256 digest of everything it emitted.
pub fn digest_source(source: &mut impl MessageSource<u32>) -> Sha256Digest {
    Sha256Digest::new(digest_to_state(INITIAL, source))
}

/// Digest an in-memory buffer. The buffer is only borrowed for the duration of the call.
pub fn digest_buffer(data: &[u8]) -> Sha256Digest {
    digest_source(&mut BufferMessageSource::new(data))
}

/// Digest the contents of the file at ``path``. Returns the null digest if the file cannot be
/// opened; check [`is_null`](crate::digest::Digest::is_null) on the result.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Sha256Digest {
    match FileMessageSource::open(path) {
        Ok(mut source) => digest_source(&mut source),
        Err(_) => Sha256Digest::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answers() {
        let empty = digest_buffer(b"");
        assert_eq!(
            empty.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        // the raw state words are the digest in most-significant-first order
        assert_eq!(empty.words()[0], 0xe3b0c442);
        assert_eq!(empty.words()[7], 0x7852b855);
        assert_eq!(
            digest_buffer(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_two_block_boundary_vector() {
        assert_eq!(
            digest_buffer(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").to_hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn test_million_a() {
        let data = vec![b'a'; 1_000_000];
        assert_eq!(
            digest_buffer(&data).to_hex(),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }
}
