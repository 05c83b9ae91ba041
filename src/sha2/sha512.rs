//! SHA-512: the full eight-word output of the 64-bit SHA-2 compression function.

#![allow(clippy::unreadable_literal)]

use std::path::Path;

use crate::block::{BufferMessageSource, FileMessageSource, MessageSource};
use crate::digest::Sha512Digest;

use super::digest_to_state;

/// The initial hash state of any SHA-512 computation, the fractional parts of the square roots
/// of the first eight primes to 64 bits.
pub const INITIAL: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// Drive ``source`` to exhaustion and return the SHA-512 digest of everything it emitted.
pub fn digest_source(source: &mut impl MessageSource<u64>) -> Sha512Digest {
    Sha512Digest::new(digest_to_state(INITIAL, source))
}

/// Digest an in-memory buffer. The buffer is only borrowed for the duration of the call.
pub fn digest_buffer(data: &[u8]) -> Sha512Digest {
    digest_source(&mut BufferMessageSource::new(data))
}

/// Digest the contents of the file at ``path``. Returns the null digest if the file cannot be
/// opened; check [`is_null`](crate::digest::Digest::is_null) on the result.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Sha512Digest {
    match FileMessageSource::open(path) {
        Ok(mut source) => digest_source(&mut source),
        Err(_) => Sha512Digest::null(),
    }
}
