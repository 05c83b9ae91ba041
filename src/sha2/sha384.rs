//! SHA-384: the 64-bit SHA-2 compression function under different initial values, with the
//! output truncated to the first six state words.

#![allow(clippy::unreadable_literal)]

use std::path::Path;

use crate::block::{BufferMessageSource, FileMessageSource, MessageSource};
use crate::digest::Sha384Digest;

use super::digest_to_state;

/// The initial hash state of any SHA-384 computation.
pub const INITIAL: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

/// Drive ``source`` to exhaustion and return the SHA-384 digest of everything it emitted.
pub fn digest_source(source: &mut impl MessageSource<u64>) -> Sha384Digest {
    let state = digest_to_state(INITIAL, source);
    let mut truncated = [0_u64; 6];
    truncated.copy_from_slice(&state[..6]);
    Sha384Digest::new(truncated)
}

/// Digest an in-memory buffer. The buffer is only borrowed for the duration of the call.
pub fn digest_buffer(data: &[u8]) -> Sha384Digest {
    digest_source(&mut BufferMessageSource::new(data))
}

/// Digest the contents of the file at ``path``. Returns the null digest if the file cannot be
/// opened; check [`is_null`](crate::digest::Digest::is_null) on the result.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Sha384Digest {
    match FileMessageSource::open(path) {
        Ok(mut source) => digest_source(&mut source),
        Err(_) => Sha384Digest::null(),
    }
}
