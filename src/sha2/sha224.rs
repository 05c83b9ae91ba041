//! SHA-224: the 32-bit SHA-2 compression function under different initial values, with the
//! output truncated to the first seven state words.

#![allow(clippy::unreadable_literal)]

use std::path::Path;

use crate::block::{BufferMessageSource, FileMessageSource, MessageSource};
use crate::digest::Sha224Digest;

use super::digest_to_state;

/// The initial hash state of any SHA-224 computation.
pub const INITIAL: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// Drive ``source`` to exhaustion and return the SHA-224 digest of everything it emitted.
pub fn digest_source(source: &mut impl MessageSource<u32>) -> Sha224Digest {
    let state = digest_to_state(INITIAL, source);
    let mut truncated = [0_u32; 7];
    truncated.copy_from_slice(&state[..7]);
    Sha224Digest::new(truncated)
}

/// Digest an in-memory buffer. The buffer is only borrowed for the duration of the call.
pub fn digest_buffer(data: &[u8]) -> Sha224Digest {
    digest_source(&mut BufferMessageSource::new(data))
}

/// Digest the contents of the file at ``path``. Returns the null digest if the file cannot be
/// opened; check [`is_null`](crate::digest::Digest::is_null) on the result.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Sha224Digest {
    match FileMessageSource::open(path) {
        Ok(mut source) => digest_source(&mut source),
        Err(_) => Sha224Digest::null(),
    }
}
