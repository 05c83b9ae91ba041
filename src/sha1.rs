//! SHA-1. Eighty rounds over five 32-bit working words; the schedule word is a rotated four-way
//! xor instead of the SHA-2 σ recurrence, and the boolean mixer and round constant change every
//! twenty rounds.
//!
//! SHA-1 is broken for collision resistance and is provided for interoperability with formats
//! that still carry SHA-1 checksums, not for new designs.

#![allow(clippy::unreadable_literal)]

use std::path::Path;

use crate::bitwise::{choice, majority, parity};
use crate::block::{BufferMessageSource, FileMessageSource, MessageBlock, MessageSource, BLOCK_WORDS};
use crate::digest::Sha1Digest;

/// The initial hash state of any SHA-1 computation.
pub const INITIAL: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// round constants, one per twenty-round quarter
const ROUND_CONSTANTS: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// Compress one message block into ``state``.
fn compress(state: &mut [u32; 5], block: &MessageBlock<u32>) {
    let mut schedule = [0_u32; 80];
    schedule[..BLOCK_WORDS].copy_from_slice(block.words());
    for t in BLOCK_WORDS..80 {
        schedule[t] = u32::rotate_left(
            schedule[t - 3] ^ schedule[t - 8] ^ schedule[t - 14] ^ schedule[t - 16],
            1,
        );
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, schedule_word) in schedule.iter().enumerate() {
        let (mixed, constant) = match t {
            0..=19 => (choice(b, c, d), ROUND_CONSTANTS[0]),
            20..=39 => (parity(b, c, d), ROUND_CONSTANTS[1]),
            40..=59 => (majority(b, c, d), ROUND_CONSTANTS[2]),
            60..=79 => (parity(b, c, d), ROUND_CONSTANTS[3]),
            _ => unreachable!(),
        };

        let temp = u32::rotate_left(a, 5)
            .wrapping_add(mixed)
            .wrapping_add(e)
            .wrapping_add(constant)
            .wrapping_add(*schedule_word);
        e = d;
        d = c;
        c = u32::rotate_left(b, 30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Drive ``source`` to exhaustion and return the SHA-1 digest of everything it emitted. This is
/// the generic entry point; custom [`MessageSource`] implementations plug in here.
pub fn digest_source(source: &mut impl MessageSource<u32>) -> Sha1Digest {
    let mut state = INITIAL;
    let mut block = MessageBlock::zeroed();
    while source.next_block(&mut block) {
        compress(&mut state, &block);
    }
    Sha1Digest::new(state)
}

/// Digest an in-memory buffer. The buffer is only borrowed for the duration of the call.
pub fn digest_buffer(data: &[u8]) -> Sha1Digest {
    digest_source(&mut BufferMessageSource::new(data))
}

/// Digest the contents of the file at ``path``. Returns the null digest if the file cannot be
/// opened; check [`is_null`](crate::digest::Digest::is_null) on the result.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Sha1Digest {
    match FileMessageSource::open(path) {
        Ok(mut source) => digest_source(&mut source),
        Err(_) => Sha1Digest::null(),
    }
}
