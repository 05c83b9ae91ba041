//! The SHA-2 family. All four variants run the same compression function; the word width
//! determines the schedule length, the rotation amounts of the Σ/σ mixers and the round constant
//! table, and each variant contributes its own initial hash values. SHA-224 and SHA-384 are
//! truncated, differently seeded renditions of SHA-256 and SHA-512 respectively.

#![allow(clippy::unreadable_literal)]

use crate::bitwise::{choice, majority};
use crate::block::{MessageBlock, MessageSource, BLOCK_WORDS};
use crate::word::Word;

pub mod sha224;
pub mod sha256;
pub mod sha384;
pub mod sha512;

/// A [`Word`] width that carries a SHA-2 message schedule: the number of rounds, the
/// cube-root-derived round constant table and the four rotation mixers with their
/// width-specific rotation amounts.
pub trait ScheduleWord: Word + 'static {
    /// number of compression rounds, which is also the schedule length
    const ROUNDS: usize;

    /// round constants, the fractional parts of the cube roots of the first primes
    const ROUND_CONSTANTS: &'static [Self];

    fn big_sigma0(self) -> Self;
    fn big_sigma1(self) -> Self;
    fn small_sigma0(self) -> Self;
    fn small_sigma1(self) -> Self;
}

impl ScheduleWord for u32 {
    const ROUNDS: usize = 64;
    const ROUND_CONSTANTS: &'static [u32] = &K256;

    fn big_sigma0(self) -> u32 {
        self.rotate_right(2) ^ self.rotate_right(13) ^ self.rotate_right(22)
    }

    fn big_sigma1(self) -> u32 {
        self.rotate_right(6) ^ self.rotate_right(11) ^ self.rotate_right(25)
    }

    fn small_sigma0(self) -> u32 {
        self.rotate_right(7) ^ self.rotate_right(18) ^ (self >> 3)
    }

    fn small_sigma1(self) -> u32 {
        self.rotate_right(17) ^ self.rotate_right(19) ^ (self >> 10)
    }
}

impl ScheduleWord for u64 {
    const ROUNDS: usize = 80;
    const ROUND_CONSTANTS: &'static [u64] = &K512;

    fn big_sigma0(self) -> u64 {
        self.rotate_right(28) ^ self.rotate_right(34) ^ self.rotate_right(39)
    }

    fn big_sigma1(self) -> u64 {
        self.rotate_right(14) ^ self.rotate_right(18) ^ self.rotate_right(41)
    }

    fn small_sigma0(self) -> u64 {
        self.rotate_right(1) ^ self.rotate_right(8) ^ (self >> 7)
    }

    fn small_sigma1(self) -> u64 {
        self.rotate_right(19) ^ self.rotate_right(61) ^ (self >> 6)
    }
}

const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const K512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Compress one message block into the eight-word ``state``.
fn compress<W: ScheduleWord>(state: &mut [W; 8], block: &MessageBlock<W>) {
    // 80 covers both schedule lengths; the tail beyond W::ROUNDS stays untouched for u32
    let mut schedule = [W::ZERO; 80];
    schedule[..BLOCK_WORDS].copy_from_slice(block.words());
    for t in BLOCK_WORDS..W::ROUNDS {
        schedule[t] = schedule[t - 2]
            .small_sigma1()
            .wrapping_add(schedule[t - 7])
            .wrapping_add(schedule[t - 15].small_sigma0())
            .wrapping_add(schedule[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..W::ROUNDS {
        let temp1 = h
            .wrapping_add(e.big_sigma1())
            .wrapping_add(choice(e, f, g))
            .wrapping_add(W::ROUND_CONSTANTS[t])
            .wrapping_add(schedule[t]);
        let temp2 = a.big_sigma0().wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Drive ``source`` to exhaustion starting from ``initial`` and return the final hash state.
/// The per-variant modules wrap this with their own initial values and output truncation.
fn digest_to_state<W: ScheduleWord>(initial: [W; 8], source: &mut impl MessageSource<W>) -> [W; 8] {
    let mut state = initial;
    let mut block = MessageBlock::zeroed();
    while source.next_block(&mut block) {
        compress(&mut state, &block);
    }
    state
}
