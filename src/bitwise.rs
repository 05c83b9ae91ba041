//! The three boolean mixing functions shared by the SHA round functions. They are pure and
//! stateless; the rotation-based Σ/σ mixers live with the SHA-2 schedule since their rotation
//! amounts depend on the word width.

use crate::word::Word;

/// ``Ch(x, y, z)``: for every bit position, select the bit of ``y`` where ``x`` is set and the
/// bit of ``z`` where it is clear.
#[inline]
pub fn choice<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

/// ``Maj(x, y, z)``: every result bit takes the value held by the majority of its three inputs.
#[inline]
pub fn majority<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

/// ``Parity(x, y, z)``: plain three-way exclusive or. Only SHA-1 uses this.
#[inline]
pub fn parity<W: Word>(x: W, y: W, z: W) -> W {
    x ^ y ^ z
}
