//! Abstraction over the two word widths the SHA family is built on. SHA-1, SHA-224 and SHA-256
//! operate on 32-bit words and 512-bit blocks, SHA-384 and SHA-512 on 64-bit words and 1024-bit
//! blocks. Everything else about block geometry, byte order and hex formatting follows from the
//! width, so the block sources and the digest type are generic over this trait and instantiated
//! once per width.

use std::fmt::{Debug, LowerHex};
use std::ops::{BitAnd, BitOr, BitXor, Not, Shr};

/// An unsigned machine word as consumed by a SHA compression function. Implemented by `u32` and
/// `u64` only; all arithmetic the algorithms need is exposed here so the rest of the crate never
/// has to know which width it is working with.
pub trait Word:
    Copy
    + Eq
    + Ord
    + Debug
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    /// width of the word in bits
    const BITS: u32;

    /// width of the word in bytes
    const BYTES: usize;

    /// size of one message block (sixteen words) in bytes
    const BLOCK_BYTES: usize;

    /// number of bytes the message-length field occupies at the end of the final padded block
    /// (64 bits for the 32-bit family, 128 bits for the 64-bit family)
    const LENGTH_FIELD_BYTES: usize;

    const ZERO: Self;

    /// Addition modulo the word size. Overflow is defined behavior in every SHA accumulation
    /// step, never an error.
    fn wrapping_add(self, other: Self) -> Self;

    /// Circular left shift by ``n`` bit positions, `0 <= n < Self::BITS`. The rotation amounts
    /// are fixed constants from the algorithm definitions, so release builds trust the caller.
    fn rotate_left(self, n: u32) -> Self;

    /// Circular right shift by ``n`` bit positions, `0 <= n < Self::BITS`.
    fn rotate_right(self, n: u32) -> Self;

    /// Interpret the first `Self::BYTES` bytes of ``bytes`` as a big-endian word.
    fn load_be(bytes: &[u8]) -> Self;

    /// Write the word into the first `Self::BYTES` bytes of ``target`` in big-endian order.
    fn store_be(self, target: &mut [u8]);

    /// Parse exactly `2 * Self::BYTES` lowercase hex digits into a word. The caller has already
    /// validated length and character set; this only performs the numeric conversion.
    fn parse_hex(digits: &str) -> Option<Self>;

    /// Append the word to ``target`` as `2 * Self::BYTES` lowercase hex digits, most significant
    /// nibble first.
    fn push_hex(self, target: &mut String) {
        use std::fmt::Write;

        // writing to a String cannot fail
        let _ = write!(target, "{:0width$x}", self, width = Self::BYTES * 2);
    }
}

impl Word for u32 {
    const BITS: u32 = 32;
    const BYTES: usize = 4;
    const BLOCK_BYTES: usize = 64;
    const LENGTH_FIELD_BYTES: usize = 8;
    const ZERO: u32 = 0;

    fn wrapping_add(self, other: u32) -> u32 {
        u32::wrapping_add(self, other)
    }

    fn rotate_left(self, n: u32) -> u32 {
        debug_assert!(n < Self::BITS);
        u32::rotate_left(self, n)
    }

    fn rotate_right(self, n: u32) -> u32 {
        debug_assert!(n < Self::BITS);
        u32::rotate_right(self, n)
    }

    fn load_be(bytes: &[u8]) -> u32 {
        let mut raw = [0_u8; 4];
        raw.copy_from_slice(&bytes[..4]);
        u32::from_be_bytes(raw)
    }

    fn store_be(self, target: &mut [u8]) {
        target[..4].copy_from_slice(&self.to_be_bytes());
    }

    fn parse_hex(digits: &str) -> Option<u32> {
        u32::from_str_radix(digits, 16).ok()
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;
    const BLOCK_BYTES: usize = 128;
    const LENGTH_FIELD_BYTES: usize = 16;
    const ZERO: u64 = 0;

    fn wrapping_add(self, other: u64) -> u64 {
        u64::wrapping_add(self, other)
    }

    fn rotate_left(self, n: u32) -> u64 {
        debug_assert!(n < Self::BITS);
        u64::rotate_left(self, n)
    }

    fn rotate_right(self, n: u32) -> u64 {
        debug_assert!(n < Self::BITS);
        u64::rotate_right(self, n)
    }

    fn load_be(bytes: &[u8]) -> u64 {
        let mut raw = [0_u8; 8];
        raw.copy_from_slice(&bytes[..8]);
        u64::from_be_bytes(raw)
    }

    fn store_be(self, target: &mut [u8]) {
        target[..8].copy_from_slice(&self.to_be_bytes());
    }

    fn parse_hex(digits: &str) -> Option<u64> {
        u64::from_str_radix(digits, 16).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_be() {
        assert_eq!(u32::load_be(&[0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
        assert_eq!(
            u64::load_be(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]),
            0x0123_4567_89AB_CDEF
        );
    }

    #[test]
    fn test_store_be_round_trip() {
        let mut raw = [0_u8; 8];
        0xDEAD_BEEF_u32.store_be(&mut raw);
        assert_eq!(&raw[..4], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(u32::load_be(&raw), 0xDEAD_BEEF);

        0x0123_4567_89AB_CDEF_u64.store_be(&mut raw);
        assert_eq!(u64::load_be(&raw), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn test_push_hex_pads_leading_zeroes() {
        let mut hex = String::new();
        0x0000_00FF_u32.push_hex(&mut hex);
        assert_eq!(hex, "000000ff");

        let mut hex = String::new();
        0x1_u64.push_hex(&mut hex);
        assert_eq!(hex, "0000000000000001");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(u32::parse_hex("deadbeef"), Some(0xDEAD_BEEF));
        assert_eq!(u64::parse_hex("0123456789abcdef"), Some(0x0123_4567_89AB_CDEF));
        assert_eq!(u32::parse_hex("not hex!"), None);
    }
}
