//! Message sources: adapters that turn an arbitrary-length byte stream into the fixed-size,
//! big-endian word blocks a compression function consumes, applying Merkle–Damgård padding on
//! the way out. Two concrete sources are provided, one streaming from an open file and one
//! borrowing an in-memory buffer; custom sources only need to implement [`MessageSource`].
//!
//! Padding appends a single `1` bit (byte `0x80`, everything here is byte-granular), zero-fills
//! up to the length field, then writes the total message length in bits as a big-endian integer
//! into the last [`Word::LENGTH_FIELD_BYTES`] bytes. When the `0x80` byte plus the length field
//! no longer fit next to the final data bytes, the padding spills into a second, otherwise
//! all-zero block that carries only the length.

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::marker::PhantomData;
use std::path::Path;

use crate::word::Word;

/// number of words in one message block
pub const BLOCK_WORDS: usize = 16;

/// One compression-function input block: sixteen words, 512 or 1024 bits depending on the word
/// width. Blocks are produced by a [`MessageSource`] in big-endian word order regardless of the
/// host byte order and consumed immediately by the driver.
#[derive(Debug, Clone, Copy)]
pub struct MessageBlock<W: Word> {
    words: [W; BLOCK_WORDS],
}

impl<W: Word> MessageBlock<W> {
    pub fn zeroed() -> Self {
        MessageBlock { words: [W::ZERO; BLOCK_WORDS] }
    }

    pub fn words(&self) -> &[W; BLOCK_WORDS] {
        &self.words
    }

    /// Load one block's worth of raw bytes, converting every word from big-endian byte order.
    fn fill_from_bytes(&mut self, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), W::BLOCK_BYTES);
        for (i, word) in self.words.iter_mut().enumerate() {
            *word = W::load_be(&bytes[i * W::BYTES..]);
        }
    }
}

/// A producer of [`MessageBlock`]s. Drivers call [`next_block`](MessageSource::next_block) until
/// it returns `false`; implementations append the padding blocks themselves, so the driver never
/// has to know where the raw message ended.
pub trait MessageSource<W: Word> {
    /// Fill ``block`` with the next 512- or 1024-bit chunk of the (padded) message and return
    /// `true`, or return `false` once all data including padding has been emitted. ``block`` is
    /// left untouched in the `false` case, and calling again after exhaustion keeps returning
    /// `false`.
    fn next_block(&mut self, block: &mut MessageBlock<W>) -> bool;
}

/// Progress of the padding emission. `Unpadded` while raw message data is still flowing, then
/// either the single final padded block or the two spill blocks are pending, then everything has
/// been emitted and [`MessageSource::next_block`] answers `false` forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Padding {
    Unpadded,
    FinalPending,
    SplitFirstPending,
    SplitSecondPending,
    Emitted,
}

/// Build the padding tail for a message ending in the partial block ``remainder`` with a total
/// length of ``total_bits``. The result is one block if the `0x80` byte and the length field fit
/// behind the remainder, two blocks otherwise. For 64-bit words the length field is nominally
/// 128 bits wide; its upper half stays zero since lengths are tracked as `u64`.
fn padding_tail<W: Word>(remainder: &[u8], total_bits: u64) -> Vec<u8> {
    debug_assert!(remainder.len() < W::BLOCK_BYTES);

    let split = remainder.len() + 1 + W::LENGTH_FIELD_BYTES > W::BLOCK_BYTES;
    let tail_len = if split { 2 * W::BLOCK_BYTES } else { W::BLOCK_BYTES };

    let mut tail = vec![0_u8; tail_len];
    tail[..remainder.len()].copy_from_slice(remainder);
    tail[remainder.len()] = 0x80;
    tail[tail_len - 8..].copy_from_slice(&total_bits.to_be_bytes());
    tail
}

/// Emit the pending padding blocks from ``tail`` in order, advancing ``state``. Raw message data
/// must have been drained before this runs; hitting `Unpadded` here means the source
/// implementation itself is defective.
fn emit_padding<W: Word>(state: &mut Padding, tail: &mut Vec<u8>, block: &mut MessageBlock<W>) -> bool {
    match *state {
        Padding::FinalPending => {
            block.fill_from_bytes(tail);
            *tail = Vec::new();
            *state = Padding::Emitted;
            true
        }
        Padding::SplitFirstPending => {
            block.fill_from_bytes(&tail[..W::BLOCK_BYTES]);
            *state = Padding::SplitSecondPending;
            true
        }
        Padding::SplitSecondPending => {
            block.fill_from_bytes(&tail[W::BLOCK_BYTES..]);
            *tail = Vec::new();
            *state = Padding::Emitted;
            true
        }
        Padding::Emitted => false,
        Padding::Unpadded => unreachable!("padding emission started while raw message data remained"),
    }
}

/// A message source streaming from an open file. The source owns the handle and drops it as soon
/// as the last raw byte has been read, including on the short final read that triggers padding;
/// the remaining padding blocks are served from an owned tail buffer.
///
/// A read that comes up short is the legitimate end-of-data signal, not an error: it is exactly
/// the point where padding insertion begins. Only opening the file can fail.
pub struct FileMessageSource<W: Word> {
    file: Option<File>,
    buffer: Vec<u8>,
    consumed_bits: u64,
    state: Padding,
    tail: Vec<u8>,
    _width: PhantomData<W>,
}

impl<W: Word> FileMessageSource<W> {
    /// Open ``path`` read-only as a message source. Unlike digesting itself, opening is fallible
    /// and reports the underlying I/O error.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(FileMessageSource {
            file: Some(file),
            buffer: vec![0_u8; W::BLOCK_BYTES],
            consumed_bits: 0,
            state: Padding::Unpadded,
            tail: Vec::new(),
            _width: PhantomData,
        })
    }

    /// total number of message bits consumed from the file so far
    pub fn consumed_bits(&self) -> u64 {
        self.consumed_bits
    }

    /// Read until ``self.buffer`` is full or the stream ends, returning the number of bytes
    /// read. Interrupted reads are retried; any other error ends the stream.
    fn fill_buffer(file: &mut File, buffer: &mut [u8]) -> usize {
        let mut filled = 0;
        while filled < buffer.len() {
            match file.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
        filled
    }
}

impl<W: Word> MessageSource<W> for FileMessageSource<W> {
    fn next_block(&mut self, block: &mut MessageBlock<W>) -> bool {
        if self.state == Padding::Unpadded {
            let filled = match self.file.as_mut() {
                Some(file) => Self::fill_buffer(file, &mut self.buffer),
                None => unreachable!("file handle dropped while raw message data remained"),
            };
            self.consumed_bits += 8 * filled as u64;

            if filled == W::BLOCK_BYTES {
                block.fill_from_bytes(&self.buffer);
                return true;
            }

            // the message ends here; release the handle and switch over to padding
            self.file = None;
            self.tail = padding_tail::<W>(&self.buffer[..filled], self.consumed_bits);
            self.buffer = Vec::new();
            self.state = if self.tail.len() == W::BLOCK_BYTES {
                Padding::FinalPending
            } else {
                Padding::SplitFirstPending
            };
        }

        emit_padding(&mut self.state, &mut self.tail, block)
    }
}

/// A message source over a caller-owned byte buffer. The buffer is only borrowed; since its
/// total length is known up front, the padding tail is precomputed at construction and the
/// source merely walks the data block by block afterwards.
pub struct BufferMessageSource<'a, W: Word> {
    data: &'a [u8],
    offset: usize,
    state: Padding,
    tail: Vec<u8>,
    _width: PhantomData<W>,
}

impl<'a, W: Word> BufferMessageSource<'a, W> {
    pub fn new(data: &'a [u8]) -> Self {
        let full_len = data.len() - data.len() % W::BLOCK_BYTES;
        let tail = padding_tail::<W>(&data[full_len..], 8 * data.len() as u64);
        BufferMessageSource {
            data,
            offset: 0,
            state: Padding::Unpadded,
            tail,
            _width: PhantomData,
        }
    }
}

impl<'a, W: Word> MessageSource<W> for BufferMessageSource<'a, W> {
    fn next_block(&mut self, block: &mut MessageBlock<W>) -> bool {
        if self.state == Padding::Unpadded {
            if self.offset + W::BLOCK_BYTES <= self.data.len() {
                block.fill_from_bytes(&self.data[self.offset..self.offset + W::BLOCK_BYTES]);
                self.offset += W::BLOCK_BYTES;
                return true;
            }

            self.state = if self.tail.len() == W::BLOCK_BYTES {
                Padding::FinalPending
            } else {
                Padding::SplitFirstPending
            };
        }

        emit_padding(&mut self.state, &mut self.tail, block)
    }
}
