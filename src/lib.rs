//! Software implementations of the SHA-1 and SHA-2 (SHA-224/256/384/512) message digests,
//! written from first principles with no external cryptographic dependency.
//!
//! The crate is split along the seams of the Merkle–Damgård construction: [`word`] abstracts the
//! two word widths the family is built on, [`block`] turns byte streams into padded big-endian
//! message blocks, [`bitwise`] holds the shared boolean mixers, [`digest`] is the fixed-size
//! output value with hex encoding, and [`sha1`]/[`sha2`] contain the per-variant compression
//! drivers and their file/buffer/source entry points.
//!
//! ```
//! let digest = merkled::sha2::sha256::digest_buffer(b"abc");
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod bitwise;
pub mod block;
pub mod digest;
pub mod sha1;
pub mod sha2;
pub mod word;

pub use crate::block::{BufferMessageSource, FileMessageSource, MessageBlock, MessageSource};
pub use crate::digest::{
    Digest, Sha1Digest, Sha224Digest, Sha256Digest, Sha384Digest, Sha512Digest,
};
pub use crate::word::Word;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    use hex;

    use crate::{sha1, sha2};

    const EMPTY_MESSAGE: &str = "";

    const SOME_TEXT: &str = "a-very-long-message-that-can-be-digested-at-once";

    fn scratch_file(name: &str, content: &[u8]) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("merkled-{}-{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_digests_as_raw_bytes() {
        assert_eq!(
            hex::encode(sha1::digest_buffer(EMPTY_MESSAGE.as_bytes()).to_bytes()),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            hex::encode(sha2::sha256::digest_buffer(EMPTY_MESSAGE.as_bytes()).to_bytes()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        // the hex rendition and the byte rendition agree for every algorithm
        let digest = sha2::sha512::digest_buffer(SOME_TEXT.as_bytes());
        assert_eq!(hex::encode(digest.to_bytes()), digest.to_hex());
        let digest = sha2::sha384::digest_buffer(SOME_TEXT.as_bytes());
        assert_eq!(hex::encode(digest.to_bytes()), digest.to_hex());
        let digest = sha2::sha224::digest_buffer(SOME_TEXT.as_bytes());
        assert_eq!(hex::encode(digest.to_bytes()), digest.to_hex());
    }

    #[test]
    fn test_hex_round_trip_for_computed_digests() {
        let digest = sha1::digest_buffer(SOME_TEXT.as_bytes());
        assert_eq!(crate::Sha1Digest::from_hex(&digest.to_hex()), Some(digest));

        let digest = sha2::sha256::digest_buffer(SOME_TEXT.as_bytes());
        assert_eq!(crate::Sha256Digest::from_hex(&digest.to_hex()), Some(digest));

        let digest = sha2::sha384::digest_buffer(SOME_TEXT.as_bytes());
        assert_eq!(crate::Sha384Digest::from_hex(&digest.to_hex()), Some(digest));
    }

    #[test]
    fn test_file_and_buffer_digests_agree() {
        // three blocks for the 32-bit family plus a ragged tail
        let content: Vec<u8> = (0..200_u32).map(|i| (i * 31 + 7) as u8).collect();
        let path = scratch_file("file-buffer", &content);

        assert_eq!(sha1::digest_file(&path), sha1::digest_buffer(&content));
        assert_eq!(sha2::sha224::digest_file(&path), sha2::sha224::digest_buffer(&content));
        assert_eq!(sha2::sha256::digest_file(&path), sha2::sha256::digest_buffer(&content));
        assert_eq!(sha2::sha384::digest_file(&path), sha2::sha384::digest_buffer(&content));
        assert_eq!(sha2::sha512::digest_file(&path), sha2::sha512::digest_buffer(&content));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_yields_the_null_sentinel() {
        let digest = sha2::sha256::digest_file("/nonexistent/path/to/nothing");
        assert!(digest.is_null());
        assert_eq!(digest, crate::Sha256Digest::null());

        assert!(sha1::digest_file("/nonexistent/path/to/nothing").is_null());
        assert!(sha2::sha512::digest_file("/nonexistent/path/to/nothing").is_null());
    }

    #[test]
    fn test_single_byte_flip_changes_every_digest() {
        let mut data = vec![0x5C_u8; 300];
        let before_sha1 = sha1::digest_buffer(&data);
        let before_sha256 = sha2::sha256::digest_buffer(&data);
        let before_sha512 = sha2::sha512::digest_buffer(&data);

        // flip one bit in the middle of the second block
        data[150] ^= 0x01;

        assert_ne!(sha1::digest_buffer(&data), before_sha1);
        assert_ne!(sha2::sha256::digest_buffer(&data), before_sha256);
        assert_ne!(sha2::sha512::digest_buffer(&data), before_sha512);
    }

    #[test]
    fn test_file_digests_at_the_split_padding_boundary() {
        // 56 bytes: the length field no longer fits the final data block and spills
        let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let path = scratch_file("split-32", message);
        assert_eq!(
            sha2::sha256::digest_file(&path).to_hex(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
        assert_eq!(
            sha1::digest_file(&path).to_hex(),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );
        fs::remove_file(path).unwrap();

        // 112 bytes: the same spill for the 1024-bit block geometry
        let message = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                        hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
        let path = scratch_file("split-64", message);
        assert_eq!(
            sha2::sha512::digest_file(&path).to_hex(),
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
             501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
        );
        assert_eq!(
            sha2::sha384::digest_file(&path).to_hex(),
            "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
             fcc7c71a557e2db966c3e9fa91746039"
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_file_entry_point_against_published_vector() {
        let data = vec![b'a'; 1_000_000];
        let path = scratch_file("million", &data);
        assert_eq!(
            sha2::sha256::digest_file(&path).to_hex(),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
        assert_eq!(
            sha1::digest_file(&path).to_hex(),
            "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
        );
        fs::remove_file(path).unwrap();
    }
}
