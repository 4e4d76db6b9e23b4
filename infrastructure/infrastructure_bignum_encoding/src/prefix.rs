//! Prefix Digest Module
//!
//! The filler in front of the payload is cut from the MD5 digest of the
//! payload bytes. MD5 is used only so that encoded identifiers look random
//! and stay byte-identical across implementations; nothing relies on it for
//! integrity.

use entities_uuid_layout::{BitWidth, DIGEST_BYTES};

/// MD5-based prefix source
pub struct PrefixDigest;

impl PrefixDigest {
    /// Digest of the big-endian payload bytes
    pub fn digest(payload: &[u8]) -> [u8; DIGEST_BYTES] {
        md5::compute(payload).0
    }

    /// The prefix this encoder emits for `payload` at `width`
    pub fn prefix(payload: &[u8], width: BitWidth) -> Vec<u8> {
        Self::digest(payload)[..width.prefix_bytes()].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_of_empty_input() {
        // MD5 of the empty string is d41d8cd98f00b204e9800998ecf8427e
        let expected = [
            0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04,
            0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8, 0x42, 0x7e,
        ];
        assert_eq!(PrefixDigest::digest(b""), expected);
    }

    #[test]
    fn test_prefix_for_single_byte_payload() {
        let prefix = PrefixDigest::prefix(&[0x03], BitWidth::MIN);
        assert_eq!(
            prefix,
            vec![
                0x86, 0x66, 0x68, 0x35, 0x06, 0xaa, 0xcd, 0x90,
                0x0b, 0xbd, 0x5a, 0x74, 0xac, 0x4e,
            ]
        );
    }

    #[test]
    fn test_prefix_empty_at_full_width() {
        assert!(PrefixDigest::prefix(&[0xff; 15], BitWidth::MAX).is_empty());
    }
}
