//! Hex Layout Codec Module
//!
//! Converts between a 16-byte buffer and its 36-character UUID text form:
//! 32 hex digits in 8-4-4-4-12 groups separated by hyphens. The codec is
//! purely structural and knows nothing about what the bytes mean.

use entities_uuid_layout::LAYOUT_BYTES;

use crate::common::{HexLayoutError, HexLayoutResult};

/// Length of the hyphenated text form
pub const UUID_TEXT_LEN: usize = 36;

/// Character offsets that must hold a hyphen
pub const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

const HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";

/// Hex layout codec
pub struct HexLayoutCodec;

impl HexLayoutCodec {
    /// Encode a buffer as UUID text
    ///
    /// # Arguments
    /// * `bytes` - Must be exactly 16 bytes
    ///
    /// # Returns
    /// * `Ok(String)` - Lowercase, hyphenated text
    /// * `Err(HexLayoutError::InvalidBufferLength)` - For any other length
    pub fn encode(bytes: &[u8]) -> HexLayoutResult<String> {
        let buffer: &[u8; LAYOUT_BYTES] = bytes
            .try_into()
            .map_err(|_| HexLayoutError::InvalidBufferLength(bytes.len()))?;
        Ok(Self::encode_bytes(buffer))
    }

    /// Encode a fixed-size buffer as UUID text
    ///
    /// # Examples
    /// ```
    /// use infrastructure_hex_layout::HexLayoutCodec;
    ///
    /// let text = HexLayoutCodec::encode_bytes(&[0xab; 16]);
    /// assert_eq!(text, "abababab-abab-abab-abab-abababababab");
    /// ```
    pub fn encode_bytes(bytes: &[u8; LAYOUT_BYTES]) -> String {
        let mut text = String::with_capacity(UUID_TEXT_LEN);
        for (i, &b) in bytes.iter().enumerate() {
            text.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
            text.push(char::from(HEX_DIGITS[usize::from(b & 0x0f)]));
            // Hyphens follow hex digits 8, 12, 16 and 20
            if matches!(i, 3 | 5 | 7 | 9) {
                text.push('-');
            }
        }
        text
    }

    /// Decode UUID text into a buffer
    ///
    /// Hex digits are accepted in either case. Any deviation from the exact
    /// 8-4-4-4-12 shape fails the whole decode.
    ///
    /// # Arguments
    /// * `text` - Candidate UUID text
    ///
    /// # Returns
    /// * `Ok([u8; 16])` - The decoded buffer
    /// * `Err(HexLayoutError)` - Describing the first structural problem found
    pub fn decode(text: &str) -> HexLayoutResult<[u8; LAYOUT_BYTES]> {
        let raw = text.as_bytes();
        if raw.len() != UUID_TEXT_LEN {
            return Err(HexLayoutError::InvalidLength(raw.len()));
        }

        let mut bytes = [0u8; LAYOUT_BYTES];
        let mut nibble = 0usize;
        for (position, &c) in raw.iter().enumerate() {
            if HYPHEN_OFFSETS.contains(&position) {
                if c != b'-' {
                    return Err(HexLayoutError::MissingHyphen { position });
                }
                continue;
            }
            let value =
                hex_value(c).ok_or(HexLayoutError::InvalidHexDigit { position, found: c })?;
            if nibble % 2 == 0 {
                bytes[nibble / 2] = value << 4;
            } else {
                bytes[nibble / 2] |= value;
            }
            nibble += 1;
        }

        tracing::trace!(text, "decoded uuid text");
        Ok(bytes)
    }

    /// Check the shape of UUID text without keeping the bytes
    pub fn is_well_formed(text: &str) -> bool {
        Self::decode(text).is_ok()
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
