//! Bit Width Codec Module
//!
//! Packs a non-negative integer into a UUID-shaped string and back.
//!
//! Encoding sizes the integer to a whole number of bytes, writes it
//! big-endian, puts the width in bits into the last byte and fills the space
//! in front with the leading bytes of `MD5(payload)`. Decoding reads the last
//! byte, skips the filler and reads the payload; the filler is never checked.

use entities_uuid_layout::{
    BigNumber, BitWidth, FixedLayout, LAYOUT_BYTES, MARKER_INDEX, PAYLOAD_CAPACITY_BITS,
};
use infrastructure_hex_layout::HexLayoutCodec;

use crate::common::{DecodeError, EncodeError};
use crate::options::{DecodeOptions, WidthMarkerPolicy};
use crate::prefix::PrefixDigest;

/// Bit width codec
pub struct BitWidthCodec;

impl BitWidthCodec {
    /// Choose the payload width for a value
    ///
    /// # Returns
    /// * `Ok(BitWidth)` - Smallest multiple of 8 bits that holds the value
    /// * `Err(EncodeError::InvalidInput)` - For negative values
    /// * `Err(EncodeError::WidthOverflow)` - When more than 120 bits are needed
    pub fn bit_width(value: &BigNumber) -> Result<BitWidth, EncodeError> {
        if value.is_negative() {
            return Err(EncodeError::InvalidInput);
        }
        // log2 is undefined at 0 and degenerate at 1; both take the one-byte slot
        if value.is_zero() || value.is_one() {
            return Ok(BitWidth::MIN);
        }
        let bits = value.significant_bits();
        BitWidth::from_bits_needed(bits).ok_or(EncodeError::WidthOverflow { bits })
    }

    /// Build the 16-byte layout for a value without rendering it as text
    pub fn encode_layout(value: &BigNumber) -> Result<FixedLayout, EncodeError> {
        let width = Self::bit_width(value)?;
        let payload = value.to_u128().ok_or(EncodeError::WidthOverflow {
            bits: value.significant_bits(),
        })?;

        let digest = PrefixDigest::digest(&width.payload_bytes(payload));
        let layout = FixedLayout::assemble(width, payload, &digest);

        tracing::trace!(
            bit_width = width.bits(),
            prefix_bytes = width.prefix_bytes(),
            "packed integer into fixed layout"
        );
        Ok(layout)
    }

    /// Encode a value as a UUID-shaped string
    ///
    /// # Arguments
    /// * `value` - Integer in `[0, 2^120)`
    ///
    /// # Returns
    /// * `Ok(String)` - 36 lowercase characters, hyphenated 8-4-4-4-12
    /// * `Err(EncodeError)` - Negative or too-wide input
    ///
    /// # Examples
    /// ```
    /// use entities_uuid_layout::BigNumber;
    /// use infrastructure_bignum_encoding::BitWidthCodec;
    ///
    /// let text = BitWidthCodec::encode(&BigNumber::from_u64(3)).unwrap();
    /// assert_eq!(text, "86666835-06aa-cd90-0bbd-5a74ac4e0308");
    /// ```
    pub fn encode(value: &BigNumber) -> Result<String, EncodeError> {
        let layout = Self::encode_layout(value)?;
        Ok(HexLayoutCodec::encode(layout.as_bytes())?)
    }

    /// Decode a UUID-shaped string with strict width-marker checking
    pub fn decode(text: &str) -> Result<BigNumber, DecodeError> {
        Self::decode_with_options(text, DecodeOptions::default())
    }

    /// Decode a UUID-shaped string
    ///
    /// # Arguments
    /// * `text` - Hyphenated UUID text, hex digits in either case
    /// * `options` - Width marker handling
    ///
    /// # Returns
    /// * `Ok(BigNumber)` - The encoded integer
    /// * `Err(DecodeError::MalformedUuid)` - Text is not UUID-shaped
    /// * `Err(DecodeError::InvalidWidthMarker)` - Strict mode only
    pub fn decode_with_options(
        text: &str,
        options: DecodeOptions,
    ) -> Result<BigNumber, DecodeError> {
        let bytes = HexLayoutCodec::decode(text)?;
        let value = match options.width_marker {
            WidthMarkerPolicy::Strict => Self::parse_layout(bytes)?.payload_value(),
            WidthMarkerPolicy::Lenient => lenient_payload(&bytes),
        };
        Ok(BigNumber::from_u128(value))
    }

    /// Split a strictly valid encoded string into prefix, payload and width
    pub fn inspect(text: &str) -> Result<FixedLayout, DecodeError> {
        let bytes = HexLayoutCodec::decode(text)?;
        Self::parse_layout(bytes)
    }

    /// Whether `text` is exactly what this encoder emits for the value it holds
    ///
    /// Checks the MD5 prefix and the minimal width. This detects edits and
    /// foreign identifiers; it is not an integrity guarantee.
    pub fn is_canonical(text: &str) -> Result<bool, DecodeError> {
        let layout = Self::inspect(text)?;
        let value = BigNumber::from_u128(layout.payload_value());
        Ok(Self::encode_layout(&value)
            .map(|expected| expected == layout)
            .unwrap_or(false))
    }

    fn parse_layout(bytes: [u8; LAYOUT_BYTES]) -> Result<FixedLayout, DecodeError> {
        FixedLayout::parse(bytes).map_err(|err| {
            tracing::debug!(marker = err.0, "rejected width marker");
            DecodeError::from(err)
        })
    }
}

fn lenient_payload(bytes: &[u8; LAYOUT_BYTES]) -> u128 {
    let bits = u32::from(bytes[MARKER_INDEX]).min(PAYLOAD_CAPACITY_BITS);
    if bits == 0 {
        return 0;
    }
    let segment = bytes[..MARKER_INDEX]
        .iter()
        .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));
    segment & ((1u128 << bits) - 1)
}
