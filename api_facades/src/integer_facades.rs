//! Integer Facades
//!
//! Entry points for turning integers into UUID-shaped strings and back.
//! Each facade delegates to `BitWidthCodec`; the `u128` variants save callers
//! from building a `BigNumber` when a native integer is enough.

use entities_uuid_layout::BigNumber;
use infrastructure_bignum_encoding::{BitWidthCodec, DecodeError, DecodeOptions, EncodeError};

/// Encode a non-negative integer below 2^120 as a UUID-shaped string
///
/// # Examples
///
/// ```rust
/// use api_facades::{encode, BigNumber};
///
/// let text = encode(&BigNumber::from_u64(4322343)).unwrap();
/// assert_eq!(text, "07bfef02-a615-2803-edf7-8bc841f42718");
/// ```
pub fn encode(value: &BigNumber) -> Result<String, EncodeError> {
    BitWidthCodec::encode(value)
}

/// Decode a UUID-shaped string, rejecting width markers this encoder never emits
pub fn decode(text: &str) -> Result<BigNumber, DecodeError> {
    BitWidthCodec::decode(text)
}

/// Decode a UUID-shaped string with explicit options
pub fn decode_with_options(text: &str, options: DecodeOptions) -> Result<BigNumber, DecodeError> {
    BitWidthCodec::decode_with_options(text, options)
}

/// Encode a native integer
///
/// Values of 2^120 and above fail with `EncodeError::WidthOverflow`.
pub fn encode_u128(value: u128) -> Result<String, EncodeError> {
    BitWidthCodec::encode(&BigNumber::from_u128(value))
}

/// Decode into a native integer
///
/// Every strictly decoded value is below 2^120, so the narrowing never fails.
pub fn decode_u128(text: &str) -> Result<u128, DecodeError> {
    let layout = BitWidthCodec::inspect(text)?;
    Ok(layout.payload_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_facades() {
        let text = encode(&BigNumber::from_u64(3)).unwrap();
        assert_eq!(text, "86666835-06aa-cd90-0bbd-5a74ac4e0308");
        assert_eq!(decode(&text), Ok(BigNumber::from_u64(3)));
    }

    #[test]
    fn test_u128_facades() {
        let max = (1u128 << 120) - 1;
        let text = encode_u128(max).unwrap();
        assert_eq!(text, "ffffffff-ffff-ffff-ffff-ffffffffff78");
        assert_eq!(decode_u128(&text), Ok(max));
    }

    #[test]
    fn test_encode_u128_overflow() {
        assert_eq!(
            encode_u128(1u128 << 120),
            Err(EncodeError::WidthOverflow { bits: 121 })
        );
    }

    #[test]
    fn test_decode_u128_rejects_bad_marker() {
        assert_eq!(
            decode_u128("ffffffff-ffff-ffff-ffff-ffffffffff00"),
            Err(DecodeError::InvalidWidthMarker(0))
        );
    }

    #[test]
    fn test_decode_with_options_lenient() {
        let value = decode_with_options(
            "ffffffff-ffff-ffff-ffff-ffffffffff00",
            DecodeOptions::lenient(),
        )
        .unwrap();
        assert!(value.is_zero());
    }
}
