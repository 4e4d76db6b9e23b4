//! Common Encoding/Decoding Errors
//!
//! Error types shared by every entry point of the bit-width codec.
//!
//! ## See Also
//!
//! - [`bit_width_codec`](super::bit_width_codec/index.html): Produces and consumes these errors

use std::fmt;

use entities_uuid_layout::InvalidWidthMarker;
use infrastructure_hex_layout::HexLayoutError;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Negative integers have no encoding
    InvalidInput,
    /// Value needs more than 120 bits
    WidthOverflow {
        /// Significant bits of the rejected value
        bits: u64,
    },
    /// Buffer rejected by the hex layout
    Layout(HexLayoutError),
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not a UUID-shaped string
    MalformedUuid(HexLayoutError),
    /// Trailing byte is not a width this encoder emits
    InvalidWidthMarker(u8),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidInput => write!(f, "Invalid input: negative integers cannot be encoded"),
            EncodeError::WidthOverflow { bits } => write!(
                f,
                "Width overflow: value needs {} bits, at most 120 are available",
                bits
            ),
            EncodeError::Layout(err) => write!(f, "Layout error: {}", err),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedUuid(err) => write!(f, "Malformed UUID: {}", err),
            DecodeError::InvalidWidthMarker(marker) => write!(
                f,
                "Invalid width marker {}: expected a multiple of 8 between 8 and 120",
                marker
            ),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Layout(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::MalformedUuid(err) => Some(err),
            DecodeError::InvalidWidthMarker(_) => None,
        }
    }
}

impl From<HexLayoutError> for EncodeError {
    fn from(err: HexLayoutError) -> Self {
        EncodeError::Layout(err)
    }
}

impl From<HexLayoutError> for DecodeError {
    fn from(err: HexLayoutError) -> Self {
        DecodeError::MalformedUuid(err)
    }
}

impl From<InvalidWidthMarker> for DecodeError {
    fn from(err: InvalidWidthMarker) -> Self {
        DecodeError::InvalidWidthMarker(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_encode_error_display() {
        assert!(EncodeError::InvalidInput.to_string().contains("negative"));
        assert!(EncodeError::WidthOverflow { bits: 121 }.to_string().contains("121"));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::from(HexLayoutError::InvalidLength(4));
        assert!(err.to_string().starts_with("Malformed UUID"));
        assert!(DecodeError::InvalidWidthMarker(9).to_string().contains('9'));
    }

    #[test]
    fn test_error_sources() {
        let layout = HexLayoutError::InvalidBufferLength(3);
        assert!(EncodeError::from(layout).source().is_some());
        assert!(EncodeError::InvalidInput.source().is_none());
        assert!(DecodeError::from(layout).source().is_some());
        assert!(DecodeError::InvalidWidthMarker(0).source().is_none());
    }

    #[test]
    fn test_from_invalid_width_marker() {
        assert_eq!(
            DecodeError::from(InvalidWidthMarker(200)),
            DecodeError::InvalidWidthMarker(200)
        );
    }
}
