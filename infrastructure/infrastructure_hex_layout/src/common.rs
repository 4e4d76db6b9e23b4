//! Hex layout errors
//!
//! Every variant means "not a UUID-shaped buffer or string"; callers that only
//! need a single malformed-input category can wrap the whole enum.

use std::fmt;

/// Hex layout error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexLayoutError {
    /// Buffer handed to encode was not 16 bytes
    InvalidBufferLength(usize),
    /// Text was not 36 bytes long
    InvalidLength(usize),
    /// A hyphen was required at this offset
    MissingHyphen { position: usize },
    /// Byte at this offset is not a hex digit
    InvalidHexDigit { position: usize, found: u8 },
}

impl fmt::Display for HexLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexLayoutError::InvalidBufferLength(len) => {
                write!(f, "Invalid buffer length: expected 16 bytes, got {}", len)
            }
            HexLayoutError::InvalidLength(len) => {
                write!(f, "Invalid UUID length: expected 36 characters, got {}", len)
            }
            HexLayoutError::MissingHyphen { position } => {
                write!(f, "Missing hyphen at offset {}", position)
            }
            HexLayoutError::InvalidHexDigit { position, found } => {
                write!(f, "Invalid hex digit 0x{:02x} at offset {}", found, position)
            }
        }
    }
}

impl std::error::Error for HexLayoutError {}

/// Result type for hex layout operations
pub type HexLayoutResult<T> = Result<T, HexLayoutError>;
