//! Fixed Layout Buffer
//!
//! The 128-bit buffer behind every encoded UUID, partitioned left to right:
//!
//! ```text
//! | prefix (120 - w bits) | payload (w bits) | width marker (8 bits) |
//! ```
//!
//! The prefix is filler taken from a digest of the payload. It carries no
//! information: reading a layout back only ever looks at the payload and the
//! marker.

use std::fmt;

use crate::bit_width::BitWidth;

/// Size of the buffer in bytes
pub const LAYOUT_BYTES: usize = 16;

/// Bits available to prefix plus payload
pub const PAYLOAD_CAPACITY_BITS: u32 = 120;

/// Size of the digest the prefix is cut from
pub const DIGEST_BYTES: usize = 16;

/// Index of the trailing width-marker byte
pub const MARKER_INDEX: usize = LAYOUT_BYTES - 1;

/// A width marker outside the set of widths this encoder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWidthMarker(pub u8);

impl fmt::Display for InvalidWidthMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid width marker {}: expected a multiple of 8 between 8 and 120",
            self.0
        )
    }
}

impl std::error::Error for InvalidWidthMarker {}

/// A validated 16-byte layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedLayout {
    bytes: [u8; LAYOUT_BYTES],
    width: BitWidth,
}

impl FixedLayout {
    /// Build a layout from a payload value and the digest of its bytes
    ///
    /// # Arguments
    ///
    /// * `width` - Payload width; `payload` must fit in it
    /// * `payload` - The integer to store
    /// * `digest` - Digest of the payload bytes, cut down to the prefix length
    pub fn assemble(width: BitWidth, payload: u128, digest: &[u8; DIGEST_BYTES]) -> Self {
        let prefix_len = width.prefix_bytes();
        let mut bytes = [0u8; LAYOUT_BYTES];
        bytes[..prefix_len].copy_from_slice(&digest[..prefix_len]);
        bytes[prefix_len..MARKER_INDEX].copy_from_slice(&width.payload_bytes(payload));
        bytes[MARKER_INDEX] = width.marker();
        Self { bytes, width }
    }

    /// Parse a raw buffer, validating its width marker
    ///
    /// # Returns
    ///
    /// * `Ok(FixedLayout)` - If the trailing byte is a width this encoder emits
    /// * `Err(InvalidWidthMarker)` - Otherwise
    pub fn parse(bytes: [u8; LAYOUT_BYTES]) -> Result<Self, InvalidWidthMarker> {
        let marker = bytes[MARKER_INDEX];
        let width = BitWidth::from_marker(marker).ok_or(InvalidWidthMarker(marker))?;
        Ok(Self { bytes, width })
    }

    /// Payload width
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// Leading digest bytes
    pub fn prefix(&self) -> &[u8] {
        &self.bytes[..self.width.prefix_bytes()]
    }

    /// Payload bytes, big-endian
    pub fn payload(&self) -> &[u8] {
        &self.bytes[self.width.prefix_bytes()..MARKER_INDEX]
    }

    /// Payload interpreted as a big-endian unsigned integer
    pub fn payload_value(&self) -> u128 {
        self.payload()
            .iter()
            .fold(0u128, |acc, &byte| (acc << 8) | u128::from(byte))
    }

    /// Raw buffer
    pub fn as_bytes(&self) -> &[u8; LAYOUT_BYTES] {
        &self.bytes
    }

    /// Consume the layout and return the raw buffer
    pub fn into_bytes(self) -> [u8; LAYOUT_BYTES] {
        self.bytes
    }
}
