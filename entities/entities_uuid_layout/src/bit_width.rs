//! Bit Width
//!
//! The whole-byte width chosen for a payload: a multiple of 8 in `8..=120`.

use crate::layout::{LAYOUT_BYTES, PAYLOAD_CAPACITY_BITS};

/// Payload width in bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(u8);

impl BitWidth {
    /// Smallest width, one byte
    pub const MIN: BitWidth = BitWidth(8);
    /// Largest width, leaving room only for the width marker
    pub const MAX: BitWidth = BitWidth(PAYLOAD_CAPACITY_BITS as u8);

    /// Round a significant-bit count up to a whole number of bytes
    ///
    /// Counts of 0 and 1 (the values zero and one) map to the one-byte
    /// minimum. Returns `None` when the result would exceed 120 bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_uuid_layout::BitWidth;
    ///
    /// assert_eq!(BitWidth::from_bits_needed(9).unwrap().bits(), 16);
    /// assert!(BitWidth::from_bits_needed(121).is_none());
    /// ```
    pub fn from_bits_needed(bits: u64) -> Option<Self> {
        if bits > u64::from(PAYLOAD_CAPACITY_BITS) {
            return None;
        }
        let bytes = bits.div_ceil(8).max(1);
        Some(BitWidth((bytes * 8) as u8))
    }

    /// Validate a width marker read back from a layout
    ///
    /// Only the values this encoder can emit are accepted: non-zero
    /// multiples of 8 up to 120.
    pub fn from_marker(marker: u8) -> Option<Self> {
        if marker == 0 || marker % 8 != 0 || u32::from(marker) > PAYLOAD_CAPACITY_BITS {
            return None;
        }
        Some(BitWidth(marker))
    }

    /// Width in bits
    pub fn bits(self) -> u32 {
        u32::from(self.0)
    }

    /// Width in bytes
    pub fn bytes(self) -> usize {
        usize::from(self.0 / 8)
    }

    /// Number of digest bytes placed in front of the payload
    pub fn prefix_bytes(self) -> usize {
        LAYOUT_BYTES - 1 - self.bytes()
    }

    /// Value stored in the trailing width-marker byte
    pub fn marker(self) -> u8 {
        self.0
    }

    /// Big-endian rendering of `value` in exactly `self.bytes()` bytes
    ///
    /// Bits above the width are dropped; callers size the width first.
    pub fn payload_bytes(self, value: u128) -> Vec<u8> {
        value.to_be_bytes()[LAYOUT_BYTES - self.bytes()..].to_vec()
    }
}
