//! Entities Layer: UUID Layout
//!
//! Provides the value types shared by the codecs:
//! - Big numbers (arbitrary precision input and output)
//! - Bit widths (whole-byte payload sizes)
//! - The fixed 128-bit layout (prefix, payload, width marker)
//!
//! Nothing here hashes or formats text; those concerns live in the
//! infrastructure layer.

pub mod big;
pub mod bit_width;
pub mod layout;

pub use big::BigNumber;
pub use bit_width::BitWidth;
pub use layout::{
    FixedLayout, InvalidWidthMarker, DIGEST_BYTES, LAYOUT_BYTES, MARKER_INDEX,
    PAYLOAD_CAPACITY_BITS,
};
