//! Decode Options
//!
//! Controls how the trailing width marker is treated when reading a UUID back.

/// Width marker handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthMarkerPolicy {
    /// Reject markers this encoder never emits (0, above 120, not a multiple of 8)
    #[default]
    Strict,
    /// Read any marker: clamp it to 120 and take that many trailing payload
    /// bits. A marker of 0 yields zero.
    Lenient,
}

/// Options for decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// How to treat the width marker
    pub width_marker: WidthMarkerPolicy,
}

impl DecodeOptions {
    /// Strict decoding (the default)
    pub fn strict() -> Self {
        Self {
            width_marker: WidthMarkerPolicy::Strict,
        }
    }

    /// Lenient decoding
    pub fn lenient() -> Self {
        Self {
            width_marker: WidthMarkerPolicy::Lenient,
        }
    }
}
