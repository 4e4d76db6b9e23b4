//! Infrastructure Layer: Bignum Encoding
//!
//! Encodes non-negative big integers as UUID-shaped strings and decodes them
//! back.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate sits on top of the entities
//! layer (`BigNumber`, `BitWidth`, `FixedLayout`) and the hex layout codec.
//! An encoded value is a 16-byte buffer rendered as UUID text:
//!
//! ```text
//! | MD5(payload) prefix | payload, big-endian | width in bits |
//! ```
//!
//! ## Codecs
//!
//! - **[`bit_width_codec`](bit_width_codec/index.html)**: `encode`, `decode`,
//!   layout inspection and the canonical-form check.
//! - **[`prefix`](prefix/index.html)**: The MD5 prefix source.
//! - **[`options`](options/index.html)**: Strict or lenient width-marker handling.
//!
//! ## See Also
//!
//! - [`infrastructure_hex_layout`](../infrastructure_hex_layout/index.html): Text form of the buffer

mod common;

pub mod bit_width_codec;
pub mod options;
pub mod prefix;

pub use bit_width_codec::BitWidthCodec;
pub use options::{DecodeOptions, WidthMarkerPolicy};
pub use prefix::PrefixDigest;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};
