//! Infrastructure Layer: Hex Layout
//!
//! Provides the text side of the UUID codec: turning a 16-byte buffer into
//! the familiar `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form and back.
//!
//! ## Overview
//!
//! - **[`hex_layout_codec`](hex_layout_codec/index.html)**: Encoding always
//!   emits lowercase digits. Decoding accepts either case but is otherwise
//!   strict: exact length, hyphens at offsets 8, 13, 18 and 23, hex digits
//!   everywhere else.
//!
//! This crate has no knowledge of how the buffer is laid out; see
//! `infrastructure_bignum_encoding` for that.

mod common;

pub mod hex_layout_codec;

pub use hex_layout_codec::{HexLayoutCodec, HYPHEN_OFFSETS, UUID_TEXT_LEN};

pub use common::{HexLayoutError, HexLayoutResult};
