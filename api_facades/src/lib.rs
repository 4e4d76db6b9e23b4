//! API Facades Layer
//!
//! Public surface of the workspace: encode a non-negative integer below
//! 2^120 as a UUID-shaped string (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`)
//! and decode such a string back to the same integer.
//!
//! All facades call underlying Rust modules from inner layers and are pure
//! functions: no I/O, no shared state.
//!
//! ```rust
//! use api_facades::{decode, encode, BigNumber};
//!
//! let n = BigNumber::parse("1329227995784915872903807060280344575").unwrap();
//! let text = encode(&n).unwrap();
//! assert_eq!(text, "ffffffff-ffff-ffff-ffff-ffffffffff78");
//! assert_eq!(decode(&text).unwrap(), n);
//! ```

pub mod integer_facades;

// Re-export main facade functions
pub use integer_facades::*;

// Types callers need to build inputs and match on errors
pub use entities_uuid_layout::{BigNumber, BitWidth, FixedLayout};
pub use infrastructure_bignum_encoding::{
    DecodeError, DecodeOptions, EncodeError, WidthMarkerPolicy,
};
pub use infrastructure_hex_layout::HexLayoutError;
pub use malachite::Integer;
