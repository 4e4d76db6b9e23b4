//! Big Number Operations
//!
//! Provides the arbitrary precision integer accepted and returned by the codecs.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! The public API accepts any signed value so that negative input can be
//! reported as an error instead of being unrepresentable; only values that
//! fit the fixed layout (at most 120 bits) are ever narrowed to `u128`.

use std::fmt;

use malachite::base::num::logic::traits::SignificantBits;
use malachite::Integer;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u128
    pub fn from_u128(value: u128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Wrap an existing malachite `Integer`
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Parse a base-10 string, with an optional leading `-`
    ///
    /// # Returns
    ///
    /// * `Some(BigNumber)` - If the string is a valid decimal integer
    /// * `None` - Otherwise
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_uuid_layout::BigNumber;
    ///
    /// let n = BigNumber::parse("1329227995784915872903807060280344575").unwrap();
    /// assert_eq!(n.to_u128(), Some((1u128 << 120) - 1));
    /// assert!(BigNumber::parse("12a").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        text.parse::<Integer>().ok().map(Self::from_integer)
    }

    /// Get access to the underlying `malachite::Integer` value
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Consume the wrapper and return the underlying `malachite::Integer`
    pub fn into_integer(self) -> Integer {
        self.value
    }

    /// Convert to u128
    ///
    /// Returns None if the value is negative or does not fit in 128 bits
    pub fn to_u128(&self) -> Option<u128> {
        u128::try_from(&self.value).ok()
    }

    /// Check if the number is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < Integer::from(0)
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == Integer::from(0)
    }

    /// Check if the number is one
    pub fn is_one(&self) -> bool {
        self.value == Integer::from(1)
    }

    /// Number of significant bits in the absolute value
    ///
    /// Zero has no significant bits; one has a single bit; `2^k` has `k + 1`.
    pub fn significant_bits(&self) -> u64 {
        (&self.value).significant_bits()
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for BigNumber {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_bits_small_values() {
        assert_eq!(BigNumber::from_u64(0).significant_bits(), 0);
        assert_eq!(BigNumber::from_u64(1).significant_bits(), 1);
        assert_eq!(BigNumber::from_u64(255).significant_bits(), 8);
        assert_eq!(BigNumber::from_u64(256).significant_bits(), 9);
    }

    #[test]
    fn test_significant_bits_beyond_u128() {
        let big = BigNumber::from_integer(Integer::from(u128::MAX) + Integer::from(1));
        assert_eq!(big.significant_bits(), 129);
        assert_eq!(big.to_u128(), None);
    }

    #[test]
    fn test_sign_predicates() {
        assert!(BigNumber::from_i64(-1).is_negative());
        assert!(!BigNumber::from_i64(0).is_negative());
        assert!(BigNumber::from_i64(0).is_zero());
        assert!(BigNumber::from_i64(1).is_one());
        assert!(!BigNumber::from_i64(-1).is_one());
    }

    #[test]
    fn test_to_u128_rejects_negative() {
        assert_eq!(BigNumber::from_i64(-5).to_u128(), None);
        assert_eq!(BigNumber::from_i64(5).to_u128(), Some(5));
    }

    #[test]
    fn test_parse_and_display() {
        let n = BigNumber::parse("-42").unwrap();
        assert!(n.is_negative());
        assert_eq!(n.to_string(), "-42");
        assert!(BigNumber::parse("").is_none());
        assert!(BigNumber::parse("0x10").is_none());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(BigNumber::from(7u64), BigNumber::from_u128(7));
        assert_eq!(BigNumber::from(Integer::from(9)), BigNumber::from_i64(9));
    }
}
