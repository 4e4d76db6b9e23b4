//! Integration tests for api_facades crate
//!
//! These tests exercise the public encode/decode surface end-to-end,
//! including the fixed scenarios that pin byte compatibility.

use api_facades::*;
use std::error::Error;

const SCENARIOS: [(u128, &str); 3] = [
    (3, "86666835-06aa-cd90-0bbd-5a74ac4e0308"),
    (4322343, "07bfef02-a615-2803-edf7-8bc841f42718"),
    (
        1329227995784915872903807060280344575,
        "ffffffff-ffff-ffff-ffff-ffffffffff78",
    ),
];

#[test]
fn test_scenarios_encode_exactly() {
    for (value, expected) in SCENARIOS {
        assert_eq!(encode(&BigNumber::from_u128(value)).unwrap(), expected);
        assert_eq!(encode_u128(value).unwrap(), expected);
    }
}

#[test]
fn test_scenarios_decode_exactly() {
    for (value, text) in SCENARIOS {
        assert_eq!(decode(text).unwrap(), BigNumber::from_u128(value));
        assert_eq!(decode_u128(text).unwrap(), value);
        assert_eq!(decode(&text.to_uppercase()).unwrap(), BigNumber::from_u128(value));
    }
}

#[test]
fn test_roundtrip_spread_of_values() {
    // Multiplicative walk touching every width
    let mut value: u128 = 0;
    while value < (1u128 << 120) {
        let text = encode_u128(value).unwrap();
        assert_eq!(decode_u128(&text).unwrap(), value);
        value = value * 3 + 7;
    }
}

#[test]
fn test_malachite_integer_input() {
    let number = BigNumber::from_integer(Integer::from(4322343u64));
    assert_eq!(
        encode(&number).unwrap(),
        "07bfef02-a615-2803-edf7-8bc841f42718"
    );
}

#[test]
fn test_errors() {
    assert_eq!(encode(&BigNumber::from_i64(-7)), Err(EncodeError::InvalidInput));
    assert_eq!(
        encode_u128(1u128 << 120),
        Err(EncodeError::WidthOverflow { bits: 121 })
    );
    assert_eq!(
        decode("86666835-06aa-cd90-0bbd-5a74ac4e03"),
        Err(DecodeError::MalformedUuid(HexLayoutError::InvalidLength(34)))
    );
    assert_eq!(
        decode("ffffffff-ffff-ffff-ffff-ffffffffff79"),
        Err(DecodeError::InvalidWidthMarker(0x79))
    );
}

#[test]
fn test_errors_render_as_std_errors() {
    let err: Box<dyn Error> = Box::new(decode("bad").unwrap_err());
    assert!(err.to_string().contains("Malformed UUID"));
    assert!(err.source().is_some());
}

#[test]
fn test_lenient_policy_via_options() {
    let options = DecodeOptions {
        width_marker: WidthMarkerPolicy::Lenient,
    };
    let value = decode_with_options("ffffffff-ffff-ffff-ffff-ffffffffff79", options).unwrap();
    assert_eq!(value.to_u128(), Some((1u128 << 120) - 1));
}
