//! Error messages, pinned with inline insta snapshots.
//!
//! These strings surface in the CLI's `error:` output, so changes to them
//! should be deliberate.

use endec_wire::{DecodeError, Decoder, Endian, RegionError};
use insta::assert_snapshot;

#[test]
fn truncated_fixed_read_message() {
    let buf = [0x01, 0x02, 0x03];
    let decoder = Decoder::new(&buf, Endian::Little).unwrap();
    let err = decoder.read::<u32>(1).unwrap_err();
    assert_snapshot!(err.to_string(), @"unexpected end of input at offset 1: need 4 bytes, have 2");
}

#[test]
fn truncated_varint_message() {
    let buf = [0x00, 0xE5, 0x8E];
    let mut decoder = Decoder::with_position(&buf, 1, Endian::Little).unwrap();
    let err = decoder.consume_leb128::<u32>().unwrap_err();
    assert_snapshot!(err.to_string(), @"unexpected end of input at offset 1: need 3 bytes, have 2");
    assert_eq!(err.offset(), 1);
}

#[test]
fn overflow_message() {
    let buf = [0xFF, 0xFF, 0x7F];
    let decoder = Decoder::new(&buf, Endian::Little).unwrap();
    let err = decoder.read_leb128::<u8>(0).unwrap_err();
    assert!(matches!(err, DecodeError::VarintOverflow { .. }));
    assert_snapshot!(err.to_string(), @"varint at offset 0 does not fit in 8 bits");
}

#[test]
fn region_messages() {
    assert_snapshot!(RegionError::Empty.to_string(), @"byte region is empty");

    let buf = [0u8; 2];
    let err = Decoder::with_position(&buf, 3, Endian::Big).unwrap_err();
    assert_snapshot!(err.to_string(), @"cursor 3 is outside a region of 2 bytes");
}

#[test]
fn endian_parse_message() {
    let err = "middle".parse::<Endian>().unwrap_err();
    assert_snapshot!(err.to_string(), @r#"unknown byte order "middle", expected `little` or `big`"#);
}
