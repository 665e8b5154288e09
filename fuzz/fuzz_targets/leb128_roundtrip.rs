#![no_main]

use endec_tests::{encode_signed, encode_unsigned};
use endec_wire::{Decoder, Endian};
use libfuzzer_sys::fuzz_target;

// Fuzz target: reference encode -> Decoder::read_leb128 roundtrip.
//
// Takes 8 bytes of fuzz input as a u64, encodes it as unsigned and (as an
// i64) signed LEB128, then decodes both and asserts the values and byte
// counts match.

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value = u64::from_le_bytes(data[..8].try_into().unwrap());

    let buf = encode_unsigned(value);
    let decoder = Decoder::new(&buf, Endian::Little).unwrap();
    assert_eq!(decoder.read_leb128::<u64>(0).unwrap(), (value, buf.len()));
    if let Ok(narrow) = u32::try_from(value) {
        assert_eq!(decoder.read_leb128::<u32>(0).unwrap(), (narrow, buf.len()));
    } else {
        assert!(decoder.read_leb128::<u32>(0).is_err());
    }

    let signed = value as i64;
    let buf = encode_signed(signed);
    let decoder = Decoder::new(&buf, Endian::Big).unwrap();
    assert_eq!(decoder.read_leb128::<i64>(0).unwrap(), (signed, buf.len()));
    if let Ok(narrow) = i16::try_from(signed) {
        assert_eq!(decoder.read_leb128::<i16>(0).unwrap(), (narrow, buf.len()));
    } else {
        assert!(decoder.read_leb128::<i16>(0).is_err());
    }
});
