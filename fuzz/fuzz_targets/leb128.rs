#![no_main]

use endec_wire::leb128::{decode_signed, decode_unsigned, max_encoded_len};
use endec_wire::DecodeError;
use libfuzzer_sys::fuzz_target;

// Fuzz target: LEB128 decoders on arbitrary bytes, every width.
//
// Catches bugs in:
// - Reads past the end of the input slice
// - Byte counts larger than the per-width cap
// - Shift overflow panics on long continuation runs
// - Truncation reported as overflow or vice versa
fn check<T>(data: &[u8], bits: u32, result: Result<(T, usize), DecodeError>) {
    match result {
        Ok((_, n)) => {
            assert!(n >= 1);
            assert!(n <= data.len());
            assert!(n <= max_encoded_len(bits));
        }
        Err(DecodeError::UnexpectedEof { available, .. }) => {
            assert_eq!(available, data.len());
            assert!(data.len() < max_encoded_len(bits));
        }
        Err(DecodeError::VarintOverflow { bits: b, .. }) => assert_eq!(b, bits),
    }
}

fuzz_target!(|data: &[u8]| {
    check(data, 8, decode_unsigned::<u8>(data));
    check(data, 16, decode_unsigned::<u16>(data));
    check(data, 32, decode_unsigned::<u32>(data));
    check(data, 64, decode_unsigned::<u64>(data));
    check(data, 8, decode_signed::<i8>(data));
    check(data, 16, decode_signed::<i16>(data));
    check(data, 32, decode_signed::<i32>(data));
    check(data, 64, decode_signed::<i64>(data));
});
