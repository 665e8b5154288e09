#![no_main]

use arbitrary::Arbitrary;
use endec_wire::{Decoder, Endian};
use libfuzzer_sys::fuzz_target;

// Fuzz target: arbitrary sequences of decoder operations.
//
// After every operation:
// - the cursor stays within [0, end]
// - a successful consume advances by exactly the reported count
// - a failed consume leaves the cursor untouched
#[derive(Debug, Arbitrary)]
enum Op {
    U8,
    U16,
    I32,
    U64,
    Bytes(u8),
    Array4,
    Uleb32,
    Uleb64,
    Sleb16,
    Sleb64,
    Skip(u8),
    Peek(u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    big_endian: bool,
    start: u8,
    buf: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let endian = if input.big_endian { Endian::Big } else { Endian::Little };
    let start = usize::from(input.start);
    let Ok(mut decoder) = Decoder::with_position(&input.buf, start, endian) else {
        assert!(input.buf.is_empty() || start > input.buf.len());
        return;
    };

    for op in input.ops {
        let before = decoder.position();
        let result = match op {
            Op::U8 => decoder.consume::<u8>().map(|(_, n)| n),
            Op::U16 => decoder.consume::<u16>().map(|(_, n)| n),
            Op::I32 => decoder.consume::<i32>().map(|(_, n)| n),
            Op::U64 => decoder.consume::<u64>().map(|(_, n)| n),
            Op::Bytes(len) => decoder.consume_bytes(usize::from(len)).map(<[u8]>::len),
            Op::Array4 => decoder.consume_array::<4>().map(|a| a.len()),
            Op::Uleb32 => decoder.consume_leb128::<u32>().map(|(_, n)| n),
            Op::Uleb64 => decoder.consume_leb128::<u64>().map(|(_, n)| n),
            Op::Sleb16 => decoder.consume_leb128::<i16>().map(|(_, n)| n),
            Op::Sleb64 => decoder.consume_leb128::<i64>().map(|(_, n)| n),
            Op::Skip(n) => decoder.skip(usize::from(n)),
            Op::Peek(pos) => {
                let _ = decoder.read::<u32>(usize::from(pos));
                let _ = decoder.read_leb128::<u64>(usize::from(pos));
                Ok(0)
            }
        };

        match result {
            Ok(n) => assert_eq!(decoder.position(), before + n),
            Err(_) => assert_eq!(decoder.position(), before),
        }
        assert!(decoder.position() <= decoder.end());
        assert_eq!(decoder.remaining_len(), decoder.end() - decoder.position());
    }
});
