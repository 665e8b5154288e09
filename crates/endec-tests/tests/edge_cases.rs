//! Edge cases around exhaustion, truncation, and malformed varints.
//!
//! - **Exhaustion**: once the cursor reaches the end, every consuming read
//!   fails and leaves the cursor in place.
//! - **Truncation vs overflow**: a varint cut off by the region end is an
//!   `UnexpectedEof`; a varint too large for its target is a
//!   `VarintOverflow`. The two never collapse into each other.
//! - **Shared regions**: independent decoders over one slice do not
//!   interfere, including across threads.

use endec_tests::encode_unsigned;
use endec_wire::{DecodeError, Decoder, Endian};

// ── Exhaustion ────────────────────────────────────────────────────────────────

#[test]
fn four_byte_buffer_exhausts_cleanly() {
    // RUST_LOG=endec_wire=debug shows each rejected read.
    let _ = env_logger::builder().is_test(true).try_init();

    let buf = [0xE5, 0x8E, 0x26, 0x01];
    let mut decoder = Decoder::new(&buf, Endian::Little).unwrap();

    assert_eq!(decoder.consume_leb128::<u32>().unwrap(), (624_485, 3));
    assert_eq!(decoder.consume::<u8>().unwrap(), (1, 1));
    assert_eq!(decoder.position(), 4);
    assert!(decoder.is_exhausted());

    assert!(decoder.consume::<u8>().is_err());
    assert!(decoder.consume::<i16>().is_err());
    assert!(decoder.consume_bytes(1).is_err());
    assert!(decoder.consume_array::<1>().is_err());
    assert!(decoder.consume_leb128::<u64>().is_err());
    assert!(decoder.skip(1).is_err());
    assert_eq!(decoder.position(), 4);

    // Zero-length requests still succeed at the end.
    assert_eq!(decoder.consume_bytes(0).unwrap(), &[] as &[u8]);
    assert_eq!(decoder.skip(0).unwrap(), 0);
}

#[test]
fn cursor_never_exceeds_end() {
    let buf: Vec<u8> = (0..32).collect();
    let mut decoder = Decoder::new(&buf, Endian::Big).unwrap();
    let mut step = 0usize;
    while !decoder.is_exhausted() {
        let before = decoder.position();
        let ok = match step % 4 {
            0 => decoder.consume::<u32>().is_ok(),
            1 => decoder.consume::<u8>().is_ok(),
            2 => decoder.consume_bytes(3).is_ok(),
            _ => decoder.consume::<u64>().is_ok(),
        };
        assert!(decoder.position() >= before);
        assert!(decoder.position() <= decoder.end());
        if !ok {
            assert_eq!(decoder.position(), before);
            decoder.skip(1).unwrap();
        }
        step += 1;
    }
    assert_eq!(decoder.position(), buf.len());
}

// ── Truncation vs overflow ────────────────────────────────────────────────────

#[test]
fn varint_truncated_by_region_end() {
    let full = encode_unsigned(u64::from(u32::MAX));
    for cut in 1..full.len() {
        let decoder = Decoder::new(&full[..cut], Endian::Little).unwrap();
        assert_eq!(
            decoder.read_leb128::<u32>(0),
            Err(DecodeError::UnexpectedEof {
                offset: 0,
                needed: cut + 1,
                available: cut
            }),
            "cut at {cut}"
        );
    }
}

#[test]
fn varint_never_reads_the_byte_after_the_region() {
    // The region is a prefix of a longer buffer. The byte after it would
    // terminate the varint, but it is outside the region.
    let backing = [0x80, 0x80, 0x01];
    let decoder = Decoder::new(&backing[..2], Endian::Little).unwrap();
    assert!(matches!(
        decoder.read_leb128::<u32>(0),
        Err(DecodeError::UnexpectedEof { .. })
    ));
}

#[test]
fn varint_too_long_for_target() {
    // Six continuation bytes: u32 accepts at most five.
    let buf = [0x80, 0x80, 0x80, 0x80, 0x80, 0x00];
    let decoder = Decoder::new(&buf, Endian::Little).unwrap();
    assert_eq!(
        decoder.read_leb128::<u32>(0),
        Err(DecodeError::VarintOverflow { offset: 0, bits: 32 })
    );
    // The same bytes are a valid (padded) zero for u64.
    assert_eq!(decoder.read_leb128::<u64>(0).unwrap(), (0, 6));
}

#[test]
fn overflow_at_cap_is_not_reported_as_truncation() {
    // Exactly the cap, all continuation bits: overflow, even though the
    // region also ends here.
    let buf = [0xFF, 0xFF];
    let decoder = Decoder::new(&buf, Endian::Little).unwrap();
    assert!(matches!(
        decoder.read_leb128::<u8>(0),
        Err(DecodeError::VarintOverflow { bits: 8, .. })
    ));
    // One byte short of the cap: truncation.
    assert!(matches!(
        decoder.read_leb128::<u8>(1),
        Err(DecodeError::UnexpectedEof { offset: 1, .. })
    ));
}

#[test]
fn mixed_stream() {
    // u16 BE, sleb32, 2 raw bytes, uleb64, i8
    let mut buf = vec![0x01, 0x02];
    buf.extend([0xC0, 0xBB, 0x78]);
    buf.extend(b"ok");
    buf.extend(encode_unsigned(u64::MAX));
    buf.push(0xFF);

    let mut decoder = Decoder::new(&buf, Endian::Big).unwrap();
    assert_eq!(decoder.consume::<u16>().unwrap(), (0x0102, 2));
    assert_eq!(decoder.consume_leb128::<i32>().unwrap(), (-123_456, 3));
    assert_eq!(decoder.consume_bytes(2).unwrap(), b"ok");
    assert_eq!(decoder.consume_leb128::<u64>().unwrap(), (u64::MAX, 10));
    assert_eq!(decoder.consume::<i8>().unwrap(), (-1, 1));
    assert!(decoder.is_exhausted());
    assert_eq!(decoder.position(), buf.len());
}

// ── Shared regions ────────────────────────────────────────────────────────────

#[test]
fn independent_decoders_share_a_region() {
    let buf: Vec<u8> = (0..64).collect();

    std::thread::scope(|s| {
        for start in [0usize, 8, 16, 24] {
            let region = &buf;
            s.spawn(move || {
                let mut decoder = Decoder::with_position(region, start, Endian::Little).unwrap();
                for i in 0..8 {
                    let (b, _) = decoder.consume::<u8>().unwrap();
                    assert_eq!(usize::from(b), start + i);
                }
            });
        }
    });
}

#[test]
fn peeks_do_not_disturb_consumption() {
    let buf = [0x10, 0x20, 0x30, 0x40];
    let mut decoder = Decoder::new(&buf, Endian::Little).unwrap();
    assert_eq!(decoder.read::<u8>(3).unwrap(), (0x40, 1));
    assert_eq!(decoder.read_bytes(1, 2).unwrap(), &[0x20, 0x30]);
    assert_eq!(decoder.read_array::<2>(2).unwrap(), [0x30, 0x40]);
    assert_eq!(decoder.consume::<u8>().unwrap(), (0x10, 1));
    assert_eq!(decoder.remaining(), &[0x20, 0x30, 0x40]);
}
