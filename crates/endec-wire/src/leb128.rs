//! LEB128 (Little-Endian Base 128) decoding.
//!
//! Each byte carries 7 value bits, least-significant group first. The high
//! bit (0x80) is set on every byte except the last. Signed values use the
//! same layout, with bit 0x40 of the final byte acting as the sign bit.
//!
//! | Bytes                | Unsigned  | Signed   |
//! |----------------------|-----------|----------|
//! | `[0x00]`             | 0         | 0        |
//! | `[0x3F]`             | 63        | 63       |
//! | `[0x7F]`             | 127       | -1       |
//! | `[0x80, 0x01]`       | 128       | 128      |
//! | `[0xE5, 0x8E, 0x26]` | 624485    | 624485   |
//! | `[0xC0, 0xBB, 0x78]` | 1973696   | -123456  |
//!
//! The decoders only look at the slice they are given, so the slice end is
//! the hard bound on how far they read. They accept at most
//! [`max_encoded_len`] bytes for the target width and reject encodings
//! whose final group carries bits the target cannot hold.

use crate::error::DecodeError;
use crate::int::{SignedLeb128, UnsignedLeb128};

const CONTINUATION_BIT: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;
const SIGN_BIT: u8 = 0x40;
const BITS_PER_BYTE: u32 = 7;

/// Longest encoding accepted for a `bits`-wide integer: `ceil(bits / 7)`.
///
/// 2 bytes for 8-bit, 3 for 16-bit, 5 for 32-bit, 10 for 64-bit.
#[must_use]
pub const fn max_encoded_len(bits: u32) -> usize {
    bits.div_ceil(BITS_PER_BYTE) as usize
}

/// Decode an unsigned LEB128 value from the front of `src`.
///
/// # Returns
///
/// `(value, bytes_consumed)` on success. `bytes_consumed` is always at
/// least 1 and includes the terminating byte.
///
/// # Errors
///
/// - [`DecodeError::UnexpectedEof`] if `src` ends before a terminating
///   byte (including an empty `src`).
/// - [`DecodeError::VarintOverflow`] if no terminating byte appears within
///   [`max_encoded_len`] bytes, or the last group has bits set above
///   `T::BITS`.
///
/// Error offsets are relative to the start of `src`.
pub fn decode_unsigned<T: UnsignedLeb128>(src: &[u8]) -> Result<(T, usize), DecodeError> {
    let groups = collect_groups(src, T::BITS, false)?;
    Ok((T::from_u64(groups.value), groups.len))
}

/// Decode a signed LEB128 value from the front of `src`.
///
/// Groups accumulate exactly as in [`decode_unsigned`]. If the final byte
/// has its sign bit (0x40) set and fewer than `T::BITS` bits were filled,
/// the remaining high bits are set to 1.
///
/// # Errors
///
/// Same as [`decode_unsigned`]. For the signed case the last group's bits
/// above `T::BITS` must all repeat the value's sign bit, otherwise the
/// value does not fit and [`DecodeError::VarintOverflow`] is returned.
pub fn decode_signed<T: SignedLeb128>(src: &[u8]) -> Result<(T, usize), DecodeError> {
    let groups = collect_groups(src, T::BITS, true)?;

    let mut value = groups.value;
    if groups.shift < T::BITS && groups.last & SIGN_BIT != 0 {
        value |= !0u64 << groups.shift;
    }

    #[allow(clippy::cast_possible_wrap)]
    let value = value as i64;
    Ok((T::from_i64(value), groups.len))
}

/// Raw accumulator state after the terminating byte.
struct Groups {
    value: u64,
    shift: u32,
    last: u8,
    len: usize,
}

fn collect_groups(src: &[u8], bits: u32, signed: bool) -> Result<Groups, DecodeError> {
    let max_len = max_encoded_len(bits);
    let mut value: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in src.iter().take(max_len).enumerate() {
        let group = byte & PAYLOAD_MASK;

        // Last group the target can hold: it must terminate and must not
        // carry bits past the target width.
        if shift + BITS_PER_BYTE > bits
            && (byte & CONTINUATION_BIT != 0 || !final_group_fits(group, bits - shift, signed))
        {
            return Err(DecodeError::VarintOverflow { offset: 0, bits });
        }

        value |= u64::from(group) << shift;
        shift += BITS_PER_BYTE;

        if byte & CONTINUATION_BIT == 0 {
            return Ok(Groups {
                value,
                shift,
                last: byte,
                len: i + 1,
            });
        }
    }

    if src.len() >= max_len {
        // Only reachable when `bits` is a multiple of 7.
        Err(DecodeError::VarintOverflow { offset: 0, bits })
    } else {
        Err(DecodeError::UnexpectedEof {
            offset: 0,
            needed: src.len() + 1,
            available: src.len(),
        })
    }
}

/// Whether a final 7-bit group with `used` meaningful low bits fits.
///
/// Unsigned: the spill bits above `used` are zero. Signed: they all equal
/// the top meaningful bit.
fn final_group_fits(group: u8, used: u32, signed: bool) -> bool {
    let spill = PAYLOAD_MASK & !((1u8 << used) - 1);
    let expected = if signed && group & (1u8 << (used - 1)) != 0 {
        spill
    } else {
        0
    };
    group & spill == expected
}
