#![warn(clippy::pedantic)]

//! Reference LEB128 encoders for building decoder test inputs.
//!
//! These produce the minimal encoding of a value. They exist only so tests
//! and benches can generate inputs; `endec-wire` does not encode.

/// Maximum LEB128 length for a 64-bit value.
pub const MAX_LEB128_LEN: usize = 10;

/// Encode `value` as minimal unsigned LEB128.
///
/// | Value   | Encoded bytes        |
/// |---------|----------------------|
/// | 0       | `[0x00]`             |
/// | 127     | `[0x7F]`             |
/// | 128     | `[0x80, 0x01]`       |
/// | 624485  | `[0xE5, 0x8E, 0x26]` |
#[must_use]
pub fn encode_unsigned(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_LEB128_LEN);
    loop {
        // Low 7 bits, continuation bit if anything is left.
        #[allow(clippy::cast_possible_truncation)]
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            return out;
        }
    }
}

/// Encode `value` as minimal signed LEB128.
///
/// Stops once the remaining value is pure sign extension of the last
/// group's 0x40 bit.
#[must_use]
pub fn encode_signed(mut value: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_LEB128_LEN);
    loop {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        let done = (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0);
        if done {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Number of significant bits in `value` (at least 1, so zero counts as 1).
#[must_use]
pub fn significant_bits(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).max(1)
}

/// Expected unsigned encoding length: `ceil(significant_bits / 7)`.
#[must_use]
pub fn unsigned_len(value: u64) -> usize {
    significant_bits(value).div_ceil(7) as usize
}

/// A deterministic spread of `u64` values: powers of two, their
/// neighbours, and LEB128 group boundaries.
#[must_use]
pub fn sample_u64() -> Vec<u64> {
    let mut values = vec![0, 1, u64::MAX];
    for shift in 0..64 {
        let p = 1u64 << shift;
        values.extend([p - 1, p, p.saturating_add(1)]);
    }
    for groups in 1..=9 {
        let boundary = 1u64 << (7 * groups);
        values.extend([boundary - 1, boundary]);
    }
    values.sort_unstable();
    values.dedup();
    values
}

/// Signed counterpart of [`sample_u64`]: every sample and its negation,
/// plus the extremes.
#[must_use]
pub fn sample_i64() -> Vec<i64> {
    let mut values = vec![i64::MIN, i64::MAX, 0, -1];
    for v in sample_u64() {
        if let Ok(v) = i64::try_from(v) {
            values.extend([v, -v]);
        }
    }
    values.sort_unstable();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_known_encodings() {
        assert_eq!(encode_unsigned(0), vec![0x00]);
        assert_eq!(encode_unsigned(127), vec![0x7F]);
        assert_eq!(encode_unsigned(128), vec![0x80, 0x01]);
        assert_eq!(encode_unsigned(624_485), vec![0xE5, 0x8E, 0x26]);
        assert_eq!(encode_unsigned(u64::MAX).len(), MAX_LEB128_LEN);
    }

    #[test]
    fn signed_known_encodings() {
        assert_eq!(encode_signed(0), vec![0x00]);
        assert_eq!(encode_signed(-1), vec![0x7F]);
        assert_eq!(encode_signed(63), vec![0x3F]);
        assert_eq!(encode_signed(64), vec![0xC0, 0x00]);
        assert_eq!(encode_signed(-64), vec![0x40]);
        assert_eq!(encode_signed(-123_456), vec![0xC0, 0xBB, 0x78]);
        assert_eq!(encode_signed(i64::MIN).len(), MAX_LEB128_LEN);
    }

    #[test]
    fn expected_lengths() {
        assert_eq!(unsigned_len(0), 1);
        assert_eq!(unsigned_len(127), 1);
        assert_eq!(unsigned_len(128), 2);
        assert_eq!(unsigned_len(u64::MAX), 10);
    }
}
