use crate::endian::Endian;
use crate::error::DecodeError;
use crate::leb128;

mod sealed {
    pub trait Sealed {}
}

/// Integer types a [`Decoder`](crate::Decoder) can read at a fixed width.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32` and
/// `i64`. The trait is sealed.
pub trait FixedInt: sealed::Sealed + Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Build a value from the first [`SIZE`](Self::SIZE) bytes of `raw`.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is shorter than [`SIZE`](Self::SIZE). The decoder
    /// only calls this after its availability check has passed.
    fn from_bytes(raw: &[u8], endian: Endian) -> Self;
}

/// Integer types that can be decoded from LEB128.
///
/// [`decode_leb128`](Self::decode_leb128) picks the signed or unsigned
/// routine from the implementing type, so callers only name the target.
pub trait Leb128Int: sealed::Sealed + Copy {
    /// Width of the target in bits. Bounds how many bytes are accepted.
    const BITS: u32;

    /// Whether the encoding is read as signed LEB128.
    const SIGNED: bool;

    /// Decode one value from the front of `src`.
    ///
    /// # Errors
    ///
    /// See [`leb128::decode_unsigned`] and [`leb128::decode_signed`].
    fn decode_leb128(src: &[u8]) -> Result<(Self, usize), DecodeError>;
}

/// Unsigned LEB128 targets.
pub trait UnsignedLeb128: Leb128Int {
    /// Narrow a value already known to fit in [`BITS`](Leb128Int::BITS).
    fn from_u64(raw: u64) -> Self;
}

/// Signed LEB128 targets.
pub trait SignedLeb128: Leb128Int {
    /// Narrow a sign-extended value already known to fit in
    /// [`BITS`](Leb128Int::BITS).
    fn from_i64(raw: i64) -> Self;
}

macro_rules! impl_fixed_int {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl FixedInt for $t {
            const SIZE: usize = std::mem::size_of::<$t>();

            fn from_bytes(raw: &[u8], endian: Endian) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$t>()];
                bytes.copy_from_slice(&raw[..Self::SIZE]);
                match endian {
                    Endian::Little => <$t>::from_le_bytes(bytes),
                    Endian::Big => <$t>::from_be_bytes(bytes),
                }
            }
        }
    )*};
}

macro_rules! impl_unsigned_leb128 {
    ($($t:ty),* $(,)?) => {$(
        impl Leb128Int for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = false;

            fn decode_leb128(src: &[u8]) -> Result<(Self, usize), DecodeError> {
                leb128::decode_unsigned(src)
            }
        }

        impl UnsignedLeb128 for $t {
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_u64(raw: u64) -> Self {
                raw as $t
            }
        }
    )*};
}

macro_rules! impl_signed_leb128 {
    ($($t:ty),* $(,)?) => {$(
        impl Leb128Int for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = true;

            fn decode_leb128(src: &[u8]) -> Result<(Self, usize), DecodeError> {
                leb128::decode_signed(src)
            }
        }

        impl SignedLeb128 for $t {
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_i64(raw: i64) -> Self {
                raw as $t
            }
        }
    )*};
}

impl_fixed_int!(u8, u16, u32, u64, i8, i16, i32, i64);
impl_unsigned_leb128!(u8, u16, u32, u64);
impl_signed_leb128!(i8, i16, i32, i64);
