use std::fmt;
use std::str::FromStr;

/// Byte order used to interpret multi-byte fixed-width values.
///
/// A [`Decoder`](crate::Decoder) takes one of these at construction and
/// applies it to every fixed-width read it performs. LEB128 and raw byte
/// reads are unaffected.
///
/// ```text
///   bytes on the wire:   0x12 0x34
///   Endian::Little  →    0x3412
///   Endian::Big     →    0x1234
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first (network order).
    Big,
}

impl Endian {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// True when values in this order can be copied without reversing bytes.
    #[must_use]
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => f.write_str("little"),
            Self::Big => f.write_str("big"),
        }
    }
}

/// Returned by [`Endian::from_str`] for an unrecognised name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown byte order {0:?}, expected `little` or `big`")]
pub struct ParseEndianError(String);

impl FromStr for Endian {
    type Err = ParseEndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Self::Little),
            "big" | "be" => Ok(Self::Big),
            _ => Err(ParseEndianError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_little() {
        assert_eq!(Endian::default(), Endian::Little);
    }

    #[test]
    fn native_matches_target() {
        assert!(Endian::NATIVE.is_native());
        assert_eq!(cfg!(target_endian = "little"), Endian::Little.is_native());
        assert_eq!(cfg!(target_endian = "big"), Endian::Big.is_native());
    }

    #[test]
    fn parse_names() {
        assert_eq!("little".parse::<Endian>().unwrap(), Endian::Little);
        assert_eq!("LE".parse::<Endian>().unwrap(), Endian::Little);
        assert_eq!("big".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!("be".parse::<Endian>().unwrap(), Endian::Big);
        assert!("middle".parse::<Endian>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for endian in [Endian::Little, Endian::Big] {
            assert_eq!(endian.to_string().parse::<Endian>().unwrap(), endian);
        }
    }
}
