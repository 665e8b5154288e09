//! Field layouts for the `read` and `peek` commands.
//!
//! A layout is a comma-separated list of field specs, decoded in order:
//!
//! ```text
//! ┌──────────────────┬───────────────────────────────────────────────┐
//! │ Spec             │ Meaning                                       │
//! ├──────────────────┼───────────────────────────────────────────────┤
//! │ u8 u16 u32 u64   │ unsigned fixed-width, decoder byte order      │
//! │ i8 i16 i32 i64   │ signed fixed-width, decoder byte order        │
//! │ uleb8 .. uleb64  │ unsigned LEB128 into a target of that width   │
//! │ sleb8 .. sleb64  │ signed LEB128 into a target of that width     │
//! │ bytes:N          │ N raw bytes, printed as hex                   │
//! │ skip:N           │ step over N bytes                             │
//! └──────────────────┴───────────────────────────────────────────────┘
//! ```
use std::fmt;
use std::str::FromStr;

use endec_wire::{DecodeError, Decoder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    fn from_bits(s: &str) -> Option<Self> {
        match s {
            "8" => Some(Self::W8),
            "16" => Some(Self::W16),
            "32" => Some(Self::W32),
            "64" => Some(Self::W64),
            _ => None,
        }
    }
}

/// One entry of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Unsigned(Width),
    Signed(Width),
    Uleb(Width),
    Sleb(Width),
    Bytes(usize),
    Skip(usize),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    #[error("unknown field type {0:?}")]
    Unknown(String),

    #[error("invalid byte count in {0:?}")]
    BadLength(String),

    #[error("layout is empty")]
    EmptyLayout,
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim().to_ascii_lowercase();

        if let Some((kind, len)) = spec.split_once(':') {
            let len: usize = len
                .parse()
                .map_err(|_| FieldParseError::BadLength(s.to_owned()))?;
            return match kind {
                "bytes" => Ok(Self::Bytes(len)),
                "skip" => Ok(Self::Skip(len)),
                _ => Err(FieldParseError::Unknown(s.to_owned())),
            };
        }

        // "uleb"/"sleb" before "u"/"i" so the longer prefix wins.
        let parsed = if let Some(bits) = spec.strip_prefix("uleb") {
            Width::from_bits(bits).map(Self::Uleb)
        } else if let Some(bits) = spec.strip_prefix("sleb") {
            Width::from_bits(bits).map(Self::Sleb)
        } else if let Some(bits) = spec.strip_prefix('u') {
            Width::from_bits(bits).map(Self::Unsigned)
        } else if let Some(bits) = spec.strip_prefix('i') {
            Width::from_bits(bits).map(Self::Signed)
        } else {
            None
        };

        parsed.ok_or_else(|| FieldParseError::Unknown(s.to_owned()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(w) => write!(f, "u{}", w.bits()),
            Self::Signed(w) => write!(f, "i{}", w.bits()),
            Self::Uleb(w) => write!(f, "uleb{}", w.bits()),
            Self::Sleb(w) => write!(f, "sleb{}", w.bits()),
            Self::Bytes(n) => write!(f, "bytes:{n}"),
            Self::Skip(n) => write!(f, "skip:{n}"),
        }
    }
}

/// Parse a comma-separated layout such as `"uleb32,u8,bytes:4"`.
///
/// # Errors
///
/// Returns the first [`FieldParseError`] encountered, or
/// [`FieldParseError::EmptyLayout`] if no fields are listed.
pub fn parse_layout(s: &str) -> Result<Vec<Field>, FieldParseError> {
    let fields = s
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Field>, _>>()?;

    if fields.is_empty() {
        return Err(FieldParseError::EmptyLayout);
    }
    Ok(fields)
}

/// A decoded field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    Unsigned(u64),
    Signed(i64),
    Bytes(&'a [u8]),
    Skipped,
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Bytes(b) => f.write_str(&hex::encode(b)),
            Self::Skipped => f.write_str("-"),
        }
    }
}

fn unsigned<'a, T: Into<u64>>(
    read: Result<(T, usize), DecodeError>,
) -> Result<(Value<'a>, usize), DecodeError> {
    read.map(|(v, n)| (Value::Unsigned(v.into()), n))
}

fn signed<'a, T: Into<i64>>(
    read: Result<(T, usize), DecodeError>,
) -> Result<(Value<'a>, usize), DecodeError> {
    read.map(|(v, n)| (Value::Signed(v.into()), n))
}

/// Decode `field` at `pos` without moving the cursor.
///
/// # Errors
///
/// Propagates the decoder's [`DecodeError`].
pub fn read_field<'a>(
    decoder: &Decoder<'a>,
    pos: usize,
    field: Field,
) -> Result<(Value<'a>, usize), DecodeError> {
    match field {
        Field::Unsigned(Width::W8) => unsigned(decoder.read::<u8>(pos)),
        Field::Unsigned(Width::W16) => unsigned(decoder.read::<u16>(pos)),
        Field::Unsigned(Width::W32) => unsigned(decoder.read::<u32>(pos)),
        Field::Unsigned(Width::W64) => unsigned(decoder.read::<u64>(pos)),
        Field::Signed(Width::W8) => signed(decoder.read::<i8>(pos)),
        Field::Signed(Width::W16) => signed(decoder.read::<i16>(pos)),
        Field::Signed(Width::W32) => signed(decoder.read::<i32>(pos)),
        Field::Signed(Width::W64) => signed(decoder.read::<i64>(pos)),
        Field::Uleb(Width::W8) => unsigned(decoder.read_leb128::<u8>(pos)),
        Field::Uleb(Width::W16) => unsigned(decoder.read_leb128::<u16>(pos)),
        Field::Uleb(Width::W32) => unsigned(decoder.read_leb128::<u32>(pos)),
        Field::Uleb(Width::W64) => unsigned(decoder.read_leb128::<u64>(pos)),
        Field::Sleb(Width::W8) => signed(decoder.read_leb128::<i8>(pos)),
        Field::Sleb(Width::W16) => signed(decoder.read_leb128::<i16>(pos)),
        Field::Sleb(Width::W32) => signed(decoder.read_leb128::<i32>(pos)),
        Field::Sleb(Width::W64) => signed(decoder.read_leb128::<i64>(pos)),
        Field::Bytes(n) => decoder.read_bytes(pos, n).map(|b| (Value::Bytes(b), n)),
        Field::Skip(n) => decoder.read_bytes(pos, n).map(|_| (Value::Skipped, n)),
    }
}

/// Decode `field` at the cursor and advance past it.
///
/// # Errors
///
/// Propagates the decoder's [`DecodeError`]; the cursor is unchanged on error.
pub fn consume_field<'a>(
    decoder: &mut Decoder<'a>,
    field: Field,
) -> Result<(Value<'a>, usize), DecodeError> {
    let (value, n) = read_field(decoder, decoder.position(), field)?;
    decoder.skip(n)?;
    Ok((value, n))
}

/// One output line: offset, field spec, width, value.
#[must_use]
pub fn render_line(offset: usize, field: Field, len: usize, value: &Value<'_>) -> String {
    let unit = if len == 1 { "byte " } else { "bytes" };
    format!("0x{offset:04x}  {:<8}  {len:>2} {unit}  {value}", field.to_string())
}
