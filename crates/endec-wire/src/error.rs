/// Errors produced while reading from a byte region.
///
/// These describe malformed or truncated *data*. They are always
/// recoverable: a failed read never moves the decoder's cursor, so the
/// caller can retry with a smaller request, skip ahead, or give up.
///
/// ```text
///   DecodeError
///   ├── UnexpectedEof    ← fewer bytes remain than the read needs
///   └── VarintOverflow   ← LEB128 value does not fit the target integer
/// ```
///
/// Offsets are absolute positions from the start of the region the read
/// was issued against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input ended before the read could complete.
    ///
    /// For LEB128 reads `offset` is where the varint starts and `needed`
    /// is a lower bound: at least one more byte past what was available.
    #[error("unexpected end of input at offset {offset}: need {needed} bytes, have {available}")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A LEB128 value needs more bits than the requested integer holds.
    #[error("varint at offset {offset} does not fit in {bits} bits")]
    VarintOverflow { offset: usize, bits: u32 },
}

impl DecodeError {
    /// Byte offset at which the failing read started.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Self::UnexpectedEof { offset, .. } | Self::VarintOverflow { offset, .. } => offset,
        }
    }

    /// Shift an offset relative to a sub-slice into region coordinates.
    pub(crate) fn rebase(self, base: usize) -> Self {
        match self {
            Self::UnexpectedEof {
                offset,
                needed,
                available,
            } => Self::UnexpectedEof {
                offset: offset + base,
                needed,
                available,
            },
            Self::VarintOverflow { offset, bits } => Self::VarintOverflow {
                offset: offset + base,
                bits,
            },
        }
    }
}

/// Invalid bounds passed when constructing a [`Decoder`](crate::Decoder).
///
/// Kept separate from [`DecodeError`]: this is a contract violation by the
/// caller, not a property of the bytes being decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    /// The region has no bytes.
    #[error("byte region is empty")]
    Empty,

    /// The starting cursor lies past the end of the region.
    #[error("cursor {current} is outside a region of {len} bytes")]
    CursorOutOfBounds { current: usize, len: usize },
}
