use log::{debug, trace};

use crate::endian::Endian;
use crate::error::{DecodeError, RegionError};
use crate::int::{FixedInt, Leb128Int};

/// Bounds-checked read cursor over a borrowed byte region.
///
/// The decoder never owns, copies, or allocates the region. It tracks a
/// single cursor `pos` with `0 <= pos <= buf.len()` and a byte order fixed
/// at construction.
///
/// ```text
///   buf:  [ consumed ........ | remaining ........ ]
///          ^0                 ^position()          ^end()
/// ```
///
/// Every read comes in two forms:
///
///   - `read*` takes an explicit position and leaves the cursor alone.
///   - `consume*` reads at the cursor and advances it by the bytes read.
///
/// A failed read returns `Err` and leaves the cursor where it was, so the
/// decoder stays usable after a truncation error.
///
/// A `Decoder` is not meant to be shared for concurrent consumption.
/// Independent decoders over the same slice are fine.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    endian: Endian,
}

impl<'a> Decoder<'a> {
    /// Create a decoder positioned at the start of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Empty`] if `buf` has no bytes.
    pub fn new(buf: &'a [u8], endian: Endian) -> Result<Self, RegionError> {
        Self::with_position(buf, 0, endian)
    }

    /// Create a decoder with its cursor at `current`.
    ///
    /// `current == buf.len()` is allowed and yields an exhausted decoder.
    ///
    /// # Errors
    ///
    /// - [`RegionError::Empty`] if `buf` has no bytes.
    /// - [`RegionError::CursorOutOfBounds`] if `current > buf.len()`.
    pub fn with_position(buf: &'a [u8], current: usize, endian: Endian) -> Result<Self, RegionError> {
        if buf.is_empty() {
            return Err(RegionError::Empty);
        }
        if current > buf.len() {
            return Err(RegionError::CursorOutOfBounds {
                current,
                len: buf.len(),
            });
        }

        Ok(Self {
            buf,
            pos: current,
            endian,
        })
    }

    /// Byte order applied to fixed-width reads.
    #[must_use]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Bytes consumed so far, measured from the start of the region.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Offset one past the last byte of the region.
    #[must_use]
    pub fn end(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes between the cursor and the end of the region.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The unread bytes.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Whether the cursor sits at the end of the region.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Whether at least `n` bytes remain after the cursor.
    #[must_use]
    pub fn check_available(&self, n: usize) -> bool {
        n <= self.remaining_len()
    }

    /// Read a fixed-width integer at `pos` without moving the cursor.
    ///
    /// # Returns
    ///
    /// `(value, T::SIZE)`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnexpectedEof`] if fewer than `T::SIZE` bytes exist
    /// between `pos` and the end of the region.
    pub fn read<T: FixedInt>(&self, pos: usize) -> Result<(T, usize), DecodeError> {
        let raw = self.span(pos, T::SIZE)?;
        Ok((T::from_bytes(raw, self.endian), T::SIZE))
    }

    /// Read a fixed-width integer at the cursor and advance past it.
    ///
    /// # Errors
    ///
    /// See [`read`](Self::read). The cursor is unchanged on error.
    pub fn consume<T: FixedInt>(&mut self) -> Result<(T, usize), DecodeError> {
        let (value, n) = self.read(self.pos)?;
        self.advance(n);
        Ok((value, n))
    }

    /// Borrow exactly `len` raw bytes at `pos`. No byte-order transform.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnexpectedEof`] if fewer than `len` bytes remain.
    pub fn read_bytes(&self, pos: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        self.span(pos, len)
    }

    /// Borrow exactly `len` raw bytes at the cursor and advance past them.
    ///
    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes). The cursor is unchanged on error.
    pub fn consume_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self.read_bytes(self.pos, len)?;
        self.advance(bytes.len());
        Ok(bytes)
    }

    /// Copy `N` raw bytes at `pos` into an array.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnexpectedEof`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&self, pos: usize) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.span(pos, N)?);
        Ok(out)
    }

    /// Copy `N` raw bytes at the cursor into an array and advance past them.
    ///
    /// # Errors
    ///
    /// See [`read_array`](Self::read_array).
    pub fn consume_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let out = self.read_array::<N>(self.pos)?;
        self.advance(N);
        Ok(out)
    }

    /// Decode a LEB128 integer at `pos` without moving the cursor.
    ///
    /// Signed targets (`i8`..`i64`) use signed LEB128, unsigned targets
    /// use unsigned LEB128. The codec only sees `buf[pos..]`, so it cannot
    /// read past the end of the region.
    ///
    /// # Returns
    ///
    /// `(value, bytes_consumed)`; `bytes_consumed` is at least 1.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnexpectedEof`] if the region ends mid-varint.
    /// - [`DecodeError::VarintOverflow`] if the value does not fit in `T`.
    pub fn read_leb128<T: Leb128Int>(&self, pos: usize) -> Result<(T, usize), DecodeError> {
        let src = self.buf.get(pos..).unwrap_or(&[]);
        match T::decode_leb128(src) {
            Ok((value, n)) => {
                trace!("leb128 read at {pos}: {n} bytes");
                Ok((value, n))
            }
            Err(err) => {
                let err = err.rebase(pos);
                debug!("leb128 read failed: {err}");
                Err(err)
            }
        }
    }

    /// Decode a LEB128 integer at the cursor and advance past it.
    ///
    /// # Errors
    ///
    /// See [`read_leb128`](Self::read_leb128). The cursor is unchanged on error.
    pub fn consume_leb128<T: Leb128Int>(&mut self) -> Result<(T, usize), DecodeError> {
        let (value, n) = self.read_leb128(self.pos)?;
        self.advance(n);
        Ok((value, n))
    }

    /// Advance the cursor by `n` bytes without interpreting them.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnexpectedEof`] if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<usize, DecodeError> {
        self.span(self.pos, n)?;
        self.advance(n);
        Ok(n)
    }

    /// The `len` bytes starting at `pos`, if they all lie inside the region.
    ///
    /// A `pos` past the end fails even for `len == 0`.
    fn span(&self, pos: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        let Some(raw) = self.buf.get(pos..).and_then(|rest| rest.get(..len)) else {
            let err = DecodeError::UnexpectedEof {
                offset: pos,
                needed: len,
                available: self.buf.len().saturating_sub(pos),
            };
            debug!("read failed: {err}");
            return Err(err);
        };

        trace!("read {len} bytes at {pos}");
        Ok(raw)
    }

    fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining_len());
        self.pos += n;
    }
}
