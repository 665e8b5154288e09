#![warn(clippy::pedantic)]

//! Bounds-checked binary decoding over a borrowed byte region.
//!
//! Two layers:
//!
//! - [`leb128`]: stateless LEB128 decoding (unsigned and signed) that
//!   reports the decoded value and the number of bytes it consumed.
//! - [`Decoder`]: a cursor over `&[u8]` with endian-aware fixed-width
//!   reads, raw byte reads, and LEB128 reads. Every read has a peek form
//!   (explicit position, cursor untouched) and a consume form (reads at
//!   the cursor and advances it).
//!
//! ```rust
//! use endec_wire::{Decoder, Endian};
//!
//! let buf = [0xE5, 0x8E, 0x26, 0x01];
//! let mut decoder = Decoder::new(&buf, Endian::Little).unwrap();
//!
//! let (x, n) = decoder.consume_leb128::<u32>().unwrap();
//! assert_eq!((x, n), (624_485, 3));
//!
//! let (y, n) = decoder.consume::<u8>().unwrap();
//! assert_eq!((y, n), (1, 1));
//! assert_eq!(decoder.position(), 4);
//! assert!(decoder.consume::<u8>().is_err());
//! ```

pub mod decoder;
pub mod endian;
pub mod error;
pub mod int;
pub mod leb128;

pub use decoder::Decoder;
pub use endian::Endian;
pub use error::{DecodeError, RegionError};
pub use int::{FixedInt, Leb128Int, SignedLeb128, UnsignedLeb128};
