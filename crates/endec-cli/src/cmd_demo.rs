/// Implementation of `endec demo`.
///
/// Decodes a fixed 4-byte buffer: one unsigned LEB128 value into a `u32`,
/// then one fixed-width `u8`.
///
/// ```text
/// Number 624485
/// Number 1
/// Bytes read: 4
/// ```
use anyhow::{Context, Result};
use endec_wire::{Decoder, Endian};
use log::debug;

const DEMO_BUFFER: [u8; 4] = [0xE5, 0x8E, 0x26, 0x01];

/// Run the `endec demo` command.
///
/// # Errors
///
/// Only fails if the decoder rejects the built-in buffer.
pub fn run(endian: Endian) -> Result<()> {
    let (x, y, bytes_read) = decode_demo(endian)?;

    println!("Number {x}");
    println!("Number {y}");
    println!("Bytes read: {bytes_read}");
    Ok(())
}

fn decode_demo(endian: Endian) -> Result<(u32, u8, usize)> {
    let mut decoder = Decoder::new(&DEMO_BUFFER, endian).context("cannot build decoder")?;

    let (x, n1) = decoder
        .consume_leb128::<u32>()
        .context("failed to decode LEB128 value")?;
    let (y, n2) = decoder.consume::<u8>().context("failed to decode u8")?;
    debug!("demo consumed {} of {} bytes", decoder.position(), decoder.end());

    Ok((x, y, n1 + n2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_values() {
        assert_eq!(decode_demo(Endian::Little).unwrap(), (624_485, 1, 4));
        // Single-byte and LEB128 reads ignore byte order.
        assert_eq!(decode_demo(Endian::Big).unwrap(), (624_485, 1, 4));
    }
}
