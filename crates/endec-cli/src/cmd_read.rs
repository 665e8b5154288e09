/// Implementation of `endec read`.
///
/// Decodes a layout of fields from a hex buffer, front to back, printing
/// one line per field followed by a total.
///
/// ```text
/// $ endec read "E5 8E 26 01" --layout uleb32,u8
/// 0x0000  uleb32     3 bytes  624485
/// 0x0003  u8         1 byte   1
/// total: 4 bytes consumed, 0 remaining
/// ```
///
/// Decoding stops at the first field that cannot be read; the error names
/// the field and the offset it started at.
use anyhow::{Context, Result};
use endec_wire::{Decoder, Endian};
use log::debug;

use crate::ReadArgs;
use crate::field::{consume_field, parse_layout, render_line};
use crate::input::parse_hex;

/// Run the `endec read` command.
///
/// # Errors
///
/// Returns an error for invalid hex, an invalid layout, an out-of-range
/// `--offset`, or any field that fails to decode.
pub fn run(args: &ReadArgs, endian: Endian) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let layout = parse_layout(&args.layout)?;
    debug!(
        "decoding {} fields from {} bytes ({endian} endian)",
        layout.len(),
        bytes.len()
    );

    let mut decoder =
        Decoder::with_position(&bytes, args.offset, endian).context("cannot build decoder")?;

    let mut total = 0;
    for field in layout {
        let offset = decoder.position();
        let (value, n) = consume_field(&mut decoder, field)
            .with_context(|| format!("failed to decode {field} at offset {offset}"))?;
        println!("{}", render_line(offset, field, n, &value));
        total += n;
    }

    println!(
        "total: {total} bytes consumed, {} remaining",
        decoder.remaining_len()
    );
    Ok(())
}
