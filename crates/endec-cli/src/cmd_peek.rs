/// Implementation of `endec peek`.
///
/// Reads a single field at an explicit position. Nothing is consumed, so
/// the reported cursor is always the start of the buffer.
///
/// ```text
/// $ endec peek "00 12 34" --at 1 --as u16 --endian big
/// 0x0001  u16        2 bytes  4660
/// cursor: 0
/// ```
use anyhow::{Context, Result};
use endec_wire::{Decoder, Endian};

use crate::PeekArgs;
use crate::field::{read_field, render_line};
use crate::input::parse_hex;

/// Run the `endec peek` command.
///
/// # Errors
///
/// Returns an error for invalid hex or if the field cannot be read at
/// the requested position.
pub fn run(args: &PeekArgs, endian: Endian) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let decoder = Decoder::new(&bytes, endian).context("cannot build decoder")?;

    let (value, n) = read_field(&decoder, args.at, args.field)
        .with_context(|| format!("failed to decode {} at offset {}", args.field, args.at))?;

    println!("{}", render_line(args.at, args.field, n, &value));
    println!("cursor: {}", decoder.position());
    Ok(())
}
