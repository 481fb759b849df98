//! Hex and ASCII dumps of raw byte buffers, for log output and debugging.

use alloc::string::String;
use core::fmt::{self, Write};

/// Largest number of bytes [`dump_memory`] will render.
const DUMP_LIMIT: usize = 1024;
const ROW_LEN: usize = 16;

/// Renders `data` as hex byte ASCII output: two lowercase hex digits per
/// byte, each followed by a single space.
///
/// ```
/// assert_eq!(sundry::hexdump(&[0x00, 0x2a, 0xff]), "00 2a ff ");
/// ```
#[must_use]
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for byte in data {
        // Infallible: String's fmt::Write never errors.
        let _ = write!(out, "{byte:02x} ");
    }
    out
}

/// Writes `data` as 16-byte rows: printable ASCII (with `.` standing in for
/// everything else), two spaces, then each byte as an unsigned decimal
/// followed by a space.
///
/// Output is capped at the first 1024 bytes; anything beyond that is dropped
/// silently.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn dump_memory<W: fmt::Write>(out: &mut W, data: &[u8]) -> fmt::Result {
    let data = &data[..data.len().min(DUMP_LIMIT)];
    for row in data.chunks(ROW_LEN) {
        for &byte in row {
            let shown = if (0x20..=0x7e).contains(&byte) {
                byte as char
            } else {
                '.'
            };
            out.write_char(shown)?;
        }
        out.write_str("  ")?;
        for &byte in row {
            write!(out, "{byte} ")?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}
