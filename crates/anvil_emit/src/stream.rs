//! Little-endian encoding directly onto output streams.
//!
//! These are the file-targeted counterparts of [`wire`](crate::wire).
//! All of them propagate write failures; output failure during code
//! generation is unrecoverable, and the driver converts the error into a
//! fatal diagnostic at the toolchain's single termination point.

use std::io::{self, Write};

/// Size of the shared zero buffer backing [`write_zeroes`].
pub const ZERO_BUF_SIZE: usize = 65536;

static ZEROES: [u8; ZERO_BUF_SIZE] = [0; ZERO_BUF_SIZE];

/// Writes one byte.
pub fn write_u8<W: Write + ?Sized>(w: &mut W, v: u8) -> io::Result<()> {
    w.write_all(&[v])
}

/// Writes a 16-bit value, low byte first.
pub fn write_u16<W: Write + ?Sized>(w: &mut W, v: u16) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

/// Writes a 32-bit value, low byte first.
pub fn write_u32<W: Write + ?Sized>(w: &mut W, v: u32) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

/// Writes a 64-bit value, low byte first.
pub fn write_u64<W: Write + ?Sized>(w: &mut W, v: u64) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

/// Writes the low `width` bytes of `v`, low byte first, for widths of
/// 0 through 8.
pub fn write_uint<W: Write + ?Sized>(w: &mut W, v: u64, width: usize) -> io::Result<()> {
    debug_assert!(width <= 8, "field width {width} out of range");
    let bytes = v.to_le_bytes();
    w.write_all(&bytes[..width.min(8)])
}

/// Writes `n` zero bytes, for padding, in chunks of a fixed shared
/// all-zero buffer.
pub fn write_zeroes<W: Write + ?Sized>(w: &mut W, mut n: u64) -> io::Result<()> {
    while n > 0 {
        let chunk = n.min(ZERO_BUF_SIZE as u64) as usize;
        w.write_all(&ZEROES[..chunk])?;
        n -= chunk as u64;
    }
    Ok(())
}
