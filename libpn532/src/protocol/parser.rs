// libpn532/src/protocol/parser.rs

//! Bounds-checked byte access for response decoders.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure the byte at `idx` equals `expected`. Returns UnexpectedResponse
/// naming `what` on mismatch.
pub fn expect_byte(data: &[u8], idx: usize, expected: u8, what: &str) -> Result<()> {
    let actual = data.get(idx).copied().ok_or_else(|| {
        Error::UnexpectedResponse(format!("missing {} (response has {} bytes)", what, data.len()))
    })?;
    if actual != expected {
        return Err(Error::UnexpectedResponse(format!(
            "{}: expected {:#04x}, got {:#04x}",
            what, expected, actual
        )));
    }
    Ok(())
}
