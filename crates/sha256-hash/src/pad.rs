//! Message padding (FIPS 180-4 Section 5.1.1).

#![forbid(unsafe_code)]

use sha256_core::{Error, Result};

use crate::consts::BLOCK_BYTES;

/// Bytes of the length trailer appended after the zero fill.
const LENGTH_BYTES: usize = 8;

/// Bit length of a message of `len_bytes` bytes, as the unsigned 64-bit value
/// the padding trailer encodes.
///
/// Fails with [`Error::InputTooLarge`] when the bit length does not fit in 64
/// bits. Checked here rather than truncated: a wrapped length field would
/// produce a well-formed but wrong digest.
pub fn message_bit_length(len_bytes: usize) -> Result<u64> {
    u64::try_from(len_bytes)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(Error::InputTooLarge { bytes: len_bytes })
}

/// Pad a message to a multiple of 64 bytes.
///
/// Appends the 0x80 terminator byte, the minimum zero fill so the length is
/// 56 (mod 64), then the original bit length as 8 big-endian bytes.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let bit_len = message_bit_length(message.len())?;

    let padded_len = padded_length(message.len());
    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);

    // Append bit '1' (0x80 byte)
    padded.push(0x80);

    // Append zeros until length ≡ 56 (mod 64), i.e. bit length ≡ 448 (mod 512)
    padded.resize(padded_len - LENGTH_BYTES, 0x00);

    // Append 64-bit big-endian length of the *original* message
    padded.extend_from_slice(&bit_len.to_be_bytes());

    Ok(padded)
}

/// Total padded length in bytes for a message of `len` bytes.
///
/// Smallest multiple of 64 that fits the message, the terminator byte, and
/// the 8-byte length trailer.
fn padded_length(len: usize) -> usize {
    let used = len + 1 + LENGTH_BYTES;
    used.div_ceil(BLOCK_BYTES) * BLOCK_BYTES
}
