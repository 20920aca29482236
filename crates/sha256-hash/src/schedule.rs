//! Block parsing and message-schedule expansion (FIPS 180-4 Section 6.2.2 step 1).

#![forbid(unsafe_code)]

use crate::consts::{BLOCK_BYTES, SCHEDULE_WORDS};

/// Expand one 64-byte block into the 64-word message schedule.
///
/// W[0..16] are the block's bytes grouped in fours, big-endian. Each block
/// yields sixteen independent words; collapsing the block into fewer words
/// loses input bits and cannot reproduce the FIPS test vectors. W[16..64]
/// follow the fixed recurrence over the block's own earlier words.
///
/// A block of any other length is a defect in the caller's block loop.
pub fn expand(block: &[u8]) -> [u32; SCHEDULE_WORDS] {
    assert_eq!(block.len(), BLOCK_BYTES, "block must be exactly 64 bytes");

    let mut w = [0u32; SCHEDULE_WORDS];

    // First 16 words from the block
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    // Extend to 64 words
    for i in 16..SCHEDULE_WORDS {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}

/// σ0(x) = rotr(x,7) ⊕ rotr(x,18) ⊕ (x >> 3)
#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1(x) = rotr(x,17) ⊕ rotr(x,19) ⊕ (x >> 10)
#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
