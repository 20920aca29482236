//! Compression function and state accumulation (FIPS 180-4 Section 6.2.2).

#![forbid(unsafe_code)]

use crate::consts::{K, SCHEDULE_WORDS};
use crate::schedule;

/// Compress one 64-byte block into the running hash state.
///
/// Working registers a..h are seeded from the current state, mixed over 64
/// rounds with the block's message schedule and the round constants, then
/// folded back with modular addition. Blocks must be fed strictly in order:
/// each block's rounds read the state the previous block produced.
pub fn compress(state: &mut [u32; 8], block: &[u8]) {
    let w = schedule::expand(block);

    // Initialize working registers from the current state
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    // 64 rounds
    for i in 0..SCHEDULE_WORDS {
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let temp2 = big_sigma0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    // Fold the compressed block into the accumulators
    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Σ0(x) = rotr(x,2) ⊕ rotr(x,13) ⊕ rotr(x,22)
#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1(x) = rotr(x,6) ⊕ rotr(x,11) ⊕ rotr(x,25)
#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Ch(x,y,z): bit from y where x is set, from z where x is clear.
#[inline]
fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj(x,y,z): bit set where at least two of x, y, z are set.
#[inline]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}
