//! SHA-256 implementation (FIPS 180-4), one-shot over a byte slice.
//!
//! From scratch, no crypto dependencies at runtime; the `sha2` crate is a
//! dev-dependency used only to cross-check test outputs. Input is an opaque
//! byte sequence: every length here is bytes, never characters.

#![forbid(unsafe_code)]

mod compress;
mod consts;
mod digest;
mod pad;
mod schedule;

pub use digest::Digest;
pub use sha256_core::{Error, Result};

/// Compute the SHA-256 digest of a message.
///
/// Pads the message, then folds its 64-byte blocks in order into a fresh
/// per-call hash state. Fails only with [`Error::InputTooLarge`] when the
/// message bit length does not fit in the 64-bit padding trailer.
pub fn hash(message: &[u8]) -> Result<Digest> {
    let padded = pad::pad(message)?;

    let mut state = consts::INITIAL_STATE;
    for block in padded.chunks_exact(consts::BLOCK_BYTES) {
        compress::compress(&mut state, block);
    }

    Ok(Digest::from_state(&state))
}
