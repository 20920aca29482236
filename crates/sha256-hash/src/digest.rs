//! Digest encoding (FIPS 180-4 Section 6.2.2 step 4).

#![forbid(unsafe_code)]

use std::fmt;

use crate::consts::DIGEST_BYTES;

/// A 256-bit SHA-256 digest.
///
/// Raw form is 32 bytes; canonical text form is 64 lowercase hex characters,
/// accumulators H0..H7 serialized big-endian in order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Digest size in bytes.
    pub const SIZE: usize = DIGEST_BYTES;

    /// Serialize the final hash state, big-endian per word.
    pub(crate) fn from_state(state: &[u32; 8]) -> Self {
        let mut bytes = [0u8; DIGEST_BYTES];
        for (i, word) in state.iter().enumerate() {
            bytes[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        Digest(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Raw digest bytes by value.
    pub fn to_bytes(self) -> [u8; DIGEST_BYTES] {
        self.0
    }

    /// Canonical 64-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_BYTES] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}
