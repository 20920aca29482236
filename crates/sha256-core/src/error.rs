use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("input of {bytes} bytes: bit length exceeds 2^64 - 1 and cannot be encoded in the padding trailer")]
    InputTooLarge { bytes: usize },
}
