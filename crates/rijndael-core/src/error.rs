//! Error taxonomy for the engine boundary.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Precondition failures surfaced before any cipher work starts.
///
/// Every core operation is a pure, total function once its length
/// preconditions hold, so nothing here is retried or recovered.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key byte length is not one of 16, 24, or 32.
    #[error("invalid key length: expected 16, 24, or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Input is not a positive multiple of one 16-byte block, counted in
    /// hex digits.
    #[error("invalid input length: expected a positive multiple of 32 hex digits, got {0}")]
    InvalidInputLength(usize),

    /// Input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {ch:?} at offset {index}")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character within the input text.
        index: usize,
    },
}
