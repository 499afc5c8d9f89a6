//! Error types for the abjad-ciphers library.

use thiserror::Error;

/// User-facing message for a cipher selector that matches no known cipher.
pub const UNKNOWN_CIPHER_MESSAGE: &str = "Please select a valid cipher and enter a suitable key.";

/// Errors produced by the cipher library.
///
/// Every variant is recoverable: callers are expected to surface the
/// [`Display`](std::fmt::Display) text to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Monoalphabetic key does not have one symbol per alphabet symbol.
    #[error(
        "Custom alphabet must have the same length as the Arabic alphabet \
         (expected {expected} symbols, got {actual})"
    )]
    InvalidKeyLength {
        /// Number of symbols in the alphabet.
        expected: usize,
        /// Number of symbols in the supplied key.
        actual: usize,
    },
    /// Double Transposition key did not split into exactly two keys.
    #[error("Please provide exactly two keys separated by a space (got {0})")]
    InvalidKeyCount(usize),
    /// Key could not be parsed into the shape the cipher needs.
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
    /// Cipher selector matched no known cipher.
    #[error("{}", UNKNOWN_CIPHER_MESSAGE)]
    UnknownCipher(String),
    /// Key parsed, but its value is outside what the cipher accepts.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Alphabet definition is empty or repeats a symbol.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
}
