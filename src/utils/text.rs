//! Text filtering utilities used ahead of the transposition ciphers.
//!
//! Transposition ciphers reorder characters by position, so they operate on
//! a filtered symbol sequence rather than on the raw input string.

use crate::alphabet::Alphabet;

/// Removes every whitespace character from `text`.
///
/// # Parameters
/// - `text`: Input text, possibly containing spaces, tabs or newlines.
///
/// # Returns
/// The remaining characters, in order.
pub(crate) fn strip_whitespace(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keeps only the characters of `text` that belong to `alphabet`.
///
/// # Parameters
/// - `alphabet`: The cipher alphabet.
/// - `text`: Input text.
///
/// # Returns
/// The in-alphabet characters, in order.
pub(crate) fn retain_alphabet(alphabet: &Alphabet, text: &str) -> Vec<char> {
    text.chars().filter(|&c| alphabet.contains(c)).collect()
}
