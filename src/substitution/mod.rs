//! Substitution ciphers.
//!
//! Each in-alphabet symbol is replaced by another symbol; foreign characters
//! are copied through at their original position.

pub mod monoalphabetic;
pub mod shift;
pub mod vigenere;

pub use monoalphabetic::MonoalphabeticCipher;
pub use shift::ShiftCipher;
pub use vigenere::VigenereCipher;
