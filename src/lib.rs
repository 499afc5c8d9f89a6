//! Classical ciphers over the 36-symbol Arabic alphabet.
//!
//! This crate implements six pre-modern symmetric ciphers, each with a
//! matching encrypt/decrypt pair. They are teaching ciphers: none of them
//! offers any real confidentiality.
//!
//! # Architecture
//!
//! ```text
//! Alphabet        (ordered symbols + index lookup, shared by every cipher)
//!     ↓
//! substitution    Shift · Monoalphabetic · Vigenère
//! transposition   Rail Fence · Row Transposition · Double Transposition
//!     ↓ all implement `Cipher`
//! dispatch        (cipher name + raw key string → typed key → cipher)
//! ```
//!
//! # Examples
//!
//! Select a cipher by name, as a form or command line would:
//!
//! ```
//! use abjad_ciphers::dispatch;
//!
//! let ciphertext = dispatch::encrypt("Rail-Fence", "ابتثج", "2").unwrap();
//! assert_eq!(ciphertext, "اتجبث");
//! assert_eq!(dispatch::decrypt("Rail-Fence", &ciphertext, "2").unwrap(), "ابتثج");
//! ```
//!
//! Or build a cipher directly with a typed key:
//!
//! ```
//! use abjad_ciphers::{Alphabet, Cipher, VigenereCipher};
//!
//! let cipher = VigenereCipher::new(Alphabet::arabic(), "سر").unwrap();
//! let ciphertext = cipher.encrypt("مرحبا بالعالم").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "مرحبا بالعالم");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod cipher;
pub mod dispatch;
pub mod error;
pub mod substitution;
pub mod transposition;

pub(crate) mod utils;

pub use alphabet::Alphabet;
pub use cipher::Cipher;
pub use dispatch::{CipherKind, Direction, Key, KeyShape};
pub use error::CipherError;
pub use substitution::{MonoalphabeticCipher, ShiftCipher, VigenereCipher};
pub use transposition::{DoubleTranspositionCipher, RailFenceCipher, RowTranspositionCipher};
