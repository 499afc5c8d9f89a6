//! Cipher selection by name and raw key parsing.
//!
//! The dispatcher is the entry point for callers that hold a cipher name and
//! a key as plain strings (a form field, a CLI flag). It resolves the name to
//! a [`CipherKind`], parses the raw key into the typed [`Key`] that cipher
//! needs, builds the cipher and runs it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::substitution::{MonoalphabeticCipher, ShiftCipher, VigenereCipher};
use crate::transposition::double::split_key_pair;
use crate::transposition::{DoubleTranspositionCipher, RailFenceCipher, RowTranspositionCipher};

/// The supported ciphers.
///
/// Serialized as the display name; the selector values used by the original
/// web form (`Shift-cipher`, `Monoalphabetic-cipher`, `Vigenere`) are accepted
/// when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherKind {
    #[serde(rename = "Shift", alias = "Shift-cipher")]
    Shift,
    #[serde(rename = "Monoalphabetic", alias = "Monoalphabetic-cipher")]
    Monoalphabetic,
    #[serde(rename = "Vigenère", alias = "Vigenere")]
    Vigenere,
    #[serde(rename = "Rail-Fence")]
    RailFence,
    #[serde(rename = "Row-Transposition")]
    RowTransposition,
    #[serde(rename = "Double-Transposition")]
    DoubleTransposition,
}

/// Shape of the raw key a cipher expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// A decimal integer.
    Integer,
    /// A permutation of the whole alphabet.
    Permutation,
    /// Any non-empty symbol string.
    Text,
    /// Two symbol strings separated by a space.
    Pair,
}

impl fmt::Display for KeyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyShape::Integer => write!(f, "integer"),
            KeyShape::Permutation => write!(f, "permutation of the alphabet"),
            KeyShape::Text => write!(f, "symbol string"),
            KeyShape::Pair => write!(f, "two symbol strings separated by a space"),
        }
    }
}

/// A parsed key, typed for the cipher it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Shift amount or Rail Fence row count.
    Integer(i64),
    /// Monoalphabetic permutation, Vigenère or Row Transposition key.
    Text(String),
    /// The two Double Transposition keys, in application order.
    Pair(String, String),
}

/// Encrypt or decrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

impl CipherKind {
    /// Every cipher, in menu order.
    pub const ALL: [CipherKind; 6] = [
        CipherKind::Shift,
        CipherKind::Monoalphabetic,
        CipherKind::Vigenere,
        CipherKind::RailFence,
        CipherKind::RowTransposition,
        CipherKind::DoubleTransposition,
    ];

    /// Canonical selector name.
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Shift => "Shift",
            CipherKind::Monoalphabetic => "Monoalphabetic",
            CipherKind::Vigenere => "Vigenère",
            CipherKind::RailFence => "Rail-Fence",
            CipherKind::RowTransposition => "Row-Transposition",
            CipherKind::DoubleTransposition => "Double-Transposition",
        }
    }

    /// Alternative selector names accepted by [`from_name`](Self::from_name).
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            CipherKind::Shift => &["Shift-cipher"],
            CipherKind::Monoalphabetic => &["Monoalphabetic-cipher"],
            CipherKind::Vigenere => &["Vigenere"],
            CipherKind::RailFence | CipherKind::RowTransposition | CipherKind::DoubleTransposition => {
                &[]
            }
        }
    }

    /// The key shape this cipher expects.
    pub fn key_shape(self) -> KeyShape {
        match self {
            CipherKind::Shift | CipherKind::RailFence => KeyShape::Integer,
            CipherKind::Monoalphabetic => KeyShape::Permutation,
            CipherKind::Vigenere | CipherKind::RowTransposition => KeyShape::Text,
            CipherKind::DoubleTransposition => KeyShape::Pair,
        }
    }

    /// Resolves a selector to a cipher.
    ///
    /// Matching ignores surrounding whitespace and ASCII case, and accepts
    /// both canonical names and [`aliases`](Self::aliases).
    ///
    /// # Errors
    /// Returns [`CipherError::UnknownCipher`] if nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use abjad_ciphers::CipherKind;
    ///
    /// assert_eq!(CipherKind::from_name("rail-fence").unwrap(), CipherKind::RailFence);
    /// assert_eq!(CipherKind::from_name("Vigenere").unwrap(), CipherKind::Vigenere);
    /// assert!(CipherKind::from_name("Enigma").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, CipherError> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                std::iter::once(kind.name())
                    .chain(kind.aliases().iter().copied())
                    .any(|candidate| candidate.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| CipherError::UnknownCipher(name.to_string()))
    }

    /// Parses `raw` into the key shape this cipher expects.
    ///
    /// Integer keys are parsed strictly: surrounding whitespace is allowed,
    /// trailing garbage is not.
    ///
    /// # Errors
    /// - [`CipherError::InvalidKeyFormat`] if an integer key does not parse.
    /// - [`CipherError::InvalidKeyCount`] if a pair key does not split into
    ///   two keys.
    pub fn parse_key(self, raw: &str) -> Result<Key, CipherError> {
        match self.key_shape() {
            KeyShape::Integer => raw.trim().parse::<i64>().map(Key::Integer).map_err(|_| {
                CipherError::InvalidKeyFormat(format!(
                    "{} expects an integer key, got '{raw}'",
                    self.name()
                ))
            }),
            KeyShape::Permutation | KeyShape::Text => Ok(Key::Text(raw.to_string())),
            KeyShape::Pair => {
                let (first, second) = split_key_pair(raw)?;
                Ok(Key::Pair(first.to_string(), second.to_string()))
            }
        }
    }

    /// Builds a configured cipher from a parsed key.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyFormat`] if `key` has the wrong shape
    /// for this cipher, or the cipher's own validation error.
    pub fn build<'a>(
        self,
        alphabet: &'a Alphabet,
        key: &Key,
    ) -> Result<Box<dyn Cipher + 'a>, CipherError> {
        let cipher: Box<dyn Cipher + 'a> = match (self, key) {
            (CipherKind::Shift, Key::Integer(shift)) => Box::new(ShiftCipher::new(alphabet, *shift)),
            (CipherKind::RailFence, Key::Integer(rows)) => {
                Box::new(RailFenceCipher::new(alphabet, *rows)?)
            }
            (CipherKind::Monoalphabetic, Key::Text(key)) => {
                Box::new(MonoalphabeticCipher::new(alphabet, key)?)
            }
            (CipherKind::Vigenere, Key::Text(key)) => Box::new(VigenereCipher::new(alphabet, key)?),
            (CipherKind::RowTransposition, Key::Text(key)) => {
                Box::new(RowTranspositionCipher::new(alphabet, key)?)
            }
            (CipherKind::DoubleTransposition, Key::Pair(first, second)) => {
                Box::new(DoubleTranspositionCipher::new(alphabet, first, second)?)
            }
            (kind, _) => {
                return Err(CipherError::InvalidKeyFormat(format!(
                    "{} expects a key of shape: {}",
                    kind.name(),
                    kind.key_shape()
                )))
            }
        };
        Ok(cipher)
    }

    /// Parses `raw_key`, builds the cipher and runs it over `text`.
    pub fn run(
        self,
        alphabet: &Alphabet,
        direction: Direction,
        text: &str,
        raw_key: &str,
    ) -> Result<String, CipherError> {
        let key = self.parse_key(raw_key)?;
        let cipher = self.build(alphabet, &key)?;
        debug!(
            cipher = cipher.name(),
            %direction,
            symbols = text.chars().count(),
            "running cipher"
        );
        match direction {
            Direction::Encrypt => cipher.encrypt(text),
            Direction::Decrypt => cipher.decrypt(text),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Encrypts `text` with the cipher named `cipher_name` over the Arabic
/// alphabet.
///
/// # Errors
/// [`CipherError::UnknownCipher`] for an unrecognised name, otherwise any
/// key parsing or validation error of the selected cipher.
///
/// # Examples
///
/// ```
/// use abjad_ciphers::dispatch;
///
/// assert_eq!(dispatch::encrypt("Shift", "اب", "2").unwrap(), "تث");
/// assert!(dispatch::encrypt("Shift", "اب", "two").is_err());
/// ```
pub fn encrypt(cipher_name: &str, text: &str, raw_key: &str) -> Result<String, CipherError> {
    encrypt_with(Alphabet::arabic(), cipher_name, text, raw_key)
}

/// Decrypts `text` with the cipher named `cipher_name` over the Arabic
/// alphabet.
///
/// # Errors
/// Same as [`encrypt`].
pub fn decrypt(cipher_name: &str, text: &str, raw_key: &str) -> Result<String, CipherError> {
    decrypt_with(Alphabet::arabic(), cipher_name, text, raw_key)
}

/// Like [`encrypt`], over a caller-supplied alphabet.
pub fn encrypt_with(
    alphabet: &Alphabet,
    cipher_name: &str,
    text: &str,
    raw_key: &str,
) -> Result<String, CipherError> {
    CipherKind::from_name(cipher_name)?.run(alphabet, Direction::Encrypt, text, raw_key)
}

/// Like [`decrypt`], over a caller-supplied alphabet.
pub fn decrypt_with(
    alphabet: &Alphabet,
    cipher_name: &str,
    text: &str,
    raw_key: &str,
) -> Result<String, CipherError> {
    CipherKind::from_name(cipher_name)?.run(alphabet, Direction::Decrypt, text, raw_key)
}
