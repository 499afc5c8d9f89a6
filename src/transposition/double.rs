//! Double transposition: two rounds of row transposition.

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::transposition::row::RowTranspositionCipher;

/// Separator between the two keys of a double transposition key string.
pub const KEY_SEPARATOR: char = ' ';

/// Splits a raw key string into its two keys.
///
/// Surrounding whitespace is ignored. The remainder must be exactly two
/// non-empty keys separated by a single [`KEY_SEPARATOR`].
///
/// # Errors
/// Returns [`CipherError::InvalidKeyCount`] with the number of tokens found
/// when the string does not hold exactly two non-empty keys.
///
/// # Examples
///
/// ```
/// use abjad_ciphers::transposition::double::split_key_pair;
///
/// assert_eq!(split_key_pair(" باب تاج ").unwrap(), ("باب", "تاج"));
/// assert!(split_key_pair("باب").is_err());
/// ```
pub fn split_key_pair(raw: &str) -> Result<(&str, &str), CipherError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CipherError::InvalidKeyCount(0));
    }
    let tokens: Vec<&str> = trimmed.split(KEY_SEPARATOR).collect();
    match tokens.as_slice() {
        [first, second] if !first.is_empty() && !second.is_empty() => Ok((*first, *second)),
        _ => Err(CipherError::InvalidKeyCount(tokens.len())),
    }
}

/// Applies row transposition with the first key, then with the second.
///
/// # Examples
///
/// ```
/// use abjad_ciphers::{Alphabet, Cipher, DoubleTranspositionCipher};
///
/// let cipher = DoubleTranspositionCipher::from_key_pair(Alphabet::arabic(), "تاب با").unwrap();
/// let ciphertext = cipher.encrypt("ابتثجحخ").unwrap();
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ابتثجحخ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleTranspositionCipher {
    first: RowTranspositionCipher,
    second: RowTranspositionCipher,
}

impl DoubleTranspositionCipher {
    /// Creates the cipher from two separate keys.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidParameter`] if either key is empty.
    pub fn new(alphabet: &Alphabet, first: &str, second: &str) -> Result<Self, CipherError> {
        Ok(DoubleTranspositionCipher {
            first: RowTranspositionCipher::new(alphabet, first)?,
            second: RowTranspositionCipher::new(alphabet, second)?,
        })
    }

    /// Creates the cipher from a `"KEY1 KEY2"` string.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyCount`] if `raw` does not split
    /// into two keys.
    pub fn from_key_pair(alphabet: &Alphabet, raw: &str) -> Result<Self, CipherError> {
        let (first, second) = split_key_pair(raw)?;
        Self::new(alphabet, first, second)
    }
}

impl Cipher for DoubleTranspositionCipher {
    fn name(&self) -> &'static str {
        "Double-Transposition"
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let once = self.first.encrypt(text)?;
        self.second.encrypt(&once)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let once = self.second.decrypt(text)?;
        self.first.decrypt(&once)
    }
}
