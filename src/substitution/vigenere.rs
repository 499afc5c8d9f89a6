//! Vigenère polyalphabetic cipher.

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;

/// Shifts each in-alphabet symbol by the index of the next key symbol.
///
/// The key is used cyclically. The key cursor advances only on in-alphabet
/// text symbols, so foreign characters neither change nor consume key
/// symbols.
///
/// # Examples
///
/// ```
/// use abjad_ciphers::{Alphabet, Cipher, VigenereCipher};
///
/// let cipher = VigenereCipher::new(Alphabet::arabic(), "بت").unwrap();
/// let ciphertext = cipher.encrypt("اا ا").unwrap();
/// assert_eq!(ciphertext, "بت ب");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "اا ا");
/// ```
#[derive(Debug, Clone)]
pub struct VigenereCipher<'a> {
    alphabet: &'a Alphabet,
    shifts: Vec<usize>,
}

impl<'a> VigenereCipher<'a> {
    /// Resolves every key symbol to its alphabet index.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidParameter`] if `key` is empty or holds
    /// a symbol that is not in `alphabet`.
    pub fn new(alphabet: &'a Alphabet, key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::InvalidParameter(
                "Vigenère key must not be empty".to_string(),
            ));
        }
        let shifts = key
            .chars()
            .map(|c| {
                alphabet.index(c).ok_or_else(|| {
                    CipherError::InvalidParameter(format!(
                        "Vigenère key symbol '{c}' is not in the alphabet"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(VigenereCipher { alphabet, shifts })
    }

    fn apply(&self, text: &str, forward: bool) -> String {
        let len = self.alphabet.len() as i64;
        let mut key_cursor = 0usize;
        text.chars()
            .map(|c| {
                let Some(i) = self.alphabet.index(c) else {
                    return c;
                };
                let k = self.shifts[key_cursor % self.shifts.len()] as i64;
                key_cursor += 1;
                let offset = if forward { k } else { len - k };
                self.alphabet.rotate(i, offset)
            })
            .collect()
    }
}

impl Cipher for VigenereCipher<'_> {
    fn name(&self) -> &'static str {
        "Vigenère"
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.apply(text, true))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.apply(text, false))
    }
}
