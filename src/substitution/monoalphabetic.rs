//! Monoalphabetic substitution with a caller-supplied permutation key.

use std::collections::HashMap;

use tracing::warn;

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;

/// Replaces `alphabet[i]` with `key[i]`.
///
/// The key must have exactly as many symbols as the alphabet. Its symbols do
/// not have to come from the alphabet. Characters with no mapping are copied
/// unchanged.
#[derive(Debug, Clone)]
pub struct MonoalphabeticCipher {
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl MonoalphabeticCipher {
    /// Builds the forward and inverse mappings for `key`.
    ///
    /// If `key` repeats a symbol the inverse mapping keeps the later
    /// position, and a warning is logged since decryption cannot recover
    /// every plaintext symbol.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKeyLength`] if `key` does not have one
    /// symbol per alphabet symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use abjad_ciphers::{Alphabet, CipherError, MonoalphabeticCipher};
    ///
    /// let err = MonoalphabeticCipher::new(Alphabet::arabic(), "ابت").unwrap_err();
    /// assert_eq!(err, CipherError::InvalidKeyLength { expected: 36, actual: 3 });
    /// ```
    pub fn new(alphabet: &Alphabet, key: &str) -> Result<Self, CipherError> {
        let key_symbols: Vec<char> = key.chars().collect();
        if key_symbols.len() != alphabet.len() {
            return Err(CipherError::InvalidKeyLength {
                expected: alphabet.len(),
                actual: key_symbols.len(),
            });
        }

        let mut forward = HashMap::with_capacity(alphabet.len());
        let mut inverse = HashMap::with_capacity(alphabet.len());
        let mut collisions = 0usize;
        for (&plain, &cipher) in alphabet.symbols().iter().zip(&key_symbols) {
            forward.insert(plain, cipher);
            if inverse.insert(cipher, plain).is_some() {
                collisions += 1;
            }
        }
        if collisions > 0 {
            warn!(
                collisions,
                "monoalphabetic key repeats symbols; decryption is lossy"
            );
        }

        Ok(MonoalphabeticCipher { forward, inverse })
    }

    fn substitute(map: &HashMap<char, char>, text: &str) -> String {
        text.chars()
            .map(|c| map.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

impl Cipher for MonoalphabeticCipher {
    fn name(&self) -> &'static str {
        "Monoalphabetic"
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::substitute(&self.forward, text))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::substitute(&self.inverse, text))
    }
}
