//! Shift (Caesar) cipher.

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;

/// Rotates every in-alphabet symbol by a fixed number of positions.
///
/// Any shift value is accepted; it is reduced with a floored modulo, so
/// negative shifts and shifts larger than the alphabet behave as expected.
///
/// # Examples
///
/// ```
/// use abjad_ciphers::{Alphabet, Cipher, ShiftCipher};
///
/// let cipher = ShiftCipher::new(Alphabet::arabic(), 2);
/// assert_eq!(cipher.encrypt("اب").unwrap(), "تث");
/// assert_eq!(cipher.decrypt("تث").unwrap(), "اب");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShiftCipher<'a> {
    alphabet: &'a Alphabet,
    shift: i64,
}

impl<'a> ShiftCipher<'a> {
    /// Creates a shift cipher over `alphabet`.
    pub fn new(alphabet: &'a Alphabet, shift: i64) -> Self {
        ShiftCipher { alphabet, shift }
    }

    /// The configured shift.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    fn apply(&self, text: &str, offset: i64) -> String {
        text.chars()
            .map(|c| match self.alphabet.index(c) {
                Some(i) => self.alphabet.rotate(i, offset),
                None => c,
            })
            .collect()
    }
}

impl Cipher for ShiftCipher<'_> {
    fn name(&self) -> &'static str {
        "Shift"
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.apply(text, self.shift))
    }

    /// Shifts in the opposite direction. `i64::MIN` has no negation, so the
    /// offset is first reduced modulo the alphabet length.
    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let reduced = self.shift.rem_euclid(self.alphabet.len() as i64);
        Ok(self.apply(text, -reduced))
    }
}
