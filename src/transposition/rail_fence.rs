//! Rail Fence (zig-zag) transposition.
//!
//! Foreign characters are removed before both encryption and decryption, so
//! `decrypt(encrypt(t)) == t` holds exactly for alphabet-only text and yields
//! the in-alphabet symbols of `t` otherwise.

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::text::retain_alphabet;

/// Minimum number of rails that produces a real permutation.
const MIN_RAILS: i64 = 2;

/// Writes symbols diagonally across `rails` rows and reads them rail by rail.
///
/// # Examples
///
/// ```
/// use abjad_ciphers::{Alphabet, Cipher, RailFenceCipher};
///
/// let cipher = RailFenceCipher::new(Alphabet::arabic(), 2).unwrap();
/// assert_eq!(cipher.encrypt("ابتثج").unwrap(), "اتجبث");
/// assert_eq!(cipher.decrypt("اتجبث").unwrap(), "ابتثج");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RailFenceCipher<'a> {
    alphabet: &'a Alphabet,
    rails: usize,
}

impl<'a> RailFenceCipher<'a> {
    /// Creates a rail fence cipher with `rails` rows.
    ///
    /// More rails than text symbols is accepted and leaves the text in
    /// place.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidParameter`] if `rails < 2`.
    pub fn new(alphabet: &'a Alphabet, rails: i64) -> Result<Self, CipherError> {
        if rails < MIN_RAILS {
            return Err(CipherError::InvalidParameter(format!(
                "Rail Fence needs at least {MIN_RAILS} rows, got {rails}"
            )));
        }
        let rails = usize::try_from(rails).map_err(|_| {
            CipherError::InvalidParameter(format!("Rail Fence row count {rails} is too large"))
        })?;
        Ok(RailFenceCipher { alphabet, rails })
    }

    /// The configured number of rails.
    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Returns the rail of each of `len` positions and the number of
    /// positions on every rail.
    ///
    /// Rails beyond `len` can never be reached, so the walk is capped there.
    fn layout(&self, len: usize) -> (Vec<usize>, Vec<usize>) {
        let rails = self.rails.min(len.max(1));
        let path = zigzag(rails, len);
        let mut lengths = vec![0usize; rails];
        for &rail in &path {
            lengths[rail] += 1;
        }
        (path, lengths)
    }
}

/// Returns the rail visited at each of `len` positions.
///
/// The walk starts on rail 0 and reverses direction on the first and last
/// rails. With fewer than two rails every position is on rail 0.
fn zigzag(rails: usize, len: usize) -> Vec<usize> {
    if rails < 2 {
        return vec![0; len];
    }
    let mut path = Vec::with_capacity(len);
    let mut rail = 0usize;
    let mut down = true;
    for _ in 0..len {
        path.push(rail);
        if rail == 0 {
            down = true;
        } else if rail == rails - 1 {
            down = false;
        }
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
    }
    path
}

impl Cipher for RailFenceCipher<'_> {
    fn name(&self) -> &'static str {
        "Rail-Fence"
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let symbols = retain_alphabet(self.alphabet, text);
        let (path, lengths) = self.layout(symbols.len());
        let mut rails: Vec<String> = lengths.iter().map(|&n| String::with_capacity(n)).collect();
        for (&rail, &symbol) in path.iter().zip(&symbols) {
            rails[rail].push(symbol);
        }
        Ok(rails.concat())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let symbols = retain_alphabet(self.alphabet, text);
        let (path, lengths) = self.layout(symbols.len());

        // Rail r owns the ciphertext slice starting at the sum of the
        // lengths of rails 0..r; each walk step takes the next symbol of
        // its rail.
        let mut cursors = Vec::with_capacity(lengths.len());
        let mut start = 0usize;
        for &n in &lengths {
            cursors.push(start);
            start += n;
        }

        Ok(path
            .iter()
            .map(|&rail| {
                let symbol = symbols[cursors[rail]];
                cursors[rail] += 1;
                symbol
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arabic(rails: i64) -> RailFenceCipher<'static> {
        RailFenceCipher::new(Alphabet::arabic(), rails).unwrap()
    }

    #[test]
    fn test_zigzag_two_rails() {
        assert_eq!(zigzag(2, 5), vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_zigzag_three_rails() {
        assert_eq!(zigzag(3, 8), vec![0, 1, 2, 1, 0, 1, 2, 1]);
    }

    #[test]
    fn test_zigzag_single_rail_is_flat() {
        assert_eq!(zigzag(1, 4), vec![0, 0, 0, 0]);
        assert_eq!(zigzag(0, 2), vec![0, 0]);
        assert!(zigzag(1, 0).is_empty());
    }

    #[test]
    fn test_encrypt_two_rails() {
        assert_eq!(arabic(2).encrypt("ابتثج").unwrap(), "اتجبث");
    }

    #[test]
    fn test_decrypt_two_rails() {
        assert_eq!(arabic(2).decrypt("اتجبث").unwrap(), "ابتثج");
    }

    #[test]
    fn test_three_rails_known_vector() {
        // rail 0: ا ج, rail 1: ب ث ح د, rail 2: ت خ
        let cipher = arabic(3);
        assert_eq!(cipher.encrypt("ابتثجحخد").unwrap(), "اجبثحدتخ");
        assert_eq!(cipher.decrypt("اجبثحدتخ").unwrap(), "ابتثجحخد");
    }

    #[test]
    fn test_rails_at_least_text_length_is_identity() {
        assert_eq!(arabic(3).encrypt("ابت").unwrap(), "ابت");
        assert_eq!(arabic(10).encrypt("ابت").unwrap(), "ابت");
        assert_eq!(arabic(10).decrypt("ابت").unwrap(), "ابت");
    }

    #[test]
    fn test_foreign_characters_are_stripped_both_ways() {
        let cipher = arabic(2);
        assert_eq!(cipher.encrypt("اب ت-ث ج").unwrap(), "اتجبث");
        assert_eq!(cipher.decrypt("اتج بث!").unwrap(), "ابتثج");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(arabic(4).encrypt("").unwrap(), "");
        assert_eq!(arabic(4).decrypt("  ").unwrap(), "");
    }

    #[test]
    fn test_too_few_rails_rejected() {
        for rails in [1, 0, -3] {
            assert!(matches!(
                RailFenceCipher::new(Alphabet::arabic(), rails),
                Err(CipherError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_layout_counts_symbols_per_rail() {
        let (path, lengths) = arabic(3).layout(8);
        assert_eq!(path, vec![0, 1, 2, 1, 0, 1, 2, 1]);
        assert_eq!(lengths, vec![2, 4, 2]);
    }

    #[test]
    fn test_layout_caps_rails_at_length() {
        let (path, lengths) = arabic(1_000_000).layout(3);
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(lengths, vec![1, 1, 1]);
    }

    #[test]
    fn test_long_text_with_as_many_rails_roundtrips() {
        let alphabet = Alphabet::arabic();
        let len = 64_000;
        let text: String = (0..len).map(|i| alphabet.rotate(0, i as i64 * 7)).collect();
        for rails in [len as i64, 2, 37, 1_000] {
            let cipher = arabic(rails);
            let enc = cipher.encrypt(&text).unwrap();
            assert_eq!(enc.chars().count(), len);
            assert_eq!(cipher.decrypt(&enc).unwrap(), text, "rails {rails}");
        }
    }

    #[test]
    fn test_huge_rail_count_is_cheap() {
        let cipher = arabic(i64::MAX);
        assert_eq!(cipher.encrypt("ابتث").unwrap(), "ابتث");
    }
}
