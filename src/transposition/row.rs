//! Row (columnar) transposition.
//!
//! The text is written row by row under the key and read back column by
//! column, taking columns in the alphabetical order of their key symbols.
//! When the text length is not a multiple of the key length the last row is
//! short ("ragged"), and the leftmost `len % key_len` columns hold one more
//! symbol than the rest.

use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::grid::Grid;
use crate::utils::text::strip_whitespace;

/// Columnar transposition keyed by a symbol string.
///
/// Whitespace is removed from the input before transposition on both
/// encryption and decryption. Other foreign characters take part like any
/// alphabet symbol.
///
/// # Examples
///
/// ```
/// use abjad_ciphers::{Alphabet, Cipher, RowTranspositionCipher};
///
/// let cipher = RowTranspositionCipher::new(Alphabet::arabic(), "تاب").unwrap();
/// let ciphertext = cipher.encrypt("ابتثجحخ").unwrap();
/// assert_eq!(ciphertext, "بجتحاثخ");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ابتثجحخ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTranspositionCipher {
    order: Vec<usize>,
}

impl RowTranspositionCipher {
    /// Derives the column read order from `key`.
    ///
    /// Key positions are sorted stably by the alphabet index of their
    /// symbol, so repeated symbols keep their left-to-right order. Symbols
    /// outside the alphabet sort before every alphabet symbol.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidParameter`] if `key` is empty.
    pub fn new(alphabet: &Alphabet, key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::InvalidParameter(
                "Row Transposition key must not be empty".to_string(),
            ));
        }
        let ranks: Vec<Option<usize>> = key.chars().map(|c| alphabet.index(c)).collect();
        let mut order: Vec<usize> = (0..ranks.len()).collect();
        order.sort_by_key(|&col| ranks[col]);
        Ok(RowTranspositionCipher { order })
    }

    /// Column indices in the order they are read during encryption.
    pub fn column_order(&self) -> &[usize] {
        &self.order
    }

    fn width(&self) -> usize {
        self.order.len()
    }
}

impl Cipher for RowTranspositionCipher {
    fn name(&self) -> &'static str {
        "Row-Transposition"
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let symbols = strip_whitespace(text);
        let width = self.width();
        let mut grid = Grid::new(symbols.len().div_ceil(width), width);
        for (i, &symbol) in symbols.iter().enumerate() {
            grid.set(i / width, i % width, symbol);
        }
        Ok(self
            .order
            .iter()
            .flat_map(|&col| grid.column(col))
            .collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let symbols = strip_whitespace(text);
        let width = self.width();
        let num_rows = symbols.len().div_ceil(width);
        let full_columns = symbols.len() % width;

        let mut grid = Grid::new(num_rows, width);
        let mut next = symbols.iter().copied();
        for &col in &self.order {
            let height = if full_columns == 0 || col < full_columns {
                num_rows
            } else {
                num_rows - 1
            };
            for row in 0..height {
                if let Some(symbol) = next.next() {
                    grid.set(row, col, symbol);
                }
            }
        }
        Ok(grid.row_major().collect())
    }
}
