//! Ordered symbol alphabet defining the cipher domain.
//!
//! Every cipher in this crate computes on positions within an [`Alphabet`].
//! Characters outside the alphabet are "foreign"; how they are treated is
//! decided by each cipher.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::CipherError;

/// The 36 symbols of the Arabic cipher alphabet, in index order.
pub const ARABIC_SYMBOLS: &str = "ابتثجحخدذرزسشصضطظعغفقكلمنهويأإآءةؤىئ";

static ARABIC: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::build(ARABIC_SYMBOLS.chars()));

/// Immutable ordered set of distinct symbols with an index lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Returns the shared 36-symbol Arabic alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use abjad_ciphers::Alphabet;
    ///
    /// let arabic = Alphabet::arabic();
    /// assert_eq!(arabic.len(), 36);
    /// assert_eq!(arabic.index('ت'), Some(2));
    /// ```
    pub fn arabic() -> &'static Alphabet {
        &ARABIC
    }

    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidAlphabet`] if `symbols` is empty or
    /// contains the same character twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use abjad_ciphers::Alphabet;
    ///
    /// let latin = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    /// assert_eq!(latin.symbol_at(25), Some('Z'));
    /// assert!(Alphabet::new("ABA").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, CipherError> {
        if symbols.is_empty() {
            return Err(CipherError::InvalidAlphabet(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        let mut seen = HashMap::new();
        for (i, c) in symbols.chars().enumerate() {
            if let Some(first) = seen.insert(c, i) {
                return Err(CipherError::InvalidAlphabet(format!(
                    "symbol '{c}' appears at positions {first} and {i}"
                )));
            }
        }
        Ok(Self::build(symbols.chars()))
    }

    /// Internal constructor; callers guarantee the symbols are distinct.
    fn build(symbols: impl Iterator<Item = char>) -> Self {
        let symbols: Vec<char> = symbols.collect();
        let positions = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Alphabet { symbols, positions }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    ///
    /// [`Alphabet::new`] rejects empty input, so this is `false` for every
    /// constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the index of `symbol`, or `None` if it is foreign.
    pub fn index(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// Returns `true` if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// Returns the symbol at `index`, or `None` past the end.
    ///
    /// No wrapping is applied; see [`rotate`](Self::rotate) for modular access.
    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Returns the symbol `offset` places after `index`, wrapping around.
    ///
    /// Uses a floored modulo, so negative offsets of any magnitude land on a
    /// valid symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use abjad_ciphers::Alphabet;
    ///
    /// let arabic = Alphabet::arabic();
    /// assert_eq!(arabic.rotate(0, -1), 'ئ');
    /// assert_eq!(arabic.rotate(0, 38), 'ت');
    /// ```
    pub fn rotate(&self, index: usize, offset: i64) -> char {
        let len = self.symbols.len() as i128;
        let wrapped = (index as i128 + offset as i128).rem_euclid(len);
        self.symbols[wrapped as usize]
    }
}
