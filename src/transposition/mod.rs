//! Transposition ciphers.
//!
//! These reorder symbol positions without changing symbol identity. Input is
//! filtered before the permutation is applied: Rail Fence keeps only
//! alphabet symbols, Row and Double Transposition drop whitespace.

pub mod double;
pub mod rail_fence;
pub mod row;

pub use double::DoubleTranspositionCipher;
pub use rail_fence::RailFenceCipher;
pub use row::RowTranspositionCipher;
