//! Fixed-size character matrix with explicitly empty cells.
//!
//! Row transposition writes symbols into a rows × columns layout and
//! reads them back in a different order. Empty cells are `None`, so no
//! placeholder character can ever collide with real input.

/// Row-major matrix of optional characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    ///
    /// # Parameters
    /// - `rows`: Number of rows.
    /// - `cols`: Number of columns.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Returns the cell at (`row`, `col`), or `None` if it is empty or out
    /// of bounds.
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Stores `symbol` at (`row`, `col`).
    ///
    /// Writes outside the grid are ignored.
    pub(crate) fn set(&mut self, row: usize, col: usize, symbol: char) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = Some(symbol);
        }
    }

    /// Returns the filled cells of column `col`, top to bottom.
    pub(crate) fn column(&self, col: usize) -> impl Iterator<Item = char> + '_ {
        (0..self.rows).filter_map(move |row| self.get(row, col))
    }

    /// Returns every filled cell in row-major order.
    pub(crate) fn row_major(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }
}
