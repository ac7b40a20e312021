//! Partially filled boards and the placement safety check

use crate::board::Solution;

/// A board under construction, mapping each row to the column of its queen
///
/// Rows are filled top-down. Every row below the one being decided is either
/// unset or a stale value that the search never reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board with `size` rows
    pub fn new(size: usize) -> Self {
        Self {
            columns: vec![None; size],
        }
    }

    /// Create a board with the first-row queen already placed at `col`
    pub fn with_first_queen(size: usize, col: usize) -> Self {
        let mut board = Self::new(size);
        board.place(0, col);
        board
    }

    /// Number of rows (and columns) on the board
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Column of the queen in `row`, if one is placed
    pub fn get(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied().flatten()
    }

    /// Put the queen of `row` on `col`, replacing any previous placement
    pub fn place(&mut self, row: usize, col: usize) {
        self.columns[row] = Some(col);
    }

    /// Remove the queen of `row`
    pub fn clear(&mut self, row: usize) {
        self.columns[row] = None;
    }

    /// Check whether a queen at (`row`, `col`) is attacked by any queen in
    /// rows `0..row`
    ///
    /// Two queens conflict when they share a column or a diagonal, i.e. when
    /// their column distance equals their row distance.
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        for i in 0..row {
            let Some(placed) = self.get(i) else {
                continue;
            };
            if placed == col || placed.abs_diff(col) == row - i {
                return false;
            }
        }
        true
    }

    /// Whether every row holds a queen
    pub fn is_complete(&self) -> bool {
        self.columns.iter().all(Option::is_some)
    }

    /// Take an owned snapshot of a complete board
    ///
    /// Returns `None` while any row is still unset.
    pub fn snapshot(&self) -> Option<Solution> {
        let columns: Option<Vec<usize>> = self.columns.iter().copied().collect();
        columns.map(Solution::new)
    }
}
