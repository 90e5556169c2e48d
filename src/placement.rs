//! Where a word sits in the grid.

use crate::WordDirection;

/// A cell coordinate in the grid, as `(row, column)`.
pub type Cell = (usize, usize);

/// The two endpoint cells a word's letters were written between.
///
/// Only the endpoints are kept; the step between consecutive letters is recomputed from them whenever the
/// covered cells are needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    begin: Cell,
    end: Cell,
}

impl Placement {
    /// Creates a placement running from `begin` to `end`, both inclusive.
    pub fn new(begin: Cell, end: Cell) -> Self {
        Self { begin, end }
    }

    /// Creates the placement of a word of length `len` starting at `begin` and running in `direction`.
    ///
    /// Returns [`None`] if any letter would land outside a `num_rows` x `num_columns` grid, or if `len` is 0.
    pub fn from_direction(
        begin: Cell,
        len: usize,
        direction: WordDirection,
        num_rows: usize,
        num_columns: usize,
    ) -> Option<Self> {
        let last = len.checked_sub(1)? as isize;
        let (dr, dc) = direction.step();

        let end_row = begin.0 as isize + dr * last;
        let end_column = begin.1 as isize + dc * last;

        let in_bounds = begin.0 < num_rows
            && begin.1 < num_columns
            && (0..num_rows as isize).contains(&end_row)
            && (0..num_columns as isize).contains(&end_column);

        in_bounds.then(|| Self::new(begin, (end_row as usize, end_column as usize)))
    }

    /// The cell holding the first letter.
    pub fn begin(&self) -> Cell {
        self.begin
    }

    /// The cell holding the last letter.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// The same cells walked from `end` back to `begin`.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.begin)
    }

    /// The number of cells spanned, counting both endpoints.
    pub fn num_cells(&self) -> usize {
        let (dr, dc) = self.delta();
        dr.unsigned_abs().max(dc.unsigned_abs()) + 1
    }

    /// The direction from `begin` towards `end`, or [`None`] for a single-cell placement.
    pub fn direction(&self) -> Option<WordDirection> {
        WordDirection::from_delta(self.delta())
    }

    /// Returns every cell covered, from `begin` to `end`.
    pub fn cells(&self) -> Vec<Cell> {
        self.cells_for_len(self.num_cells())
    }

    /// Returns `len` cells starting at `begin`, stepping by the per-axis step implied by the endpoints.
    ///
    /// The step on each axis is `(end - begin) / (len - 1)`, truncated, so every cell stays inside the box spanned
    /// by the endpoints even when `len` does not fit them exactly.
    pub fn cells_for_len(&self, len: usize) -> Vec<Cell> {
        if len <= 1 {
            return vec![self.begin];
        }

        let (dr, dc) = self.delta();
        let steps = len as isize - 1;
        let (step_r, step_c) = (dr / steps, dc / steps);

        (0..len as isize)
            .map(|i| {
                (
                    (self.begin.0 as isize + i * step_r) as usize,
                    (self.begin.1 as isize + i * step_c) as usize,
                )
            })
            .collect()
    }

    fn delta(&self) -> (isize, isize) {
        (
            self.end.0 as isize - self.begin.0 as isize,
            self.end.1 as isize - self.begin.1 as isize,
        )
    }
}
