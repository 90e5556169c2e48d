//! Turning a drag into a run of cells and matching it against the hidden words.

use std::collections::HashMap;

use crate::{Cell, Placement, WordDirection};

/// Words found so far, each with the placement it was selected along.
pub type FoundWords = HashMap<String, Placement>;

/// Why a drag does not describe a straight run of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The drag ended on the cell it started on.
    NoMovement,

    /// The drag moved along both axes, but not by the same amount.
    UnevenDiagonal,
}

/// An in-progress drag: where it started and the cell the pointer is over now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    start: Cell,
    current: Cell,
}

impl Selection {
    /// Starts a drag on `start`.
    pub fn new(start: Cell) -> Self {
        Self {
            start,
            current: start,
        }
    }

    /// The cell the drag started on.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The cell the pointer was last seen over.
    pub fn current(&self) -> Cell {
        self.current
    }

    /// Moves the pointer to `cell`.
    pub fn update(&mut self, cell: Cell) {
        self.current = cell;
    }

    /// The cells covered by releasing the drag on `end`. See [`selected_cells`].
    pub fn cells_to(&self, end: Cell) -> Result<Vec<Cell>, Rejection> {
        selected_cells(self.start, end)
    }
}

/// Returns the cells from `start` to `end` inclusive, if they form a line in one of the eight directions.
///
/// Horizontal and vertical drags of any length are accepted. Diagonal drags must move the same distance along
/// both axes.
pub fn selected_cells(start: Cell, end: Cell) -> Result<Vec<Cell>, Rejection> {
    let dr = end.0 as isize - start.0 as isize;
    let dc = end.1 as isize - start.1 as isize;

    let direction = WordDirection::from_delta((dr, dc)).ok_or(Rejection::NoMovement)?;
    if direction.is_diagonal() && dr.abs() != dc.abs() {
        return Err(Rejection::UnevenDiagonal);
    }

    Ok(Placement::new(start, end).cells())
}

/// Finds the first placement, in table order, whose cells equal `selected` read either forwards or backwards.
///
/// Words already in `found` are skipped entirely. Returns the word together with the placement oriented the
/// way it was selected.
pub fn match_selection<'a>(
    selected: &[Cell],
    placements: &'a [(String, Placement)],
    found: &FoundWords,
) -> Option<(&'a str, Placement)> {
    placements
        .iter()
        .filter(|(word, _)| !found.contains_key(word))
        .find_map(|(word, placement)| {
            let len = word.chars().count();

            [*placement, placement.reversed()]
                .into_iter()
                .find(|candidate| candidate.cells_for_len(len) == selected)
                .map(|candidate| (word.as_str(), candidate))
        })
}
