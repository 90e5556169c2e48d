//! Grid generation: hiding the words and filling in the rest.

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

use crate::{Cell, Error, Placement, WordDirection};

/// The configuration for the word search. See [`WordSearch::new`] for details.
#[derive(Debug)]
pub struct WordSearchConfig<'a> {
    /// The number of rows.
    pub num_rows: usize,

    /// The number of columns.
    pub num_columns: usize,

    /// The words to hide, in placement priority order. Each must be non-empty and consist of `A` to `Z` only.
    pub words: &'a [String],
}

/// A generated word search: a grid of uppercase letters and the placement of every word that fit.
#[derive(Debug, Clone)]
pub struct WordSearch {
    grid: Array2D<char>,
    placements: Vec<(String, Placement)>,
    unplaced: Vec<String>,
}

impl WordSearch {
    /// Creates and generates a new word search with the specified configuration.
    ///
    /// Words are placed one at a time in list order, so earlier words may block later ones. For each word every
    /// start cell and direction is tried; a candidate is valid when each cell it covers is either still empty or
    /// already holds the letter the word needs there. One valid candidate is picked at random. A word with no
    /// valid candidate is left out of the grid and reported by [`WordSearch::unplaced_words`]. Every cell left
    /// empty afterwards gets a random letter from `A` to `Z`.
    ///
    /// Returns an [`Error`] if the grid has no cells or a word is empty or not all uppercase ASCII letters.
    pub fn new(config: &WordSearchConfig<'_>) -> Result<Self, Error> {
        Self::new_with_rng(config, &mut rand::thread_rng())
    }

    /// Like [`WordSearch::new`], drawing every random choice from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        config: &WordSearchConfig<'_>,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if config.num_rows == 0 || config.num_columns == 0 {
            return Err(Error::EmptyGrid {
                num_rows: config.num_rows,
                num_columns: config.num_columns,
            });
        }

        if let Some(word) = config.words.iter().find(|word| !is_valid_word(word)) {
            return Err(Error::InvalidWord(word.clone()));
        }

        let mut cells = Array2D::filled_with(None, config.num_rows, config.num_columns);
        let mut placements = Vec::with_capacity(config.words.len());
        let mut unplaced = Vec::new();

        for word in config.words {
            let letters: Vec<char> = word.chars().collect();
            let candidates = Self::candidate_placements(&cells, &letters);

            match candidates.choose(rng) {
                Some(&placement) => {
                    Self::place_word(&mut cells, &letters, placement);
                    placements.push((word.clone(), placement));
                }
                None => {
                    warn!(
                        "Could not place the word {word} in a {} x {} grid",
                        config.num_rows, config.num_columns
                    );
                    unplaced.push(word.clone());
                }
            }
        }

        let grid = Self::fill_empty_cells(&cells, rng);
        let word_search = Self {
            grid,
            placements,
            unplaced,
        };

        debug!("Generated word search grid:\n{word_search}");

        Ok(word_search)
    }

    fn candidate_placements(cells: &Array2D<Option<char>>, letters: &[char]) -> Vec<Placement> {
        let num_rows = cells.num_rows();
        let num_columns = cells.num_columns();
        let mut candidates = Vec::new();

        for direction in WordDirection::ALL {
            for row in 0..num_rows {
                for column in 0..num_columns {
                    let Some(placement) = Placement::from_direction(
                        (row, column),
                        letters.len(),
                        direction,
                        num_rows,
                        num_columns,
                    ) else {
                        continue;
                    };

                    let fits = placement
                        .cells()
                        .into_iter()
                        .zip(letters)
                        .all(|(cell, &letter)| cells[cell].map_or(true, |set| set == letter));

                    if fits {
                        candidates.push(placement);
                    }
                }
            }
        }

        candidates
    }

    fn place_word(cells: &mut Array2D<Option<char>>, letters: &[char], placement: Placement) {
        for (cell, &letter) in placement.cells().into_iter().zip(letters) {
            cells[cell] = Some(letter);
        }
    }

    fn fill_empty_cells<R: Rng + ?Sized>(
        cells: &Array2D<Option<char>>,
        rng: &mut R,
    ) -> Array2D<char> {
        let mut letters = cells.elements_row_major_iter();

        Array2D::filled_by_row_major(
            || {
                letters
                    .next()
                    .copied()
                    .flatten()
                    .unwrap_or_else(|| char::from(rng.gen_range(b'A'..=b'Z')))
            },
            cells.num_rows(),
            cells.num_columns(),
        )
    }

    /// The number of rows in the word search grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the word search grid.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Provides a reference to the inner word search grid.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the character at the specified coordinate, returning [`Option::None`] if the coordinates are out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// Every placed word with its placement, in the order the words were given.
    pub fn placements(&self) -> &[(String, Placement)] {
        &self.placements
    }

    /// The placement of `word`, if it was placed.
    pub fn placement(&self, word: &str) -> Option<Placement> {
        self.placements
            .iter()
            .find(|(placed, _)| placed == word)
            .map(|&(_, placement)| placement)
    }

    /// Words that could not be fit into the grid. These can never be found.
    pub fn unplaced_words(&self) -> &[String] {
        &self.unplaced
    }

    /// Reads the letters along `placement`, or returns [`None`] if it leaves the grid.
    pub fn read(&self, placement: Placement) -> Option<String> {
        placement
            .cells()
            .into_iter()
            .map(|(row, column)| self.get(row, column))
            .collect()
    }
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| ch.is_ascii_uppercase())
}

impl Index<Cell> for WordSearch {
    type Output = char;

    fn index(&self, index: Cell) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self
            .placements
            .iter()
            .map(|(word, _)| word.as_str())
            .chain(self.unplaced.iter().map(String::as_str));

        for row in self.grid.rows_iter() {
            for &ch in row {
                write!(f, "{ch} ")?;
            }

            writeln!(f, "| {}", words_iter.next().unwrap_or(""))?;
        }

        Ok(())
    }
}
