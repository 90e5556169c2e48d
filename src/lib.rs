#![warn(missing_docs)]

//! # Valentine word search
//!
//! A word search with a surprise at the end. Words are hidden in a grid along any of eight directions, the player
//! finds them by dragging from the first letter to the last (or the other way round), and finding them all
//! completes the puzzle.
//!
//! ```
//! use valentine_search::{PuzzleSession, WordSearchConfig};
//!
//! let words = vec![String::from("LOVE"), String::from("HUG")];
//! let mut session = PuzzleSession::new(&WordSearchConfig {
//!     num_rows: 8,
//!     num_columns: 8,
//!     words: &words,
//! })
//! .unwrap();
//!
//! let love = session.word_search().placement("LOVE").unwrap();
//! session.on_drag_start(love.end());
//! let result = session.on_drag_end(love.begin());
//! assert_eq!(result.word.as_deref(), Some("LOVE"));
//! ```

use std::fmt::Display;

mod direction;
pub mod hints;
mod placement;
mod selection;
mod session;
mod word_search;

pub use direction::WordDirection;
pub use hints::Hint;
pub use placement::{Cell, Placement};
pub use selection::{match_selection, selected_cells, FoundWords, Rejection, Selection};
pub use session::{MatchResult, PuzzleSession, SessionObserver, SessionState};
pub use word_search::{WordSearch, WordSearchConfig};

/// Rows in the puzzle grid.
pub const DEFAULT_ROWS: usize = 12;

/// Columns in the puzzle grid.
pub const DEFAULT_COLUMNS: usize = 12;

/// The hidden words, in placement priority order.
pub const DEFAULT_WORDS: [&str; 5] = ["LOVE", "GABITA", "HAPPY", "VALENTINES", "SHABOINKING"];

/// An error that happened when creating the word search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The grid was given zero rows or zero columns.
    EmptyGrid {
        /// The requested number of rows.
        num_rows: usize,
        /// The requested number of columns.
        num_columns: usize,
    },

    /// A word was empty or contained something other than the uppercase letters `A` to `Z`.
    InvalidWord(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyGrid {
                num_rows,
                num_columns,
            } => {
                write!(
                    f,
                    "Grid dimensions {} rows x {} columns leave no room for any letters",
                    num_rows, num_columns
                )
            }
            Error::InvalidWord(word) => {
                write!(
                    f,
                    "Word {:?} must be non-empty and use only the uppercase letters A to Z",
                    word
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// The default word list as owned strings, ready for a [`WordSearchConfig`].
pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|word| word.to_string()).collect()
}
