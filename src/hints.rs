//! Fixed tips for the hidden words.

use std::fmt::Display;

/// Tip text for every word in [`DEFAULT_WORDS`](crate::DEFAULT_WORDS).
const HINTS: [(&str, &str); 5] = [
    ("HAPPY", "HOLIDAY"),
    ("VALENTINES", "HOLIDAY"),
    ("GABITA", "NICKNAME"),
    ("LOVE", "WHAT WE DO WITH IN A BED"),
    ("SHABOINKING", "Fun time ;)"),
];

/// Shown for words without an entry in the table.
pub const NO_HINT: &str = "No hint available";

/// The answer to a hint request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hint {
    /// A tip for one word that has not been found yet.
    Tip {
        /// The word the tip is about.
        word: String,
        /// The tip itself.
        text: &'static str,
    },

    /// Nothing is left to find.
    AllFound,
}

impl Hint {
    /// The tip for `word`.
    pub fn for_word(word: &str) -> Self {
        Hint::Tip {
            word: word.to_string(),
            text: hint_text(word),
        }
    }
}

/// Looks up the tip text for `word`, falling back to [`NO_HINT`].
pub fn hint_text(word: &str) -> &'static str {
    HINTS
        .iter()
        .find(|(known, _)| *known == word)
        .map_or(NO_HINT, |&(_, text)| text)
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Tip { text, .. } => write!(f, "Hint: {text}"),
            Hint::AllFound => write!(f, "All words found!"),
        }
    }
}
