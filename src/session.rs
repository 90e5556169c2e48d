//! One play-through of the puzzle: the generated grid plus the player's progress through it.

use std::collections::HashSet;

use log::{debug, info};
use rand::{seq::SliceRandom, Rng};

use crate::{
    match_selection, Cell, Error, FoundWords, Hint, Placement, Selection, WordSearch,
    WordSearchConfig,
};

/// Receives notifications as a [`PuzzleSession`] changes, so a host UI can redraw without reaching into the
/// session's state.
///
/// Every method has an empty default, so implementors only pick the events they care about.
pub trait SessionObserver {
    /// `word` was found along `placement`; its cells should stay highlighted.
    fn word_found(&mut self, _word: &str, _placement: Placement) {}

    /// The found and remaining counts changed.
    fn status_changed(&mut self, _found: usize, _remaining: usize) {}

    /// The last word was found. Called once per session.
    fn completed(&mut self) {}
}

/// Where a session is in its lifecycle. Generation happens inside [`PuzzleSession::new`], so a session is
/// never observed mid-generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting drags.
    Playing,

    /// Every word has been found.
    Completed,
}

/// The outcome of releasing a drag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// The word the drag selected, if any.
    pub word: Option<String>,

    /// Whether this drag found the last word.
    pub completed: bool,
}

/// A word search being played.
///
/// The grid and placements are fixed at construction. Drags arrive through [`on_drag_start`],
/// [`on_drag_update`] and [`on_drag_end`]; only the last one can change the found words.
///
/// [`on_drag_start`]: PuzzleSession::on_drag_start
/// [`on_drag_update`]: PuzzleSession::on_drag_update
/// [`on_drag_end`]: PuzzleSession::on_drag_end
pub struct PuzzleSession {
    word_search: WordSearch,
    words: Vec<String>,
    found: FoundWords,
    selection: Option<Selection>,
    state: SessionState,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl PuzzleSession {
    /// Generates a new puzzle from `config` and starts playing it.
    pub fn new(config: &WordSearchConfig<'_>) -> Result<Self, Error> {
        Self::new_with_rng(config, &mut rand::thread_rng())
    }

    /// Like [`PuzzleSession::new`], drawing every random choice from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        config: &WordSearchConfig<'_>,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let word_search = WordSearch::new_with_rng(config, rng)?;

        Ok(Self {
            word_search,
            words: config.words.to_vec(),
            found: FoundWords::new(),
            selection: None,
            state: SessionState::Playing,
            observers: Vec::new(),
        })
    }

    /// Registers an observer for the rest of the session.
    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// The generated word search.
    pub fn word_search(&self) -> &WordSearch {
        &self.word_search
    }

    /// Every word the player is asked to find, including any that could not be placed.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether every word has been found.
    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// The words found so far.
    pub fn found_words(&self) -> &FoundWords {
        &self.found
    }

    /// The placement `word` was found along, if it has been found.
    pub fn found_placement(&self, word: &str) -> Option<Placement> {
        self.found.get(word).copied()
    }

    /// How many words have been found.
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// How many words are still hidden.
    pub fn remaining_count(&self) -> usize {
        self.words.len() - self.found.len()
    }

    /// The found-words counter as shown to the player.
    pub fn found_label(&self) -> String {
        format!("Words found: {}", self.found_count())
    }

    /// The remaining-words counter as shown to the player.
    pub fn remaining_label(&self) -> String {
        format!("Words left: {}", self.remaining_count())
    }

    /// Every cell covered by a found word.
    pub fn highlighted_cells(&self) -> HashSet<Cell> {
        self.found
            .values()
            .flat_map(|placement| placement.cells())
            .collect()
    }

    /// The drag in progress, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Converts a pointer position into the cell under it, for a grid drawn with square cells of `cell_size`.
    ///
    /// Positions outside the grid are clamped to the nearest edge cell.
    pub fn cell_at_point(&self, x: f64, y: f64, cell_size: f64) -> Cell {
        let to_index = |pos: f64, count: usize| {
            let max = (count as f64 * cell_size - 1.0).max(0.0);
            (pos.clamp(0.0, max) / cell_size) as usize
        };

        self.clamp_cell((
            to_index(y, self.word_search.num_rows()),
            to_index(x, self.word_search.num_columns()),
        ))
    }

    fn clamp_cell(&self, cell: Cell) -> Cell {
        (
            cell.0.min(self.word_search.num_rows() - 1),
            cell.1.min(self.word_search.num_columns() - 1),
        )
    }

    /// Starts a drag on `cell`, discarding any drag already in progress.
    pub fn on_drag_start(&mut self, cell: Cell) {
        self.selection = Some(Selection::new(self.clamp_cell(cell)));
    }

    /// Moves the pointer of the drag in progress to `cell`.
    ///
    /// Returns the start and current cells for drawing a preview line, or [`None`] when no drag is in progress.
    /// Found words are never affected.
    pub fn on_drag_update(&mut self, cell: Cell) -> Option<(Cell, Cell)> {
        let cell = self.clamp_cell(cell);
        let selection = self.selection.as_mut()?;
        selection.update(cell);

        Some((selection.start(), selection.current()))
    }

    /// Releases the drag in progress on `cell` and checks it against the hidden words.
    ///
    /// The drag is discarded whatever the outcome. A drag that is not a straight line in one of the eight
    /// directions, or that selects no unfound word, returns an empty [`MatchResult`] and changes nothing.
    pub fn on_drag_end(&mut self, cell: Cell) -> MatchResult {
        let end = self.clamp_cell(cell);
        let Some(selection) = self.selection.take() else {
            return MatchResult::default();
        };

        let cells = match selection.cells_to(end) {
            Ok(cells) => cells,
            Err(rejection) => {
                debug!(
                    "Rejected selection from {:?} to {end:?}: {rejection:?}",
                    selection.start()
                );
                return MatchResult::default();
            }
        };

        let Some((word, placement)) =
            match_selection(&cells, self.word_search.placements(), &self.found)
        else {
            return MatchResult::default();
        };
        let word = word.to_string();

        info!("Found {word} at {:?} -> {:?}", placement.begin(), placement.end());
        self.found.insert(word.clone(), placement);

        let (found, remaining) = (self.found_count(), self.remaining_count());
        for observer in &mut self.observers {
            observer.word_found(&word, placement);
            observer.status_changed(found, remaining);
        }

        let completed = self.state == SessionState::Playing && remaining == 0;
        if completed {
            info!("All {found} words found");
            self.state = SessionState::Completed;
            for observer in &mut self.observers {
                observer.completed();
            }
        }

        MatchResult {
            word: Some(word),
            completed,
        }
    }

    /// A tip for a randomly chosen word that has not been found yet.
    pub fn hint(&self) -> Hint {
        self.hint_with_rng(&mut rand::thread_rng())
    }

    /// Like [`PuzzleSession::hint`], drawing the choice from `rng`.
    pub fn hint_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Hint {
        let remaining: Vec<&String> = self
            .words
            .iter()
            .filter(|word| !self.found.contains_key(*word))
            .collect();

        remaining
            .choose(rng)
            .map_or(Hint::AllFound, |word| Hint::for_word(word))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{MatchResult, PuzzleSession, SessionObserver, SessionState};
    use crate::{Hint, Placement, WordSearchConfig};

    #[derive(Default)]
    struct Log {
        found: Vec<String>,
        status: Vec<(usize, usize)>,
        completed: usize,
    }

    struct Recorder(Rc<RefCell<Log>>);

    impl SessionObserver for Recorder {
        fn word_found(&mut self, word: &str, _placement: Placement) {
            self.0.borrow_mut().found.push(word.to_string());
        }

        fn status_changed(&mut self, found: usize, remaining: usize) {
            self.0.borrow_mut().status.push((found, remaining));
        }

        fn completed(&mut self) {
            self.0.borrow_mut().completed += 1;
        }
    }

    // A single row lays every word out horizontally. Ten columns always leave room for HUG beside LOVE.
    fn session(words: &[&str], num_columns: usize) -> (PuzzleSession, Rc<RefCell<Log>>) {
        let words: Vec<String> = words.iter().map(|word| word.to_string()).collect();
        let mut session = PuzzleSession::new(&WordSearchConfig {
            num_rows: 1,
            num_columns,
            words: &words,
        })
        .unwrap();

        let log = Rc::new(RefCell::new(Log::default()));
        session.add_observer(Box::new(Recorder(log.clone())));
        (session, log)
    }

    fn drag(session: &mut PuzzleSession, placement: Placement) -> MatchResult {
        session.on_drag_start(placement.begin());
        session.on_drag_update(placement.end());
        session.on_drag_end(placement.end())
    }

    #[test]
    fn finding_every_word_completes_once() {
        let (mut session, log) = session(&["LOVE", "HUG"], 10);
        let love = session.word_search().placement("LOVE").unwrap();
        let hug = session.word_search().placement("HUG").unwrap();

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.found_label(), "Words found: 0");
        assert_eq!(session.remaining_label(), "Words left: 2");

        let result = drag(&mut session, love);
        assert_eq!(result.word.as_deref(), Some("LOVE"));
        assert!(!result.completed);
        assert_eq!(session.found_count(), 1);
        assert_eq!(session.remaining_count(), 1);

        let result = drag(&mut session, hug.reversed());
        assert_eq!(result.word.as_deref(), Some("HUG"));
        assert!(result.completed);
        assert!(session.is_completed());
        assert_eq!(session.found_placement("HUG"), Some(hug.reversed()));

        assert_eq!(drag(&mut session, love), MatchResult::default());
        assert_eq!(drag(&mut session, hug), MatchResult::default());

        let log = log.borrow();
        assert_eq!(log.found, ["LOVE", "HUG"]);
        assert_eq!(log.status, [(1, 1), (2, 0)]);
        assert_eq!(log.completed, 1);
    }

    #[test]
    fn refinding_a_word_changes_nothing() {
        let (mut session, log) = session(&["LOVE", "HUG"], 10);
        let love = session.word_search().placement("LOVE").unwrap();

        drag(&mut session, love);
        let highlighted = session.highlighted_cells();

        assert_eq!(drag(&mut session, love.reversed()), MatchResult::default());
        assert_eq!(session.found_count(), 1);
        assert_eq!(session.highlighted_cells(), highlighted);
        assert_eq!(log.borrow().found, ["LOVE"]);
    }

    #[test]
    fn release_without_start_is_ignored() {
        let (mut session, _) = session(&["LOVE"], 4);

        assert_eq!(session.on_drag_update((0, 3)), None);
        assert_eq!(session.on_drag_end((0, 3)), MatchResult::default());
        assert_eq!(session.found_count(), 0);
    }

    #[test]
    fn selection_is_discarded_after_release() {
        let (mut session, _) = session(&["LOVE"], 4);

        session.on_drag_start((0, 1));
        assert_eq!(session.on_drag_update((0, 2)), Some(((0, 1), (0, 2))));
        assert_eq!(session.on_drag_end((0, 2)), MatchResult::default());
        assert!(session.selection().is_none());
    }

    #[test]
    fn drag_is_clamped_to_grid() {
        let (mut session, _) = session(&["LOVE"], 4);
        let love = session.word_search().placement("LOVE").unwrap();

        let far_end = if love.end() == (0, 3) { (9, 40) } else { (9, 0) };
        session.on_drag_start(love.begin());
        let result = session.on_drag_end(far_end);

        assert_eq!(result.word.as_deref(), Some("LOVE"));
        assert!(result.completed);
    }

    #[test]
    fn point_to_cell() {
        let (session, _) = session(&["LOVE"], 4);

        assert_eq!(session.cell_at_point(0.0, 0.0, 40.0), (0, 0));
        assert_eq!(session.cell_at_point(85.0, 39.0, 40.0), (0, 2));
        assert_eq!(session.cell_at_point(-5.0, 100.0, 40.0), (0, 0));
        assert_eq!(session.cell_at_point(500.0, 20.0, 40.0), (0, 3));
    }

    #[test]
    fn hints_cover_only_unfound_words() {
        let (mut session, _) = session(&["LOVE", "HUG"], 10);
        let love = session.word_search().placement("LOVE").unwrap();
        drag(&mut session, love);

        for _ in 0..20 {
            assert_eq!(
                session.hint(),
                Hint::Tip {
                    word: "HUG".to_string(),
                    text: crate::hints::NO_HINT
                }
            );
        }

        let hug = session.word_search().placement("HUG").unwrap();
        drag(&mut session, hug);
        assert_eq!(session.hint(), Hint::AllFound);
    }
}
