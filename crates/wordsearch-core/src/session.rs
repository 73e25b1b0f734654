use crate::grid::Position;
use crate::puzzle::Puzzle;
use crate::selection::SelectionEngine;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Words matched so far, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWords(Vec<String>);

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    /// Record a word; returns false if it was already there
    pub fn insert(&mut self, word: String) -> bool {
        if self.contains(&word) {
            return false;
        }
        self.0.push(word);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Progress summary shown next to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_words: usize,
    pub found_words: usize,
    pub remaining_words: usize,
    pub completion_percent: u32,
    pub is_complete: bool,
}

/// One player's game on one puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Puzzle,
    selection: SelectionEngine,
    found: FoundWords,
    /// Cells of every found word
    highlighted: HashSet<Position>,
}

impl GameSession {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            selection: SelectionEngine::new(),
            found: FoundWords::new(),
            highlighted: HashSet::new(),
        }
    }

    /// Swap in a new puzzle and forget all progress
    pub fn load(&mut self, puzzle: Puzzle) {
        self.puzzle = puzzle;
        self.selection = SelectionEngine::new();
        self.found.clear();
        self.highlighted.clear();
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn found_words(&self) -> &FoundWords {
        &self.found
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        self.selection.contains(pos)
    }

    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }

    fn on_grid(&self, cell: Position) -> bool {
        let size = self.puzzle.size();
        cell.row < size && cell.col < size
    }

    /// Start a gesture; a cell off the grid is ignored
    pub fn begin_selection(&mut self, cell: Position) {
        if self.on_grid(cell) {
            self.selection.begin(cell);
        }
    }

    /// Move the free end; a cell off the grid keeps the last selection
    pub fn extend_selection(&mut self, cell: Position) {
        if self.on_grid(cell) {
            self.selection.extend(cell);
        }
    }

    /// Finish the gesture; returns the word if it was newly found
    pub fn end_selection(&mut self) -> Option<String> {
        let found = self.selection.end(
            self.puzzle.grid(),
            self.puzzle.solutions(),
            self.found.as_slice(),
        )?;
        self.found.insert(found.word.clone());
        log::debug!("found {} ({}/{})", found.word, self.found.len(), self.puzzle.words().len());
        self.highlighted.extend(found.cells);
        Some(found.word)
    }

    /// Abandon the gesture (pointer left the grid); handled like a release
    pub fn cancel_selection(&mut self) -> Option<String> {
        self.end_selection()
    }

    pub fn is_complete(&self) -> bool {
        let total = self.puzzle.words().len();
        total > 0 && self.found.len() == total
    }

    pub fn stats(&self) -> GameStats {
        let total = self.puzzle.words().len();
        let found = self.found.len();
        let completion_percent = if total > 0 {
            ((found as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };
        GameStats {
            total_words: total,
            found_words: found,
            remaining_words: total - found,
            completion_percent,
            is_complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Difficulty, Generator};
    use crate::theme::Theme;

    fn session() -> GameSession {
        let puzzle = Generator::with_seed(3)
            .generate(Theme::Food, 12, Difficulty::Easy)
            .unwrap();
        GameSession::new(puzzle)
    }

    fn select(session: &mut GameSession, from: Position, to: Position) -> Option<String> {
        session.begin_selection(from);
        session.extend_selection(to);
        session.end_selection()
    }

    #[test]
    fn test_find_every_word() {
        let mut session = session();
        let solutions = session.puzzle().solutions().to_vec();
        assert!(!solutions.is_empty());

        for (i, placement) in solutions.iter().enumerate() {
            let found = select(&mut session, placement.start(), placement.end().unwrap());
            assert_eq!(found.as_deref(), Some(placement.word.as_str()));
            assert!(session.is_highlighted(placement.end().unwrap()));
            assert_eq!(session.stats().found_words, i + 1);
        }

        let stats = session.stats();
        assert!(stats.is_complete);
        assert_eq!(stats.remaining_words, 0);
        assert_eq!(stats.completion_percent, 100);
    }

    #[test]
    fn test_found_once() {
        let mut session = session();
        let placement = session.puzzle().solutions()[0].clone();
        assert!(select(&mut session, placement.start(), placement.end().unwrap()).is_some());
        // Reverse drag of an already found word reports nothing
        assert!(select(&mut session, placement.end().unwrap(), placement.start()).is_none());
        assert_eq!(session.found_words().len(), 1);
    }

    #[test]
    fn test_cancel_behaves_like_end() {
        let mut session = session();
        let placement = session.puzzle().solutions()[0].clone();
        session.begin_selection(placement.end().unwrap());
        session.extend_selection(placement.start());
        assert_eq!(session.cancel_selection(), Some(placement.word.clone()));
        assert!(!session.selection().is_selecting());
    }

    #[test]
    fn test_off_grid_cells_are_ignored() {
        let mut session = session();
        let placement = session.puzzle().solutions()[0].clone();
        let far = Position::new(1 << 62, 0);

        session.begin_selection(far);
        assert!(!session.selection().is_selecting());
        session.extend_selection(Position::new(usize::MAX, usize::MAX));
        assert!(session.end_selection().is_none());

        // A stray far move mid-gesture keeps the line drawn so far
        session.begin_selection(placement.start());
        session.extend_selection(placement.end().unwrap());
        session.extend_selection(far);
        session.extend_selection(Position::new(0, 12));
        assert_eq!(session.end_selection(), Some(placement.word.clone()));
    }

    #[test]
    fn test_highlights_the_dragged_cells() {
        let mut session = session();
        let placement = session.puzzle().solutions()[0].clone();
        let mut engine = SelectionEngine::new();
        engine.begin(placement.end().unwrap());
        engine.extend(placement.start());
        let expected = engine
            .end(session.puzzle().grid(), session.puzzle().solutions(), &[])
            .unwrap();

        let word = select(&mut session, placement.end().unwrap(), placement.start());
        assert_eq!(word, Some(expected.word));
        for cell in expected.cells {
            assert!(session.is_highlighted(cell));
        }
    }

    #[test]
    fn test_load_clears_progress() {
        let mut session = session();
        let placement = session.puzzle().solutions()[0].clone();
        select(&mut session, placement.start(), placement.end().unwrap());
        session.begin_selection(Position::new(0, 0));

        let next = Generator::with_seed(4)
            .generate(Theme::Deer, 10, Difficulty::Hard)
            .unwrap();
        session.load(next);
        assert!(session.found_words().is_empty());
        assert!(!session.is_highlighted(placement.start()));
        assert!(!session.selection().is_selecting());
        assert_eq!(session.stats().completion_percent, 0);
    }

    #[test]
    fn test_found_words_dedup() {
        let mut found = FoundWords::new();
        assert!(found.insert("TACO".to_string()));
        assert!(!found.insert("TACO".to_string()));
        assert_eq!(found.as_slice(), &["TACO".to_string()]);
    }
}
