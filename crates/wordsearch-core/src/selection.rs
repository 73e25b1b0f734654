//! Drag-selection over the grid and word matching.
//!
//! A gesture is anchored at the cell where it began. Every pointer move
//! recomputes the whole selection as the discrete line from the anchor to the
//! pointer, so the selection never accumulates a path. When the gesture ends
//! the letters along the line are checked against the puzzle's solutions,
//! forwards and then backwards.

use crate::grid::{Grid, Position};
use crate::puzzle::Placement;

/// Shortest selection that can match a word
pub const MIN_SELECTION_LEN: usize = 3;

/// `n / d` rounded to the nearest integer, halves toward positive infinity
fn round_div(n: isize, d: isize) -> isize {
    (2 * n + d).div_euclid(2 * d)
}

/// Cells on the discrete line from `start` to `end`, both included.
///
/// Steps along the longer axis and rounds the other, so slopes that are not a
/// multiple of 45 degrees still produce a (staircase) line.
pub fn line_cells(start: Position, end: Position) -> Vec<Position> {
    let dr = end.row as isize - start.row as isize;
    let dc = end.col as isize - start.col as isize;
    let steps = dr.abs().max(dc.abs());

    if steps == 0 {
        return vec![start];
    }

    (0..=steps)
        .map(|i| {
            let row = start.row as isize + round_div(dr * i, steps);
            let col = start.col as isize + round_div(dc * i, steps);
            Position::new(row as usize, col as usize)
        })
        .collect()
}

/// Find the solution spelled by `candidate`, read forwards or backwards
pub fn check_word<'a>(candidate: &str, solutions: &'a [Placement]) -> Option<&'a Placement> {
    if let Some(solution) = solutions.iter().find(|s| s.word == candidate) {
        return Some(solution);
    }
    let reversed: String = candidate.chars().rev().collect();
    solutions.iter().find(|s| s.word == reversed)
}

/// Match a finished selection against the solutions
pub fn match_selection<'a>(
    grid: &Grid,
    cells: &[Position],
    solutions: &'a [Placement],
) -> Option<&'a Placement> {
    if cells.len() < MIN_SELECTION_LEN {
        return None;
    }
    let candidate = grid.letters_along(cells)?;
    check_word(&candidate, solutions)
}

/// A finished gesture that spelled a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMatch {
    pub word: String,
    /// The selected cells, anchor first
    pub cells: Vec<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting,
}

/// Tracks the in-progress gesture for one session
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    state: SelectionState,
    cells: Vec<Position>,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Idle,
            cells: Vec::new(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_selecting(&self) -> bool {
        self.state == SelectionState::Selecting
    }

    /// The cell the current gesture started on
    pub fn anchor(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Cells of the current selection, anchor first
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Start a new gesture, dropping any previous one
    pub fn begin(&mut self, cell: Position) {
        self.state = SelectionState::Selecting;
        self.cells = vec![cell];
    }

    /// Move the free end of the gesture. Ignored while idle.
    pub fn extend(&mut self, cell: Position) {
        if self.state != SelectionState::Selecting {
            return;
        }
        if let Some(anchor) = self.anchor() {
            self.cells = line_cells(anchor, cell);
        }
    }

    /// Go back to idle and hand over the selected cells
    pub fn finish(&mut self) -> Vec<Position> {
        self.state = SelectionState::Idle;
        std::mem::take(&mut self.cells)
    }

    /// End the gesture. Returns the match if its word is not in `found` yet.
    pub fn end(
        &mut self,
        grid: &Grid,
        solutions: &[Placement],
        found: &[String],
    ) -> Option<SelectionMatch> {
        let cells = self.finish();
        let solution = match_selection(grid, &cells, solutions)?;
        if found.iter().any(|w| *w == solution.word) {
            return None;
        }
        Some(SelectionMatch {
            word: solution.word.clone(),
            cells,
        })
    }
}
