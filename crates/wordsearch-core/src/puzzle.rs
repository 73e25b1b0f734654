use crate::error::{Result, WordSearchError};
use crate::grid::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};

/// Where and how one word was written into the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// The cell holding the last letter; None for an empty word or one that
    /// would run off the top or left edge
    pub fn end(&self) -> Option<Position> {
        let (dr, dc) = self.direction.delta();
        let n = self.word.chars().count().checked_sub(1)? as isize;
        let row = self.row.checked_add_signed(dr.checked_mul(n)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(n)?)?;
        Some(Position::new(row, col))
    }

    /// Every cell the word covers, first letter first; None if it leaves the board
    pub fn cells(&self, size: usize) -> Option<Vec<Position>> {
        (0..self.word.chars().count())
            .map(|i| self.start().step(self.direction, i, size))
            .collect()
    }
}

/// A generated word-search puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzle")]
pub struct Puzzle {
    grid: Grid,
    words: Vec<String>,
    solutions: Vec<Placement>,
}

#[derive(Deserialize)]
struct RawPuzzle {
    grid: Grid,
    words: Vec<String>,
    solutions: Vec<Placement>,
}

impl TryFrom<RawPuzzle> for Puzzle {
    type Error = WordSearchError;

    fn try_from(raw: RawPuzzle) -> Result<Self> {
        let puzzle = Puzzle {
            grid: raw.grid,
            words: raw.words,
            solutions: raw.solutions,
        };
        puzzle.verify()?;
        Ok(puzzle)
    }
}

impl Puzzle {
    /// Assemble a puzzle from a filled grid and its placements
    pub(crate) fn from_parts(grid: Grid, solutions: Vec<Placement>) -> Self {
        let words = solutions.iter().map(|p| p.word.clone()).collect();
        Self {
            grid,
            words,
            solutions,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Placed words, in placement order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn solutions(&self) -> &[Placement] {
        &self.solutions
    }

    pub fn solution_for(&self, word: &str) -> Option<&Placement> {
        self.solutions.iter().find(|p| p.word == word)
    }

    /// Check that every placement is on the board and spelled out in the grid,
    /// and that `words` lists exactly the placed words in order
    pub fn verify(&self) -> Result<()> {
        let size = self.grid.size();
        for placement in &self.solutions {
            let cells = placement
                .cells(size)
                .ok_or_else(|| WordSearchError::InvalidPuzzle {
                    reason: format!("{} runs off the grid", placement.word),
                })?;
            let spelled = self.grid.letters_along(&cells).unwrap_or_default();
            if spelled != placement.word {
                return Err(WordSearchError::InvalidPuzzle {
                    reason: format!(
                        "{} at ({}, {}) reads {} in the grid",
                        placement.word, placement.row, placement.col, spelled
                    ),
                });
            }
        }

        let placed: Vec<&str> = self.solutions.iter().map(|p| p.word.as_str()).collect();
        let listed: Vec<&str> = self.words.iter().map(String::as_str).collect();
        if placed != listed {
            return Err(WordSearchError::InvalidPuzzle {
                reason: "word list does not match the solutions".to_string(),
            });
        }
        Ok(())
    }
}
