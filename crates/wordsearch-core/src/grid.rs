use crate::error::WordSearchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest supported grid side
pub const MIN_SIZE: usize = 8;
/// Largest supported grid side
pub const MAX_SIZE: usize = 20;
/// Grid side used when a request leaves it out
pub const DEFAULT_SIZE: usize = 15;

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `n` steps away along `direction`, if it lies on a `size x size` board
    pub fn step(self, direction: Direction, n: usize, size: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row as isize + dr * n as isize;
        let col = self.col as isize + dc * n as isize;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /// Iterate over all positions of a `size x size` board, row-major
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }
}

/// One of the eight straight directions a word can run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    DiagonalBack,
    HorizontalBack,
    VerticalBack,
    DiagonalBackUp,
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::DiagonalBack,
        Direction::HorizontalBack,
        Direction::VerticalBack,
        Direction::DiagonalBackUp,
        Direction::DiagonalUp,
    ];

    /// Directions the generator writes words in
    pub const PLACEMENT: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::DiagonalBack,
    ];

    /// (row delta, col delta)
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::DiagonalBack => (1, -1),
            Direction::HorizontalBack => (0, -1),
            Direction::VerticalBack => (-1, 0),
            Direction::DiagonalBackUp => (-1, -1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
            Direction::DiagonalBack => "diagonalBack",
            Direction::HorizontalBack => "horizontalBack",
            Direction::VerticalBack => "verticalBack",
            Direction::DiagonalBackUp => "diagonalBackUp",
            Direction::DiagonalUp => "diagonalUp",
        };
        write!(f, "{}", name)
    }
}

/// Working board used while words are being placed; cells may still be empty
#[derive(Debug, Clone)]
pub(crate) struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos.row * self.size + pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos.row * self.size + pos.col] = Some(letter);
    }

    /// Fill every empty cell and freeze the board
    pub(crate) fn fill(self, mut letter: impl FnMut() -> char) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(&mut letter))
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }
}

/// A finished square letter grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<String>>", try_from = "Vec<Vec<String>>")]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from rows of letters, validating shape and alphabet
    pub fn from_rows(rows: &[Vec<char>]) -> Result<Self, WordSearchError> {
        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(WordSearchError::InvalidPuzzle {
                reason: format!("grid has {} rows", size),
            });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(WordSearchError::InvalidPuzzle {
                    reason: format!("row {} has {} cells, expected {}", r, row.len(), size),
                });
            }
            for &letter in row {
                if !letter.is_ascii_uppercase() {
                    return Err(WordSearchError::InvalidPuzzle {
                        reason: format!("invalid letter {:?} in row {}", letter, r),
                    });
                }
                cells.push(letter);
            }
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at a position, or None if off the board
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// The letter at a position. Panics if off the board.
    pub fn letter(&self, pos: Position) -> char {
        self.cells[pos.row * self.size + pos.col]
    }

    /// Iterate over the rows as letter slices
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }

    /// Concatenate the letters under `cells`; None if any cell is off the board
    pub fn letters_along(&self, cells: &[Position]) -> Option<String> {
        cells.iter().map(|&pos| self.get(pos)).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = WordSearchError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        let mut letters = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut line = Vec::with_capacity(row.len());
            for cell in row {
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => line.push(c),
                    _ => {
                        return Err(WordSearchError::InvalidPuzzle {
                            reason: format!("cell {:?} is not a single letter", cell),
                        })
                    }
                }
            }
            letters.push(line);
        }
        Grid::from_rows(&letters)
    }
}
