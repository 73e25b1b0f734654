//! Word-search puzzle engine.
//!
//! Generates themed letter grids with hidden words and resolves drag
//! selections on them.
//!
//! ```
//! use wordsearch_core::{Difficulty, GameSession, Generator, Theme};
//!
//! let puzzle = Generator::with_seed(42)
//!     .generate(Theme::Space, 10, Difficulty::Easy)
//!     .unwrap();
//! let placement = puzzle.solutions()[0].clone();
//!
//! let mut session = GameSession::new(puzzle);
//! session.begin_selection(placement.start());
//! session.extend_selection(placement.end().unwrap());
//! assert_eq!(session.end_selection(), Some(placement.word));
//! ```

pub mod api;
pub mod error;
pub mod generator;
pub mod grid;
pub mod puzzle;
pub mod selection;
pub mod session;
pub mod theme;

pub use api::{handle_puzzle_request, health, respond, themes_response, ApiError, PuzzleRequest};
pub use error::{Result, WordSearchError};
pub use generator::{
    generate, max_words, select_words, Difficulty, Generator, GeneratorConfig, RandomSource,
    SimpleRng,
};
pub use grid::{Direction, Grid, Position, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use puzzle::{Placement, Puzzle};
pub use selection::{
    check_word, line_cells, match_selection, SelectionEngine, SelectionMatch, SelectionState,
};
pub use session::{FoundWords, GameSession, GameStats};
pub use theme::{theme_keys, Theme};
