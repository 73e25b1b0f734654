//! Game state management for the WASM word search

use serde::{Deserialize, Serialize};
use wordsearch_core::{
    Difficulty, GameSession, GameStats, Generator, Position, Puzzle, Theme, WordSearchError,
    MAX_SIZE, MIN_SIZE,
};

/// Screen-space placement of the grid on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Left edge of the first cell
    pub x: f64,
    /// Top edge of the first cell
    pub y: f64,
    /// Cell side in CSS pixels
    pub cell_size: f64,
}

impl CanvasLayout {
    /// Fit a `size x size` grid into the left part of the canvas
    pub fn fit(width: u32, height: u32, size: usize) -> Self {
        let max_grid_height = (height as f64 - 80.0).max(240.0);
        let max_grid_width = (width as f64 * 0.65).max(240.0);
        let cell_size = (max_grid_height / size as f64)
            .min(max_grid_width / size as f64)
            .clamp(18.0, 50.0);
        let grid_height = cell_size * size as f64;
        Self {
            x: 40.0,
            y: ((height as f64 - grid_height) / 2.0).max(20.0),
            cell_size,
        }
    }

    /// Top-left corner of a cell
    pub fn cell_origin(&self, pos: Position) -> (f64, f64) {
        (
            self.x + pos.col as f64 * self.cell_size,
            self.y + pos.row as f64 * self.cell_size,
        )
    }

    /// The cell under a canvas point, if any
    pub fn cell_at(&self, px: f64, py: f64, size: usize) -> Option<Position> {
        let col = ((px - self.x) / self.cell_size).floor();
        let row = ((py - self.y) / self.cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= size as f64 || row >= size as f64 {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

/// Puzzle settings for the next generated puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub size: usize,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Nature,
            size: 15,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Settings {
    /// Parse settings as they come from JavaScript
    pub fn parse(theme: &str, size: i32, difficulty: &str) -> Result<Self, WordSearchError> {
        let theme: Theme = theme.parse()?;
        if size < MIN_SIZE as i32 || size > MAX_SIZE as i32 {
            return Err(WordSearchError::InvalidSize {
                size: size as i64,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        let difficulty: Difficulty = difficulty.parse()?;
        Ok(Self {
            theme,
            size: size as usize,
            difficulty,
        })
    }
}

/// Snapshot of the game for the page around the canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub settings: Settings,
    pub words: Vec<String>,
    pub found_words: Vec<String>,
    pub stats: GameStats,
    pub message: Option<String>,
}

/// The game state
pub struct GameState {
    session: GameSession,
    settings: Settings,
    /// Keyboard cursor
    cursor: Position,
    /// Whether a pointer is held down on the grid
    dragging: bool,
    /// Current message to display
    message: Option<String>,
    /// Message timer (ticks remaining)
    message_timer: u32,
}

impl GameState {
    /// Create a new game
    pub fn new(settings: Settings) -> Result<Self, WordSearchError> {
        Self::with_generator(settings, &mut Generator::new())
    }

    /// Create a new game from a seeded generator
    pub fn with_seed(settings: Settings, seed: u64) -> Result<Self, WordSearchError> {
        Self::with_generator(settings, &mut Generator::with_seed(seed))
    }

    fn with_generator(settings: Settings, generator: &mut Generator) -> Result<Self, WordSearchError> {
        let puzzle = generator.generate(settings.theme, settings.size, settings.difficulty)?;
        let center = settings.size / 2;
        Ok(Self {
            session: GameSession::new(puzzle),
            settings,
            cursor: Position::new(center, center),
            dragging: false,
            message: None,
            message_timer: 0,
        })
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.session.puzzle()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    fn show_message(&mut self, msg: String) {
        self.message = Some(msg);
        self.message_timer = 180; // ~3 seconds at 60fps
    }

    pub fn pointer_down(&mut self, cell: Option<Position>) {
        if let Some(pos) = cell {
            self.dragging = true;
            self.cursor = pos;
            self.session.begin_selection(pos);
        }
    }

    /// Dragging off the grid ends the gesture like a release
    pub fn pointer_move(&mut self, cell: Option<Position>) -> Option<String> {
        if !self.dragging {
            return None;
        }
        match cell {
            Some(pos) => {
                self.cursor = pos;
                self.session.extend_selection(pos);
                None
            }
            None => self.finish_selection(),
        }
    }

    /// Pointer released or left the grid. Returns a newly found word.
    pub fn pointer_up(&mut self) -> Option<String> {
        if !self.dragging {
            return None;
        }
        self.finish_selection()
    }

    fn finish_selection(&mut self) -> Option<String> {
        self.dragging = false;
        let word = self.session.end_selection()?;
        if self.session.is_complete() {
            self.show_message("Congratulations! You found all the words!".to_string());
        } else {
            self.show_message(format!("Found {}!", word));
        }
        Some(word)
    }

    /// Keyboard play: arrows or hjkl move, Space/Enter start and finish a selection
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" | "k" => self.move_cursor(-1, 0),
            "ArrowDown" | "j" => self.move_cursor(1, 0),
            "ArrowLeft" | "h" => self.move_cursor(0, -1),
            "ArrowRight" | "l" => self.move_cursor(0, 1),
            " " | "Enter" => {
                if self.session.selection().is_selecting() {
                    self.finish_selection();
                } else {
                    self.session.begin_selection(self.cursor);
                }
            }
            "Escape" => {
                if self.session.selection().is_selecting() {
                    self.finish_selection();
                }
            }
            _ => return false,
        }
        true
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let max = self.settings.size as i32 - 1;
        let row = (self.cursor.row as i32 + row_delta).clamp(0, max) as usize;
        let col = (self.cursor.col as i32 + col_delta).clamp(0, max) as usize;
        self.cursor = Position::new(row, col);
        self.session.extend_selection(self.cursor);
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            settings: self.settings,
            words: self.session.puzzle().words().to_vec(),
            found_words: self.session.found_words().as_slice().to_vec(),
            stats: self.session.stats(),
            message: self.message.clone(),
        }
    }
}
