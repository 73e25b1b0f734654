use crate::layout::GridLayout;
use crate::palette::{Palette, PaletteName};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;
use wordsearch_core::{
    Difficulty, GameSession, Generator, Position, Puzzle, Theme, WordSearchError, MAX_SIZE,
    MIN_SIZE,
};

/// Result of handling an input event
pub enum AppAction {
    Continue,
    Quit,
}

/// Puzzle settings chosen on the command line or in game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub size: usize,
    pub difficulty: Difficulty,
}

/// Generate a puzzle for the settings, returning the seed that produced it
pub fn generate_puzzle(settings: Settings, seed: Option<u64>) -> Result<(Puzzle, u64), WordSearchError> {
    let seed = seed.unwrap_or_else(rand::random);
    let puzzle = Generator::with_seed(seed).generate(
        settings.theme,
        settings.size,
        settings.difficulty,
    )?;
    Ok((puzzle, seed))
}

/// The main application state
pub struct App {
    /// Current game
    pub session: GameSession,
    /// Settings of the current puzzle
    pub settings: Settings,
    /// Seed of the current puzzle
    pub seed: u64,
    /// Keyboard cursor
    pub cursor: Position,
    /// Color palette
    pub palette: Palette,
    palette_name: PaletteName,
    /// Where the grid was last drawn
    pub layout: Option<GridLayout>,
    /// Message to display
    pub message: Option<String>,
    /// The message reports a failure
    pub message_is_error: bool,
    /// Message timer
    message_timer: u32,
    /// Whether the left mouse button is held on the grid
    dragging: bool,
}

impl App {
    pub fn new(settings: Settings, seed: Option<u64>, palette: PaletteName) -> Result<Self, WordSearchError> {
        let (puzzle, seed) = generate_puzzle(settings, seed)?;
        let center = settings.size / 2;
        Ok(Self {
            session: GameSession::new(puzzle),
            settings,
            seed,
            cursor: Position::new(center, center),
            palette: palette.palette(),
            palette_name: palette,
            layout: None,
            message: None,
            message_is_error: false,
            message_timer: 0,
            dragging: false,
        })
    }

    /// Get the tick rate
    pub fn get_tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_is_error = false;
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Show a temporary message in the error color
    pub fn show_error(&mut self, msg: &str) {
        self.show_message(msg);
        self.message_is_error = true;
    }

    /// Start over with a fresh puzzle for the current settings
    pub fn new_puzzle(&mut self) {
        match generate_puzzle(self.settings, None) {
            Ok((puzzle, seed)) => {
                let placed = puzzle.words().len();
                self.session.load(puzzle);
                self.seed = seed;
                self.dragging = false;
                let center = self.settings.size / 2;
                self.cursor = Position::new(center, center);
                self.show_message(&format!(
                    "New {} {} puzzle, {} words",
                    self.settings.difficulty, self.settings.theme, placed
                ));
            }
            Err(e) => {
                log::warn!("could not generate puzzle: {}", e);
                self.show_error(&e.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.session.selection().is_selecting() {
                    self.finish_selection();
                } else {
                    self.session.begin_selection(self.cursor);
                }
            }
            KeyCode::Esc => {
                if self.session.selection().is_selecting() {
                    self.finish_selection();
                }
            }

            KeyCode::Char('n') => self.new_puzzle(),
            KeyCode::Char('t') => {
                self.settings.theme = self.settings.theme.next();
                self.new_puzzle();
            }
            KeyCode::Char('d') => {
                self.settings.difficulty = self.settings.difficulty.next();
                self.new_puzzle();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(1),
            KeyCode::Char('-') => self.resize(-1),
            KeyCode::Char('p') => {
                self.palette_name = self.palette_name.next();
                self.palette = self.palette_name.palette();
            }
            _ => {}
        }
        AppAction::Continue
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let cell = self
            .layout
            .and_then(|layout| layout.cell_at(event.column, event.row));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = cell {
                    self.dragging = true;
                    self.cursor = pos;
                    self.session.begin_selection(pos);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => match cell {
                Some(pos) => {
                    self.cursor = pos;
                    self.session.extend_selection(pos);
                }
                // Leaving the grid ends the gesture
                None => self.finish_selection(),
            },
            MouseEventKind::Up(MouseButton::Left) if self.dragging => self.finish_selection(),
            _ => {}
        }
    }

    fn finish_selection(&mut self) {
        self.dragging = false;
        if let Some(word) = self.session.end_selection() {
            if self.session.is_complete() {
                self.show_message("Congratulations! You found all the words!");
            } else {
                self.show_message(&format!("Found {}!", word));
            }
        }
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let max = self.settings.size as i32 - 1;
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, max) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, max) as usize;
        self.cursor = Position::new(new_row, new_col);
        self.session.extend_selection(self.cursor);
    }

    fn resize(&mut self, delta: i32) {
        let size = (self.settings.size as i32 + delta).clamp(MIN_SIZE as i32, MAX_SIZE as i32) as usize;
        if size == self.settings.size {
            self.show_error(&format!("Size must be between {} and {}", MIN_SIZE, MAX_SIZE));
            return;
        }
        self.settings.size = size;
        self.new_puzzle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let settings = Settings {
            theme: Theme::Space,
            size: 10,
            difficulty: Difficulty::Easy,
        };
        App::new(settings, Some(42), PaletteName::Dark).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_seeded_app_is_reproducible() {
        let a = app();
        let b = app();
        assert_eq!(a.session.puzzle(), b.session.puzzle());
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_keyboard_selection_finds_word() {
        let mut app = app();
        let placement = app.session.puzzle().solutions()[0].clone();
        app.cursor = placement.start();
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.session.selection().is_selecting());

        // Walk the cursor to the end with cursor keys
        let (dr, dc) = placement.direction.delta();
        for _ in 1..placement.word.len() {
            if dr > 0 {
                app.handle_key(key(KeyCode::Down));
            }
            if dc > 0 {
                app.handle_key(key(KeyCode::Right));
            } else if dc < 0 {
                app.handle_key(key(KeyCode::Left));
            }
        }
        assert_eq!(app.cursor, placement.end().unwrap());
        app.handle_key(key(KeyCode::Enter));
        assert!(app.session.is_found(&placement.word));
    }

    #[test]
    fn test_mouse_drag_finds_word() {
        let mut app = app();
        let layout = GridLayout { x: 0, y: 0, size: 10 };
        app.layout = Some(layout);
        let placement = app.session.puzzle().solutions()[0].clone();

        let (x0, y0) = layout.cell_origin(placement.start());
        let (x1, y1) = layout.cell_origin(placement.end().unwrap());
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x0, y0));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), x1, y1));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x1, y1));
        assert!(app.session.is_found(&placement.word));
        assert!(app.message.is_some());
    }

    #[test]
    fn test_drag_off_grid_ends_gesture() {
        let mut app = app();
        let layout = GridLayout { x: 0, y: 0, size: 10 };
        app.layout = Some(layout);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        assert!(app.session.selection().is_selecting());
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 200, 1));
        assert!(!app.session.selection().is_selecting());
    }

    #[test]
    fn test_settings_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.settings.theme, Theme::Food);
        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.settings.difficulty, Difficulty::Medium);
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.settings.size, 11);
        assert_eq!(app.session.puzzle().size(), 11);

        app.settings.size = MIN_SIZE;
        app.handle_key(key(KeyCode::Char('-')));
        assert_eq!(app.settings.size, MIN_SIZE);
    }

    #[test]
    fn test_size_limit_is_an_error_message() {
        let mut app = app();
        app.settings.size = MAX_SIZE;
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.message.as_deref(), Some("Size must be between 8 and 20"));
        assert!(app.message_is_error);

        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.message.is_some());
        assert!(!app.message_is_error);
    }
}
