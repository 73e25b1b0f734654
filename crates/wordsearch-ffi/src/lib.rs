use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use wordsearch_core::{
    api, Difficulty, Direction, GameSession, Generator, Placement, Position, Puzzle, PuzzleRequest,
    Theme, WordSearchError, MAX_SIZE, MIN_SIZE,
};

uniffi::setup_scaffolding!();

/// Error returned across the FFI boundary
#[derive(Debug, Clone, thiserror::Error, uniffi::Error)]
pub enum PuzzleError {
    /// Theme, size or difficulty rejected
    #[error("{message}")]
    InvalidConfig { message: String },
    /// Generation or a saved game failed a consistency check
    #[error("{message}")]
    Internal { message: String },
}

impl From<WordSearchError> for PuzzleError {
    fn from(err: WordSearchError) -> Self {
        let message = err.to_string();
        if err.is_invalid_config() {
            PuzzleError::InvalidConfig { message }
        } else {
            PuzzleError::Internal { message }
        }
    }
}

/// Word category
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum GameTheme {
    Nature,
    Animals,
    Space,
    Food,
    Sports,
    Deer,
}

impl From<GameTheme> for Theme {
    fn from(t: GameTheme) -> Self {
        match t {
            GameTheme::Nature => Theme::Nature,
            GameTheme::Animals => Theme::Animals,
            GameTheme::Space => Theme::Space,
            GameTheme::Food => Theme::Food,
            GameTheme::Sports => Theme::Sports,
            GameTheme::Deer => Theme::Deer,
        }
    }
}

impl From<Theme> for GameTheme {
    fn from(t: Theme) -> Self {
        match t {
            Theme::Nature => GameTheme::Nature,
            Theme::Animals => GameTheme::Animals,
            Theme::Space => GameTheme::Space,
            Theme::Food => GameTheme::Food,
            Theme::Sports => GameTheme::Sports,
            Theme::Deer => GameTheme::Deer,
        }
    }
}

/// Difficulty level for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum GameDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<GameDifficulty> for Difficulty {
    fn from(d: GameDifficulty) -> Self {
        match d {
            GameDifficulty::Easy => Difficulty::Easy,
            GameDifficulty::Medium => Difficulty::Medium,
            GameDifficulty::Hard => Difficulty::Hard,
        }
    }
}

impl From<Difficulty> for GameDifficulty {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => GameDifficulty::Easy,
            Difficulty::Medium => GameDifficulty::Medium,
            Difficulty::Hard => GameDifficulty::Hard,
        }
    }
}

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct CellRecord {
    pub row: u32,
    pub col: u32,
}

impl From<Position> for CellRecord {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row as u32,
            col: pos.col as u32,
        }
    }
}

/// Where a word was placed
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PlacementRecord {
    pub word: String,
    pub row: u32,
    pub col: u32,
    /// Wire name of the direction, e.g. `diagonalBack`
    pub direction: String,
}

impl From<&Placement> for PlacementRecord {
    fn from(p: &Placement) -> Self {
        Self {
            word: p.word.clone(),
            row: p.row as u32,
            col: p.col as u32,
            direction: p.direction.to_string(),
        }
    }
}

/// Progress counters for the UI
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct GameProgress {
    pub total_words: u32,
    pub found_words: u32,
    pub remaining_words: u32,
    /// Rounded to the nearest whole percent
    pub completion_percent: u32,
    pub is_complete: bool,
}

/// Status code and JSON body, as an HTTP handler would send them
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The main word-search game interface for mobile platforms
#[derive(uniffi::Object)]
pub struct WordSearchGame {
    session: Mutex<GameSession>,
    theme: Theme,
    difficulty: Difficulty,
}

impl WordSearchGame {
    fn from_puzzle(puzzle: Puzzle, theme: Theme, difficulty: Difficulty) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(GameSession::new(puzzle)),
            theme,
            difficulty,
        })
    }

    fn position(&self, row: u32, col: u32) -> Option<Position> {
        let size = lock(&self.session).puzzle().size();
        let (row, col) = (row as usize, col as usize);
        (row < size && col < size).then(|| Position::new(row, col))
    }
}

fn check_size(size: u32) -> Result<usize, PuzzleError> {
    let size = size as usize;
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(WordSearchError::InvalidSize {
            size: size as i64,
            min: MIN_SIZE,
            max: MAX_SIZE,
        }
        .into());
    }
    Ok(size)
}

#[uniffi::export]
impl WordSearchGame {
    /// Create a new game with a random puzzle
    #[uniffi::constructor]
    pub fn new(theme: GameTheme, size: u32, difficulty: GameDifficulty) -> Result<Arc<Self>, PuzzleError> {
        let size = check_size(size)?;
        let (theme, difficulty) = (theme.into(), difficulty.into());
        let puzzle = Generator::new().generate(theme, size, difficulty)?;
        Ok(Self::from_puzzle(puzzle, theme, difficulty))
    }

    /// Create a reproducible game from a seed
    #[uniffi::constructor]
    pub fn new_with_seed(
        theme: GameTheme,
        size: u32,
        difficulty: GameDifficulty,
        seed: u64,
    ) -> Result<Arc<Self>, PuzzleError> {
        let size = check_size(size)?;
        let (theme, difficulty) = (theme.into(), difficulty.into());
        let puzzle = Generator::with_seed(seed).generate(theme, size, difficulty)?;
        Ok(Self::from_puzzle(puzzle, theme, difficulty))
    }

    pub fn theme(&self) -> GameTheme {
        self.theme.into()
    }

    pub fn difficulty(&self) -> GameDifficulty {
        self.difficulty.into()
    }

    /// Grid side length
    pub fn size(&self) -> u32 {
        lock(&self.session).puzzle().size() as u32
    }

    /// Grid rows as strings of letters
    pub fn rows(&self) -> Vec<String> {
        let session = lock(&self.session);
        session
            .puzzle()
            .grid()
            .rows()
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Letter at a cell, if in bounds
    pub fn letter(&self, row: u32, col: u32) -> Option<String> {
        let pos = self.position(row, col)?;
        let session = lock(&self.session);
        session.puzzle().grid().get(pos).map(|c| c.to_string())
    }

    /// Words hidden in the grid, in placement order
    pub fn words(&self) -> Vec<String> {
        lock(&self.session).puzzle().words().to_vec()
    }

    /// Answer key
    pub fn solutions(&self) -> Vec<PlacementRecord> {
        lock(&self.session)
            .puzzle()
            .solutions()
            .iter()
            .map(PlacementRecord::from)
            .collect()
    }

    /// Start a selection; out-of-grid cells are ignored
    pub fn begin_selection(&self, row: u32, col: u32) {
        if let Some(pos) = self.position(row, col) {
            lock(&self.session).begin_selection(pos);
        }
    }

    /// Move the free end of the current selection
    pub fn extend_selection(&self, row: u32, col: u32) {
        if let Some(pos) = self.position(row, col) {
            lock(&self.session).extend_selection(pos);
        }
    }

    /// Finish the selection; returns the word if it was newly found
    pub fn end_selection(&self) -> Option<String> {
        lock(&self.session).end_selection()
    }

    /// Cells of the selection in progress
    pub fn selected_cells(&self) -> Vec<CellRecord> {
        lock(&self.session)
            .selection()
            .cells()
            .iter()
            .map(|&pos| pos.into())
            .collect()
    }

    /// Cells covered by found words
    pub fn highlighted_cells(&self) -> Vec<CellRecord> {
        let session = lock(&self.session);
        Position::all(session.puzzle().size())
            .filter(|&pos| session.is_highlighted(pos))
            .map(CellRecord::from)
            .collect()
    }

    pub fn found_words(&self) -> Vec<String> {
        lock(&self.session).found_words().as_slice().to_vec()
    }

    pub fn is_found(&self, word: String) -> bool {
        lock(&self.session).is_found(&word)
    }

    pub fn progress(&self) -> GameProgress {
        let stats = lock(&self.session).stats();
        GameProgress {
            total_words: stats.total_words as u32,
            found_words: stats.found_words as u32,
            remaining_words: stats.remaining_words as u32,
            completion_percent: stats.completion_percent,
            is_complete: stats.is_complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        lock(&self.session).is_complete()
    }

    /// Puzzle as JSON in the `{ grid, words, solutions }` shape
    pub fn puzzle_json(&self) -> String {
        serde_json::to_string(lock(&self.session).puzzle()).unwrap_or_default()
    }

    /// Serialize the game state for saving
    pub fn serialize(&self) -> String {
        let session = lock(&self.session);
        serde_json::json!({
            "theme": self.theme.key(),
            "difficulty": self.difficulty.key(),
            "puzzle": session.puzzle(),
            "found": session.found_words().as_slice(),
        })
        .to_string()
    }
}

/// Restore a saved game. Found words are replayed through the selection
/// engine, so a save whose words are not in the puzzle is rejected.
#[uniffi::export]
pub fn game_deserialize(json: String) -> Result<Arc<WordSearchGame>, PuzzleError> {
    let invalid = |reason: String| PuzzleError::from(WordSearchError::InvalidPuzzle { reason });

    let data: serde_json::Value = serde_json::from_str(&json).map_err(|e| invalid(e.to_string()))?;
    let theme: Theme = data["theme"].as_str().unwrap_or_default().parse()?;
    let difficulty: Difficulty = data["difficulty"].as_str().unwrap_or_default().parse()?;
    let puzzle: Puzzle =
        serde_json::from_value(data["puzzle"].clone()).map_err(|e| invalid(e.to_string()))?;

    let mut session = GameSession::new(puzzle);
    if let Some(found) = data["found"].as_array() {
        for word in found.iter().filter_map(|w| w.as_str()) {
            let placement = session
                .puzzle()
                .solution_for(word)
                .cloned()
                .ok_or_else(|| invalid(format!("saved word {} is not in the puzzle", word)))?;
            let end = placement
                .end()
                .ok_or_else(|| invalid(format!("saved word {} runs off the grid", word)))?;
            session.begin_selection(placement.start());
            session.extend_selection(end);
            if session.end_selection().is_none() {
                return Err(invalid(format!("saved word {} is listed more than once", word)));
            }
        }
    }

    Ok(Arc::new(WordSearchGame {
        session: Mutex::new(session),
        theme,
        difficulty,
    }))
}

/// Generate a puzzle JSON from raw request values; missing values take defaults
#[uniffi::export]
pub fn generate_puzzle_json(
    theme: Option<String>,
    size: Option<i64>,
    difficulty: Option<String>,
) -> Result<String, PuzzleError> {
    let request = PuzzleRequest {
        theme,
        size,
        difficulty,
    };
    let puzzle = api::handle_puzzle_request(&request).map_err(|e| match e {
        api::ApiError::BadRequest(err) => PuzzleError::from(err),
        api::ApiError::Internal(err) => {
            log::warn!("puzzle generation failed: {}", err);
            PuzzleError::Internal {
                message: "Failed to generate puzzle".to_string(),
            }
        }
    })?;
    serde_json::to_string(&puzzle).map_err(|e| PuzzleError::Internal {
        message: e.to_string(),
    })
}

/// Answer a JSON puzzle request the way the HTTP endpoint does
#[uniffi::export]
pub fn respond_json(request_json: String) -> ApiResponse {
    match serde_json::from_str::<PuzzleRequest>(&request_json) {
        Ok(request) => {
            let (status, body) = api::respond(&request);
            ApiResponse { status, body }
        }
        Err(e) => ApiResponse {
            status: 400,
            body: serde_json::json!({ "error": e.to_string() }).to_string(),
        },
    }
}

/// Available theme keys
#[uniffi::export]
pub fn list_themes() -> Vec<String> {
    api::themes_response().into_iter().map(String::from).collect()
}

/// All eight reading directions, by wire name
#[uniffi::export]
pub fn direction_names() -> Vec<String> {
    Direction::ALL.iter().map(|d| d.to_string()).collect()
}

/// Liveness message
#[uniffi::export]
pub fn health() -> String {
    api::health().message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Arc<WordSearchGame> {
        WordSearchGame::new_with_seed(GameTheme::Sports, 12, GameDifficulty::Medium, 5).unwrap()
    }

    #[test]
    fn test_new_game_shape() {
        let game = game();
        assert_eq!(game.size(), 12);
        assert_eq!(game.rows().len(), 12);
        assert!(game.rows().iter().all(|r| r.len() == 12));
        assert_eq!(game.theme(), GameTheme::Sports);
        assert!(game.words().len() <= 8);
        assert_eq!(game.letter(12, 0), None);
    }

    #[test]
    fn test_rejects_bad_size() {
        let err = WordSearchGame::new(GameTheme::Food, 30, GameDifficulty::Easy)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Size must be between 8 and 20");
        assert!(matches!(err, PuzzleError::InvalidConfig { .. }));
    }

    #[test]
    fn test_selection_round_trip() {
        let game = game();
        let placement = game.solutions()[0].clone();
        let len = placement.word.len() as u32;
        let (dr, dc): (i64, i64) = match placement.direction.as_str() {
            "horizontal" => (0, 1),
            "vertical" => (1, 0),
            "diagonal" => (1, 1),
            "diagonalBack" => (1, -1),
            other => panic!("unexpected direction {}", other),
        };
        let end_row = (placement.row as i64 + dr * (len as i64 - 1)) as u32;
        let end_col = (placement.col as i64 + dc * (len as i64 - 1)) as u32;

        game.begin_selection(end_row, end_col);
        game.extend_selection(placement.row, placement.col);
        assert_eq!(game.selected_cells().len(), len as usize);
        assert_eq!(game.end_selection(), Some(placement.word.clone()));
        assert!(game.is_found(placement.word.clone()));
        assert_eq!(game.highlighted_cells().len(), len as usize);
        assert_eq!(game.progress().found_words, 1);

        // Found again: no new word
        game.begin_selection(placement.row, placement.col);
        game.extend_selection(end_row, end_col);
        assert_eq!(game.end_selection(), None);
    }

    #[test]
    fn test_serialize_restores_progress() {
        let game = game();
        let placement = lock(&game.session).puzzle().solutions()[0].clone();
        let (start, end) = (placement.start(), placement.end().unwrap());
        game.begin_selection(start.row as u32, start.col as u32);
        game.extend_selection(end.row as u32, end.col as u32);
        assert!(game.end_selection().is_some());

        let restored = game_deserialize(game.serialize()).unwrap();
        assert_eq!(restored.found_words(), vec![placement.word]);
        assert_eq!(restored.highlighted_cells(), game.highlighted_cells());
        assert_eq!(restored.rows(), game.rows());
        assert_eq!(restored.difficulty(), GameDifficulty::Medium);
    }

    #[test]
    fn test_deserialize_rejects_unknown_word() {
        let game = game();
        let mut data: serde_json::Value = serde_json::from_str(&game.serialize()).unwrap();
        data["found"] = serde_json::json!(["NOTAWORD"]);
        assert!(game_deserialize(data.to_string()).is_err());
    }

    #[test]
    fn test_deserialize_rejects_repeated_word() {
        let game = game();
        let word = lock(&game.session).puzzle().words()[0].clone();
        let mut data: serde_json::Value = serde_json::from_str(&game.serialize()).unwrap();
        data["found"] = serde_json::json!([word, word]);
        let err = game_deserialize(data.to_string()).err().unwrap();
        assert!(err.to_string().contains("listed more than once"));

        data["found"] = serde_json::json!([word]);
        let restored = game_deserialize(data.to_string()).unwrap();
        assert_eq!(restored.found_words(), vec![word]);
    }

    #[test]
    fn test_generate_puzzle_json_errors() {
        let err = generate_puzzle_json(Some("nonexistent".into()), None, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid theme");
        let err = generate_puzzle_json(None, Some(7), None).unwrap_err();
        assert_eq!(err.to_string(), "Size must be between 8 and 20");
        let json = generate_puzzle_json(None, None, None).unwrap();
        let puzzle: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(puzzle.size(), 15);
    }

    #[test]
    fn test_respond_json() {
        let ok = respond_json(r#"{"theme":"space","size":10,"difficulty":"easy"}"#.into());
        assert_eq!(ok.status, 200);
        let bad = respond_json(r#"{"difficulty":"brutal"}"#.into());
        assert_eq!(bad.status, 400);
        assert_eq!(bad.body, r#"{"error":"Invalid difficulty"}"#);
    }

    #[test]
    fn test_lists() {
        assert_eq!(list_themes().len(), 6);
        assert_eq!(direction_names().len(), 8);
        assert_eq!(health(), "Word Search API is running");
    }
}
