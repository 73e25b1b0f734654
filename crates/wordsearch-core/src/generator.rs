use crate::error::{Result, WordSearchError};
use crate::grid::{Board, Direction, Position, MAX_SIZE, MIN_SIZE};
use crate::puzzle::{Placement, Puzzle};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// How many words a puzzle asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Word count before the density cap is applied
    pub fn word_cap(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The next difficulty, wrapping around
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = WordSearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(WordSearchError::InvalidDifficulty {
                difficulty: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Random placements tried per word before it is dropped
    pub max_attempts: usize,
    /// Smallest accepted grid side
    pub min_size: usize,
    /// Largest accepted grid side
    pub max_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
        }
    }
}

/// Source of randomness for the generator
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform-ish value in `0..bound`; `bound` must be non-zero
    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

/// Simple PRNG usable on native and WASM targets
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleRng {
    /// Seed from the OS (or browser) entropy source
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }
}

impl RandomSource for SimpleRng {
    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }
}

/// Density cap: at most one word per eight cells, and never more than the list holds
pub fn max_words(theme: Theme, size: usize) -> usize {
    theme.words().len().min(size * size / 8)
}

/// The words a puzzle attempts to place: a prefix of the theme's list
pub fn select_words(theme: Theme, size: usize, difficulty: Difficulty) -> &'static [&'static str] {
    let count = difficulty.word_cap().min(max_words(theme, size));
    &theme.words()[..count]
}

/// Word-search puzzle generator
pub struct Generator<R: RandomSource = SimpleRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Default for Generator<SimpleRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<SimpleRng> {
    /// Create a new generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(SimpleRng::new())
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SimpleRng::with_seed(seed))
    }
}

impl<R: RandomSource> Generator<R> {
    /// Create a generator drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle. Words that cannot be placed are dropped.
    pub fn generate(&mut self, theme: Theme, size: usize, difficulty: Difficulty) -> Result<Puzzle> {
        if size < self.config.min_size || size > self.config.max_size {
            return Err(WordSearchError::InvalidSize {
                size: size as i64,
                min: self.config.min_size,
                max: self.config.max_size,
            });
        }

        let words = select_words(theme, size, difficulty);
        let mut board = Board::new(size);
        let mut placements = Vec::with_capacity(words.len());

        for word in words {
            match self.place_word(&mut board, word) {
                Some(placement) => placements.push(placement),
                None => log::debug!(
                    "dropping {} after {} attempts on a {}x{} grid",
                    word,
                    self.config.max_attempts,
                    size,
                    size
                ),
            }
        }

        let rng = &mut self.rng;
        let grid = board.fill(|| ALPHABET[rng.next_usize(ALPHABET.len())] as char);
        let puzzle = Puzzle::from_parts(grid, placements);

        puzzle.verify().map_err(|e| WordSearchError::Internal {
            reason: e.to_string(),
        })?;

        log::debug!(
            "generated {} {} puzzle {}x{} with {}/{} words",
            difficulty,
            theme,
            size,
            size,
            puzzle.words().len(),
            words.len()
        );
        Ok(puzzle)
    }

    /// Try random spots until one fits, then write the word in
    fn place_word(&mut self, board: &mut Board, word: &str) -> Option<Placement> {
        let size = board.size();
        for _ in 0..self.config.max_attempts {
            let direction = Direction::PLACEMENT[self.rng.next_usize(Direction::PLACEMENT.len())];
            let row = self.rng.next_usize(size);
            let col = self.rng.next_usize(size);
            let start = Position::new(row, col);

            if let Some(cells) = fit_word(board, word, start, direction) {
                for (pos, letter) in cells.into_iter().zip(word.chars()) {
                    board.set(pos, letter);
                }
                return Some(Placement {
                    word: word.to_string(),
                    row,
                    col,
                    direction,
                });
            }
        }
        None
    }
}

/// Cells for `word` if every letter lands on the board on an empty or matching cell
fn fit_word(board: &Board, word: &str, start: Position, direction: Direction) -> Option<Vec<Position>> {
    word.chars()
        .enumerate()
        .map(|(i, letter)| {
            let pos = start.step(direction, i, board.size())?;
            match board.get(pos) {
                None => Some(pos),
                Some(existing) if existing == letter => Some(pos),
                Some(_) => None,
            }
        })
        .collect()
}

/// Validate string inputs and generate with a freshly seeded generator
pub fn generate(theme: &str, size: usize, difficulty: &str) -> Result<Puzzle> {
    let theme: Theme = theme.parse()?;
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(WordSearchError::InvalidSize {
            size: size as i64,
            min: MIN_SIZE,
            max: MAX_SIZE,
        });
    }
    let difficulty: Difficulty = difficulty.parse()?;
    Generator::new().generate(theme, size, difficulty)
}
