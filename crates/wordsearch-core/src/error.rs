//! Error types for puzzle generation and the request layer.
//!
//! # Error Codes
//!
//! - W001: `InvalidTheme` (theme key not in the theme table)
//! - W002: `InvalidSize` (grid size outside the allowed range)
//! - W003: `InvalidDifficulty` (difficulty not easy, medium or hard)
//! - W004: `InvalidPuzzle` (a puzzle failed validation when loaded)
//! - W005: `Internal` (unexpected failure during generation)
//!
//! Placing fewer words than requested is not an error: the generator drops
//! words it cannot fit and the puzzle simply has a shorter word list.

/// Errors produced by the word-search engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordSearchError {
    #[error("Invalid theme")]
    InvalidTheme { theme: String },

    #[error("Size must be between {min} and {max}")]
    InvalidSize { size: i64, min: usize, max: usize },

    #[error("Invalid difficulty")]
    InvalidDifficulty { difficulty: String },

    #[error("Invalid puzzle: {reason}")]
    InvalidPuzzle { reason: String },

    #[error("Failed to generate puzzle: {reason}")]
    Internal { reason: String },
}

impl WordSearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordSearchError::InvalidTheme { .. } => "W001",
            WordSearchError::InvalidSize { .. } => "W002",
            WordSearchError::InvalidDifficulty { .. } => "W003",
            WordSearchError::InvalidPuzzle { .. } => "W004",
            WordSearchError::Internal { .. } => "W005",
        }
    }

    /// True for the rejected-input errors a caller fixes by resubmitting
    #[must_use]
    pub fn is_invalid_config(&self) -> bool {
        matches!(
            self,
            WordSearchError::InvalidTheme { .. }
                | WordSearchError::InvalidSize { .. }
                | WordSearchError::InvalidDifficulty { .. }
        )
    }

    /// Optional help text for the user
    #[must_use]
    pub fn help(&self) -> Option<String> {
        match self {
            WordSearchError::InvalidTheme { theme } => Some(format!(
                "'{}' is not a theme; choose one of: {}",
                theme,
                crate::theme::theme_keys().join(", ")
            )),
            WordSearchError::InvalidDifficulty { difficulty } => Some(format!(
                "'{}' is not a difficulty; choose easy, medium or hard",
                difficulty
            )),
            WordSearchError::InvalidSize { size, .. } => {
                Some(format!("requested size was {}", size))
            }
            WordSearchError::InvalidPuzzle { .. } | WordSearchError::Internal { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordSearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = WordSearchError::InvalidTheme {
            theme: "nonexistent".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid theme");
        assert!(err.is_invalid_config());

        let err = WordSearchError::InvalidSize {
            size: 25,
            min: 8,
            max: 20,
        };
        assert_eq!(err.to_string(), "Size must be between 8 and 20");
        assert_eq!(err.code(), "W002");

        let err = WordSearchError::Internal {
            reason: "boom".to_string(),
        };
        assert!(!err.is_invalid_config());
        assert!(err.help().is_none());
    }

    #[test]
    fn test_theme_help_lists_keys() {
        let err = WordSearchError::InvalidTheme {
            theme: "cars".to_string(),
        };
        let help = err.help().unwrap();
        assert!(help.contains("nature"));
        assert!(help.contains("deer"));
    }
}
