//! Request/response layer between a transport (HTTP, FFI, WASM) and the generator.
//!
//! Requests carry raw strings and numbers as a client sent them. Missing
//! fields fall back to `nature`, `15` and `medium`.

use crate::error::WordSearchError;
use crate::generator::{Difficulty, Generator};
use crate::grid::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::puzzle::Puzzle;
use crate::theme::{theme_keys, Theme};
use serde::{Deserialize, Serialize};

/// A puzzle request as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRequest {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl PuzzleRequest {
    pub fn new(theme: &str, size: i64, difficulty: &str) -> Self {
        Self {
            theme: Some(theme.to_string()),
            size: Some(size),
            difficulty: Some(difficulty.to_string()),
        }
    }

    /// Check the request, filling in defaults, in the order theme, size, difficulty
    pub fn validate(&self) -> Result<(Theme, usize, Difficulty), ApiError> {
        let theme: Theme = match &self.theme {
            Some(key) => key.parse()?,
            None => Theme::default(),
        };

        let size = self.size.unwrap_or(DEFAULT_SIZE as i64);
        if size < MIN_SIZE as i64 || size > MAX_SIZE as i64 {
            return Err(WordSearchError::InvalidSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            }
            .into());
        }

        let difficulty: Difficulty = match &self.difficulty {
            Some(key) => key.parse()?,
            None => Difficulty::default(),
        };

        Ok((theme, size as usize, difficulty))
    }
}

/// A rejected request or a failed generation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(WordSearchError),

    #[error("Failed to generate puzzle")]
    Internal(WordSearchError),
}

impl From<WordSearchError> for ApiError {
    fn from(err: WordSearchError) -> Self {
        if err.is_invalid_config() {
            ApiError::BadRequest(err)
        } else {
            ApiError::Internal(err)
        }
    }
}

impl ApiError {
    /// HTTP-style status code
    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

/// JSON body for an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON body for the liveness check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Validate a request and generate its puzzle
pub fn handle_puzzle_request(request: &PuzzleRequest) -> Result<Puzzle, ApiError> {
    let (theme, size, difficulty) = request.validate()?;
    let puzzle = Generator::new().generate(theme, size, difficulty)?;
    Ok(puzzle)
}

/// Theme keys, in listing order
pub fn themes_response() -> Vec<&'static str> {
    theme_keys()
}

pub fn health() -> HealthStatus {
    HealthStatus {
        status: "OK".to_string(),
        message: "Word Search API is running".to_string(),
    }
}

/// Status code and JSON body for a puzzle request
pub fn respond(request: &PuzzleRequest) -> (u16, String) {
    let result = handle_puzzle_request(request).and_then(|puzzle| {
        serde_json::to_string(&puzzle).map_err(|e| {
            ApiError::Internal(WordSearchError::Internal {
                reason: e.to_string(),
            })
        })
    });

    match result {
        Ok(body) => (200, body),
        Err(err) => {
            log::warn!("puzzle request rejected: {:?}", err);
            let body = serde_json::to_string(&err.to_response())
                .unwrap_or_else(|_| r#"{"error":"Failed to generate puzzle"}"#.to_string());
            (err.status(), body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = PuzzleRequest::default();
        let (theme, size, difficulty) = request.validate().unwrap();
        assert_eq!(theme, Theme::Nature);
        assert_eq!(size, 15);
        assert_eq!(difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_rejections() {
        let err = handle_puzzle_request(&PuzzleRequest::new("nonexistent", 10, "easy")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid theme");
        assert_eq!(err.status(), 400);

        let err = handle_puzzle_request(&PuzzleRequest::new("space", 25, "easy")).unwrap_err();
        assert_eq!(err.to_string(), "Size must be between 8 and 20");

        let err = handle_puzzle_request(&PuzzleRequest::new("space", -3, "easy")).unwrap_err();
        assert_eq!(err.status(), 400);

        let err = handle_puzzle_request(&PuzzleRequest::new("space", 10, "insane")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid difficulty");
    }

    #[test]
    fn test_theme_checked_before_size() {
        let err = PuzzleRequest::new("nope", 99, "nope").validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid theme");
    }

    #[test]
    fn test_internal_error_is_opaque() {
        let err: ApiError = WordSearchError::Internal {
            reason: "grid mismatch".to_string(),
        }
        .into();
        assert_eq!(err.status(), 500);
        assert_eq!(err.to_response().error, "Failed to generate puzzle");
    }

    #[test]
    fn test_respond_bodies() {
        let (status, body) = respond(&PuzzleRequest::new("space", 10, "easy"));
        assert_eq!(status, 200);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["grid"].as_array().unwrap().len(), 10);
        assert!(json["words"].as_array().unwrap().len() <= 5);

        let (status, body) = respond(&PuzzleRequest::new("space", 25, "easy"));
        assert_eq!(status, 400);
        assert_eq!(body, r#"{"error":"Size must be between 8 and 20"}"#);
    }

    #[test]
    fn test_request_from_json() {
        let request: PuzzleRequest = serde_json::from_str(r#"{"theme":"deer"}"#).unwrap();
        assert_eq!(request.theme.as_deref(), Some("deer"));
        assert_eq!(request.size, None);
    }

    #[test]
    fn test_listing_and_health() {
        assert_eq!(themes_response().len(), 6);
        assert_eq!(health().status, "OK");
    }
}
