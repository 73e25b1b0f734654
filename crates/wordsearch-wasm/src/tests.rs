//! Tests for WASM word-search functions

#[cfg(test)]
mod tests {
    use crate::game::{GameState, Settings};
    use crate::palette::Palette;
    use crate::{generate_puzzle, health, list_themes};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use wordsearch_core::{Difficulty, Position, Puzzle, Theme};

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(Settings::default()).unwrap();
        assert_eq!(state.settings().theme, Theme::Nature);
        assert_eq!(state.puzzle().size(), 15);
        assert_eq!(state.cursor(), Position::new(7, 7));
        assert!(!state.is_complete());
        assert!(state.message().is_none());
    }

    #[test]
    fn test_every_difficulty_generates() {
        for difficulty in Difficulty::ALL {
            let settings = Settings {
                theme: Theme::Space,
                size: 10,
                difficulty,
            };
            let state = GameState::new(settings).unwrap();
            assert!(state.puzzle().words().len() <= difficulty.word_cap());
        }
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = GameState::new(Settings::default()).unwrap();

        state.handle_key("ArrowUp");
        assert_eq!(state.cursor(), Position::new(6, 7));
        state.handle_key("ArrowDown");
        assert_eq!(state.cursor(), Position::new(7, 7));
        state.handle_key("ArrowLeft");
        assert_eq!(state.cursor(), Position::new(7, 6));
        state.handle_key("ArrowRight");
        assert_eq!(state.cursor(), Position::new(7, 7));
    }

    #[test]
    fn test_find_every_word_completes() {
        let mut state = GameState::new(Settings::default()).unwrap();
        let solutions = state.puzzle().solutions().to_vec();
        for placement in &solutions {
            state.pointer_down(Some(placement.start()));
            state.pointer_move(placement.end());
            assert_eq!(state.pointer_up().as_deref(), Some(placement.word.as_str()));
        }
        assert!(state.is_complete());
        assert_eq!(
            state.message(),
            Some("Congratulations! You found all the words!")
        );
    }

    #[test]
    fn test_palette_by_name() {
        assert_eq!(Palette::by_name("light").cell_bg.r, 255);
        assert_eq!(Palette::by_name("unknown").background.r, Palette::dark().background.r);
    }

    #[wasm_bindgen_test]
    fn test_generate_puzzle_defaults() {
        let value = generate_puzzle(JsValue::UNDEFINED).unwrap();
        let puzzle: Puzzle = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(puzzle.size(), 15);
    }

    #[wasm_bindgen_test]
    fn test_generate_puzzle_rejects_size() {
        let request = serde_wasm_bindgen::to_value(&wordsearch_core::PuzzleRequest::new(
            "nature", 25, "medium",
        ))
        .unwrap();
        let err = generate_puzzle(request).unwrap_err();
        assert_eq!(err.as_string().as_deref(), Some("Size must be between 8 and 20"));
    }

    #[wasm_bindgen_test]
    fn test_list_themes_and_health() {
        assert_eq!(list_themes().length(), 6);
        assert!(health().is_ok());
    }
}
