//! Color palettes for the WASM word-search UI

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Color palette for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Area behind the cells
    pub grid_bg: Color,
    /// Plain cell background
    pub cell_bg: Color,
    /// Cells in the current drag
    pub selected_bg: Color,
    /// Cells of found words
    pub found_bg: Color,
    /// Keyboard cursor outline
    pub cursor: Color,
    /// Letters on plain cells
    pub letter_text: Color,
    /// Letters on selected cells
    pub selected_text: Color,
    /// Info panel text
    pub info_text: Color,
    /// Struck-through found words
    pub found_text: Color,
    /// Headings and key hints
    pub accent: Color,
    /// Completion banner
    pub win_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::new(20, 22, 30),
            grid_bg: Color::new(45, 48, 62),
            cell_bg: Color::new(28, 30, 40),
            selected_bg: Color::new(102, 126, 234),
            found_bg: Color::new(60, 72, 130),
            cursor: Color::new(255, 210, 100),
            letter_text: Color::new(230, 230, 240),
            selected_text: Color::new(255, 255, 255),
            info_text: Color::new(160, 165, 185),
            found_text: Color::new(100, 105, 125),
            accent: Color::new(255, 210, 100),
            win_color: Color::new(76, 175, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::new(248, 248, 252),
            grid_bg: Color::new(233, 236, 239),
            cell_bg: Color::new(255, 255, 255),
            selected_bg: Color::new(102, 126, 234),
            found_bg: Color::new(168, 180, 245),
            cursor: Color::new(200, 120, 20),
            letter_text: Color::new(51, 51, 51),
            selected_text: Color::new(255, 255, 255),
            info_text: Color::new(90, 90, 110),
            found_text: Color::new(160, 160, 170),
            accent: Color::new(102, 126, 234),
            win_color: Color::new(76, 175, 80),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            background: Color::new(0, 0, 0),
            grid_bg: Color::new(255, 255, 255),
            cell_bg: Color::new(0, 0, 0),
            selected_bg: Color::new(0, 0, 255),
            found_bg: Color::new(0, 120, 0),
            cursor: Color::new(255, 255, 0),
            letter_text: Color::new(255, 255, 255),
            selected_text: Color::new(255, 255, 255),
            info_text: Color::new(200, 200, 200),
            found_text: Color::new(128, 128, 128),
            accent: Color::new(255, 255, 0),
            win_color: Color::new(0, 255, 0),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "high_contrast" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}
