use crossterm::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Palette {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid frame color
    pub border: Color,
    /// Letter color on plain cells
    pub letter: Color,
    /// Background of cells in the current drag
    pub selected_bg: Color,
    /// Letter color on selected cells
    pub selected_fg: Color,
    /// Background of cells belonging to found words
    pub found_bg: Color,
    /// Keyboard cursor background
    pub cursor_bg: Color,
    /// Found words in the word list
    pub found_word: Color,
    /// Error color
    pub error: Color,
    /// Success/complete color
    pub success: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 130, g: 140, b: 170 },
            letter: Color::Rgb { r: 235, g: 235, b: 245 },
            selected_bg: Color::Rgb { r: 102, g: 126, b: 234 },
            selected_fg: Color::Rgb { r: 255, g: 255, b: 255 },
            found_bg: Color::Rgb { r: 60, g: 72, b: 130 },
            cursor_bg: Color::Rgb { r: 70, g: 75, b: 90 },
            found_word: Color::Rgb { r: 110, g: 115, b: 135 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 60, g: 60, b: 80 },
            letter: Color::Rgb { r: 51, g: 51, b: 51 },
            selected_bg: Color::Rgb { r: 102, g: 126, b: 234 },
            selected_fg: Color::Rgb { r: 255, g: 255, b: 255 },
            found_bg: Color::Rgb { r: 168, g: 180, b: 245 },
            cursor_bg: Color::Rgb { r: 220, g: 222, b: 232 },
            found_word: Color::Rgb { r: 150, g: 150, b: 165 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::White,
            letter: Color::White,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            found_bg: Color::DarkGreen,
            cursor_bg: Color::DarkGrey,
            found_word: Color::Grey,
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}

/// Palette names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaletteName {
    Dark,
    Light,
    HighContrast,
}

impl PaletteName {
    pub fn palette(&self) -> Palette {
        match self {
            PaletteName::Dark => Palette::dark(),
            PaletteName::Light => Palette::light(),
            PaletteName::HighContrast => Palette::high_contrast(),
        }
    }

    pub fn next(&self) -> PaletteName {
        match self {
            PaletteName::Dark => PaletteName::Light,
            PaletteName::Light => PaletteName::HighContrast,
            PaletteName::HighContrast => PaletteName::Dark,
        }
    }
}
