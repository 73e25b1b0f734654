use crate::error::{Result, WordSearchError};
use serde::{Deserialize, Serialize};

const NATURE: &[&str] = &[
    "FOREST", "RIVER", "MOUNTAIN", "OCEAN", "SUNSET", "WILDFLOWER", "BUTTERFLY", "EAGLE",
    "WATERFALL", "MEADOW", "CANYON", "GLACIER", "VOLCANO", "DESERT", "RAINFOREST", "TUNDRA",
];

const ANIMALS: &[&str] = &[
    "ELEPHANT", "GIRAFFE", "LION", "TIGER", "PANDA", "DOLPHIN", "EAGLE", "PENGUIN",
    "KANGAROO", "KOALA", "ZEBRA", "RHINO", "GORILLA", "CHEETAH", "POLARBEAR", "WOLF",
];

const SPACE: &[&str] = &[
    "PLANET", "STAR", "GALAXY", "NEBULA", "ASTEROID", "COMET", "ORBIT", "TELESCOPE",
    "SPACESHIP", "ASTRONAUT", "METEOR", "CONSTELLATION", "BLACKHOLE", "SUPERNOVA", "SATELLITE",
    "ROCKET",
];

const FOOD: &[&str] = &[
    "PIZZA", "BURGER", "SUSHI", "PASTA", "SALAD", "SANDWICH", "TACO", "STEAK",
    "CHICKEN", "FISH", "RICE", "BREAD", "CHEESE", "FRUIT", "VEGETABLE", "DESSERT",
];

const SPORTS: &[&str] = &[
    "FOOTBALL", "BASKETBALL", "BASEBALL", "SOCCER", "TENNIS", "GOLF", "SWIMMING", "RUNNING",
    "VOLLEYBALL", "HOCKEY", "BOXING", "WRESTLING", "GYMNASTICS", "SKIING", "SURFING", "CYCLING",
];

const DEER: &[&str] = &[
    "WHITETAIL", "MULEDEER", "ELK", "MOOSE", "CARIBOU", "REINDEER", "FALLOW", "ROEDEER",
    "SAMBAR", "AXIS", "CHITAL", "BARASINGHA", "HOGDEER", "MUSKDEER", "WATERDEER", "MUNTJAC",
];

/// Word category a puzzle draws its words from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Nature,
    Animals,
    Space,
    Food,
    Sports,
    Deer,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Nature
    }
}

impl Theme {
    /// Every theme, in listing order
    pub const ALL: [Theme; 6] = [
        Theme::Nature,
        Theme::Animals,
        Theme::Space,
        Theme::Food,
        Theme::Sports,
        Theme::Deer,
    ];

    /// The lowercase key used on the wire
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Nature => "nature",
            Theme::Animals => "animals",
            Theme::Space => "space",
            Theme::Food => "food",
            Theme::Sports => "sports",
            Theme::Deer => "deer",
        }
    }

    /// The theme's fixed, ordered word list
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Theme::Nature => NATURE,
            Theme::Animals => ANIMALS,
            Theme::Space => SPACE,
            Theme::Food => FOOD,
            Theme::Sports => SPORTS,
            Theme::Deer => DEER,
        }
    }

    /// The theme after this one, wrapping around
    pub fn next(&self) -> Theme {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::str::FromStr for Theme {
    type Err = WordSearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.key() == s)
            .ok_or_else(|| WordSearchError::InvalidTheme {
                theme: s.to_string(),
            })
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// All recognized theme keys
pub fn theme_keys() -> Vec<&'static str> {
    Theme::ALL.iter().map(|t| t.key()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        for theme in Theme::ALL {
            assert_eq!(theme.key().parse::<Theme>().unwrap(), theme);
        }
        assert!("Nature".parse::<Theme>().is_err());
        assert!("nonexistent".parse::<Theme>().is_err());
    }

    #[test]
    fn test_word_lists_are_uppercase_and_unique() {
        for theme in Theme::ALL {
            let words = theme.words();
            assert_eq!(words.len(), 16, "{} list size", theme);
            for (i, word) in words.iter().enumerate() {
                assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{}", word);
                assert!(!words[..i].contains(word), "duplicate {} in {}", word, theme);
            }
        }
    }

    #[test]
    fn test_listing_order() {
        assert_eq!(
            theme_keys(),
            vec!["nature", "animals", "space", "food", "sports", "deer"]
        );
        assert_eq!(Theme::Deer.next(), Theme::Nature);
    }
}
