//! Basic example of using the word-search engine

use wordsearch_core::{respond, theme_keys, Difficulty, GameSession, Generator, PuzzleRequest, Theme};

fn main() {
    println!("Themes: {}\n", theme_keys().join(", "));

    // Generate a puzzle
    println!("Generating an Easy space puzzle...\n");
    let mut generator = Generator::with_seed(42);
    let puzzle = generator
        .generate(Theme::Space, 10, Difficulty::Easy)
        .expect("valid configuration");

    println!("{}", puzzle.grid());
    for placement in puzzle.solutions() {
        println!(
            "{:<10} at ({}, {}) going {}",
            placement.word, placement.row, placement.col, placement.direction
        );
    }

    // Play it: drag each word from its last letter back to its first
    let mut session = GameSession::new(puzzle.clone());
    for placement in puzzle.solutions() {
        let Some(end) = placement.end() else { continue };
        session.begin_selection(end);
        session.extend_selection(placement.start());
        if let Some(word) = session.end_selection() {
            let stats = session.stats();
            println!("Found {} ({}% complete)", word, stats.completion_percent);
        }
    }
    println!("Complete: {}\n", session.is_complete());

    // The request layer
    let (status, body) = respond(&PuzzleRequest::new("nonexistent", 10, "easy"));
    println!("{} {}", status, body);
}
