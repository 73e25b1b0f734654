use proptest::prelude::*;
use wordsearch_core::{
    line_cells, max_words, select_words, Difficulty, Direction, GameSession, Generator, Position,
    Puzzle, SelectionEngine, Theme,
};

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop::sample::select(Theme::ALL.to_vec())
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn generate(seed: u64, theme: Theme, size: usize, difficulty: Difficulty) -> Puzzle {
    Generator::with_seed(seed)
        .generate(theme, size, difficulty)
        .expect("valid config")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn grid_is_square_and_uppercase(
        seed in any::<u64>(),
        theme in theme_strategy(),
        size in 8usize..=20,
        difficulty in difficulty_strategy(),
    ) {
        let puzzle = generate(seed, theme, size, difficulty);
        prop_assert_eq!(puzzle.size(), size);
        let rows: Vec<&[char]> = puzzle.grid().rows().collect();
        prop_assert_eq!(rows.len(), size);
        for row in rows {
            prop_assert_eq!(row.len(), size);
            prop_assert!(row.iter().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn placements_are_spelled_in_the_grid(
        seed in any::<u64>(),
        theme in theme_strategy(),
        size in 8usize..=20,
        difficulty in difficulty_strategy(),
    ) {
        let puzzle = generate(seed, theme, size, difficulty);
        for placement in puzzle.solutions() {
            prop_assert!(Direction::PLACEMENT.contains(&placement.direction));
            let (dr, dc) = placement.direction.delta();
            for (i, letter) in placement.word.chars().enumerate() {
                let row = placement.row as isize + dr * i as isize;
                let col = placement.col as isize + dc * i as isize;
                prop_assert!(row >= 0 && col >= 0 && row < size as isize && col < size as isize);
                let pos = Position::new(row as usize, col as usize);
                prop_assert_eq!(puzzle.grid().letter(pos), letter);
            }
        }
        let placed: Vec<&String> = puzzle.solutions().iter().map(|p| &p.word).collect();
        let listed: Vec<&String> = puzzle.words().iter().collect();
        prop_assert_eq!(placed, listed);
    }

    #[test]
    fn word_count_respects_caps(
        seed in any::<u64>(),
        theme in theme_strategy(),
        size in 8usize..=20,
        difficulty in difficulty_strategy(),
    ) {
        let puzzle = generate(seed, theme, size, difficulty);
        let count = puzzle.words().len();
        prop_assert!(count <= difficulty.word_cap());
        prop_assert!(count <= theme.words().len());
        prop_assert!(count <= size * size / 8);
        prop_assert!(count <= max_words(theme, size));

        // Placed words keep the order of the selected prefix
        let selected = select_words(theme, size, difficulty);
        let mut cursor = selected.iter();
        for word in puzzle.words() {
            prop_assert!(cursor.any(|w| w == word), "{} out of order", word);
        }
    }

    #[test]
    fn same_seed_same_puzzle(
        seed in any::<u64>(),
        theme in theme_strategy(),
        size in 8usize..=20,
        difficulty in difficulty_strategy(),
    ) {
        let a = generate(seed, theme, size, difficulty);
        let b = generate(seed, theme, size, difficulty);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn selecting_a_placement_finds_it_both_ways(
        seed in any::<u64>(),
        theme in theme_strategy(),
        size in 8usize..=20,
    ) {
        let puzzle = generate(seed, theme, size, Difficulty::Hard);
        for placement in puzzle.solutions() {
            let end = placement.end().unwrap();
            let mut session = GameSession::new(puzzle.clone());
            session.begin_selection(placement.start());
            session.extend_selection(end);
            prop_assert_eq!(session.end_selection(), Some(placement.word.clone()));

            let mut session = GameSession::new(puzzle.clone());
            session.begin_selection(end);
            session.extend_selection(placement.start());
            prop_assert_eq!(session.end_selection(), Some(placement.word.clone()));
        }
    }

    #[test]
    fn line_endpoints_and_length(
        r0 in 0usize..20, c0 in 0usize..20, r1 in 0usize..20, c1 in 0usize..20,
    ) {
        let start = Position::new(r0, c0);
        let end = Position::new(r1, c1);
        let cells = line_cells(start, end);
        let steps = (r0 as isize - r1 as isize).abs().max((c0 as isize - c1 as isize).abs());
        prop_assert_eq!(cells.len(), steps as usize + 1);
        prop_assert_eq!(cells[0], start);
        prop_assert_eq!(*cells.last().unwrap(), end);
        for pair in cells.windows(2) {
            let dr = (pair[1].row as isize - pair[0].row as isize).abs();
            let dc = (pair[1].col as isize - pair[0].col as isize).abs();
            prop_assert!(dr <= 1 && dc <= 1);
        }
    }
}

#[test]
fn space_easy_example() {
    let puzzle = Generator::with_seed(2024)
        .generate(Theme::Space, 10, Difficulty::Easy)
        .unwrap();
    assert_eq!(puzzle.size(), 10);
    assert!(puzzle.words().len() <= 5);
    let first_five = &Theme::Space.words()[..5];
    for word in puzzle.words() {
        assert!(first_five.contains(&word.as_str()));
    }
}

#[test]
fn end_without_begin_is_no_match() {
    let puzzle = Generator::with_seed(9)
        .generate(Theme::Sports, 15, Difficulty::Medium)
        .unwrap();
    let mut engine = SelectionEngine::new();
    assert!(engine
        .end(puzzle.grid(), puzzle.solutions(), &[])
        .is_none());
    assert!(engine
        .end(puzzle.grid(), puzzle.solutions(), &[])
        .is_none());
}
