mod app;
mod layout;
mod logging;
mod palette;
mod render;

use app::{App, Settings};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use palette::PaletteName;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use wordsearch_core::{Difficulty, Theme, WordSearchError, MAX_SIZE, MIN_SIZE};

/// Themed word-search puzzles in the terminal
#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about)]
struct Cli {
    /// Word theme (nature, animals, space, food, sports, deer)
    #[arg(short, long, default_value = "nature")]
    theme: String,

    /// Grid side length
    #[arg(short, long, default_value_t = 15)]
    size: i64,

    /// easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: String,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Color palette
    #[arg(long, value_enum, default_value_t = PaletteName::Dark)]
    palette: PaletteName,

    /// Print the puzzle as JSON and exit
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<Settings, WordSearchError> {
        let theme: Theme = self.theme.parse()?;
        if self.size < MIN_SIZE as i64 || self.size > MAX_SIZE as i64 {
            return Err(WordSearchError::InvalidSize {
                size: self.size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        let difficulty: Difficulty = self.difficulty.parse()?;
        Ok(Settings {
            theme,
            size: self.size as usize,
            difficulty,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.debug, cli.log_file.as_deref()) {
        eprintln!("Error: cannot open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", error_report(&e));
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        return match app::generate_puzzle(settings, cli.seed) {
            Ok((puzzle, _)) => match serde_json::to_string_pretty(&puzzle) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            },
            Err(e) => {
                eprintln!("{}", error_report(&e));
                ExitCode::FAILURE
            }
        };
    }

    let app = match App::new(settings, cli.seed, cli.palette) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}", error_report(&e));
            return ExitCode::FAILURE;
        }
    };

    match run_terminal(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `Error [W002]: message`, followed by the hint when there is one
fn error_report(err: &WordSearchError) -> String {
    let mut report = format!("Error [{}]: {}", err.code(), err);
    if let Some(help) = err.help() {
        report.push_str("\n  ");
        report.push_str(&help);
    }
    report
}

fn run_terminal(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, app)?;
        stdout.flush()?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Handle Ctrl+C
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        break;
                    }

                    match app.handle_key(key) {
                        app::AppAction::Continue => {}
                        app::AppAction::Quit => break,
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_settings() {
        let cli = Cli::parse_from(["wordsearch", "--theme", "space", "--size", "10", "-d", "easy"]);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.theme, Theme::Space);
        assert_eq!(settings.size, 10);
        assert_eq!(settings.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        let cli = Cli::parse_from(["wordsearch", "--size", "25"]);
        assert_eq!(
            cli.settings().unwrap_err().to_string(),
            "Size must be between 8 and 20"
        );
        let cli = Cli::parse_from(["wordsearch", "--theme", "nonexistent"]);
        assert_eq!(cli.settings().unwrap_err().to_string(), "Invalid theme");
    }

    #[test]
    fn test_error_report_carries_code() {
        let cli = Cli::parse_from(["wordsearch", "--size", "7"]);
        let err = cli.settings().unwrap_err();
        let report = error_report(&err);
        assert!(report.starts_with("Error [W002]: Size must be between 8 and 20"));
        assert!(report.ends_with("requested size was 7"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wordsearch"]);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.theme, Theme::Nature);
        assert_eq!(settings.size, 15);
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(cli.palette, PaletteName::Dark);
    }
}
