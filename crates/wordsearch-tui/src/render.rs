use crate::app::App;
use crate::layout::{grid_layout, GridLayout};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use wordsearch_core::Position;

/// Width reserved to the right of the grid for the word list and progress
const PANEL_WIDTH: u16 = 30;

const TIPS: [&str; 4] = [
    "Words can be found horizontally, vertically, and diagonally",
    "Words can be read forwards or backwards",
    "Drag with the mouse, or Space + arrows",
    "Look for common letter patterns",
];

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;
    let layout = grid_layout(app.settings.size, term_width, term_height, PANEL_WIDTH);
    app.layout = Some(layout);

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.palette.bg),
        Clear(ClearType::All)
    )?;

    render_grid(stdout, app, layout)?;

    let panel_x = layout.x + layout.width() + 3;
    let next_y = render_word_list(stdout, app, panel_x, layout.y)?;
    render_progress(stdout, app, panel_x, next_y + 1)?;

    render_controls(stdout, app, layout.x, layout.y + layout.height() + 1)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, layout: GridLayout) -> io::Result<()> {
    let palette = &app.palette;
    let inner = "─".repeat(layout.width() as usize - 2);

    execute!(
        stdout,
        SetBackgroundColor(palette.bg),
        SetForegroundColor(palette.border),
        MoveTo(layout.x, layout.y),
        Print(format!("┌{}┐", inner))
    )?;

    for row in 0..layout.size {
        let y = layout.y + 1 + row as u16;
        execute!(
            stdout,
            SetBackgroundColor(palette.bg),
            SetForegroundColor(palette.border),
            MoveTo(layout.x, y),
            Print("│")
        )?;
        for col in 0..layout.size {
            render_cell(stdout, app, layout, Position::new(row, col))?;
        }
        execute!(
            stdout,
            SetBackgroundColor(palette.bg),
            SetForegroundColor(palette.border),
            Print("│")
        )?;
    }

    execute!(
        stdout,
        MoveTo(layout.x, layout.y + layout.height() - 1),
        Print(format!("└{}┘", inner))
    )?;
    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, layout: GridLayout, pos: Position) -> io::Result<()> {
    let palette = &app.palette;
    let session = &app.session;
    let letter = session.puzzle().grid().letter(pos);

    // Selected beats found beats cursor
    let (bg, fg) = if session.is_selected(pos) {
        (palette.selected_bg, palette.selected_fg)
    } else if session.is_highlighted(pos) {
        (palette.found_bg, palette.fg)
    } else if pos == app.cursor {
        (palette.cursor_bg, palette.letter)
    } else {
        (palette.bg, palette.letter)
    };

    let (x, y) = layout.cell_origin(pos);
    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(format!(" {} ", letter))
    )
}

/// Draws the word list; returns the first free row below it
fn render_word_list(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<u16> {
    let palette = &app.palette;
    let session = &app.session;

    execute!(
        stdout,
        SetBackgroundColor(palette.bg),
        MoveTo(x, y),
        SetForegroundColor(palette.key),
        Print("═══ WORD SEARCH ═══"),
        MoveTo(x, y + 1),
        SetForegroundColor(palette.info),
        Print(format!(
            "{} · {} · {}x{}",
            app.settings.theme, app.settings.difficulty, app.settings.size, app.settings.size
        ))
    )?;

    let mut row = y + 3;
    for word in session.puzzle().words() {
        if session.is_found(word) {
            execute!(
                stdout,
                MoveTo(x, row),
                SetForegroundColor(palette.found_word),
                SetAttribute(Attribute::CrossedOut),
                Print(format!("✓ {}", word)),
                SetAttribute(Attribute::NotCrossedOut)
            )?;
        } else {
            execute!(
                stdout,
                MoveTo(x, row),
                SetForegroundColor(palette.fg),
                Print(format!("  {}", word))
            )?;
        }
        row += 1;
    }
    Ok(row)
}

fn render_progress(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let palette = &app.palette;
    let stats = app.session.stats();

    execute!(
        stdout,
        SetBackgroundColor(palette.bg),
        MoveTo(x, y),
        SetForegroundColor(palette.info),
        Print(format!("Found:     {:>3}", stats.found_words)),
        MoveTo(x, y + 1),
        Print(format!("Remaining: {:>3}", stats.remaining_words)),
        MoveTo(x, y + 2),
        Print(format!("Seed: {}", app.seed))
    )?;

    if stats.is_complete {
        execute!(
            stdout,
            MoveTo(x, y + 4),
            SetForegroundColor(palette.success),
            Print("Puzzle Complete!")
        )?;
        return Ok(());
    }

    execute!(
        stdout,
        MoveTo(x, y + 4),
        SetForegroundColor(palette.fg),
        Print(format!("{}% Complete", stats.completion_percent)),
        MoveTo(x, y + 6),
        SetForegroundColor(palette.key),
        Print("Tips")
    )?;
    let mut row = y + 7;
    for tip in TIPS {
        for (i, line) in wrap(tip, PANEL_WIDTH as usize - 2).into_iter().enumerate() {
            let bullet = if i == 0 { "- " } else { "  " };
            execute!(
                stdout,
                MoveTo(x, row),
                SetForegroundColor(palette.info),
                Print(format!("{}{}", bullet, line))
            )?;
            row += 1;
        }
    }
    Ok(())
}

/// Greedy word wrap; words longer than `width` get a line of their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let palette = &app.palette;
    let controls = [
        ("Space", "select"),
        ("Esc", "cancel"),
        ("n", "new"),
        ("t", "theme"),
        ("d", "level"),
        ("+/-", "size"),
        ("p", "colors"),
        ("q", "quit"),
    ];

    execute!(stdout, SetBackgroundColor(palette.bg), MoveTo(x, y))?;
    for (key, label) in controls {
        execute!(
            stdout,
            SetForegroundColor(palette.key),
            Print(key),
            SetForegroundColor(palette.info),
            Print(format!(" {}  ", label))
        )?;
    }
    Ok(())
}

fn render_message(stdout: &mut io::Stdout, app: &App, msg: &str, term_width: u16) -> io::Result<()> {
    let palette = &app.palette;
    let width = msg.chars().count() as u16;
    let x = term_width.saturating_sub(width) / 2;
    let color = if app.message_is_error {
        palette.error
    } else if app.session.is_complete() {
        palette.success
    } else {
        palette.fg
    };
    execute!(
        stdout,
        SetBackgroundColor(palette.bg),
        MoveTo(x, 0),
        SetForegroundColor(color),
        Print(msg)
    )
}
