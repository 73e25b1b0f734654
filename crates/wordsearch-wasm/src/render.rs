//! Canvas rendering for the word-search UI

use crate::game::{CanvasLayout, GameState};
use crate::palette::Palette;
use web_sys::CanvasRenderingContext2d;
use wordsearch_core::Position;

const FONT: &str = "'JetBrains Mono', 'Fira Code', 'Consolas', monospace";

const TIPS: [&str; 4] = [
    "Words can be found horizontally, vertically, and diagonally",
    "Words can be read forwards or backwards",
    "Drag across the letters to select",
    "Look for common letter patterns",
];

/// Render the complete game to canvas
pub fn render_game(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    palette: &Palette,
    width: u32,
    height: u32,
    layout: CanvasLayout,
) {
    ctx.set_fill_style_str(&palette.background.as_css());
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    render_grid(ctx, state, palette, layout);

    let size = state.settings().size as f64;
    let panel_x = layout.x + layout.cell_size * size + 30.0;
    let font_size = (layout.cell_size * 0.45).clamp(13.0, 18.0);
    let next_y = render_word_list(ctx, state, palette, panel_x, layout.y, font_size);
    render_progress(ctx, state, palette, panel_x, next_y + font_size, font_size);

    if state.is_complete() {
        render_win_banner(ctx, palette, width, height, font_size);
    } else if let Some(msg) = state.message() {
        render_message(ctx, palette, msg, width, height, font_size);
    }
}

fn render_grid(ctx: &CanvasRenderingContext2d, state: &GameState, palette: &Palette, layout: CanvasLayout) {
    let session = state.session();
    let size = state.settings().size;
    let cell = layout.cell_size;
    let extent = cell * size as f64;

    ctx.set_fill_style_str(&palette.grid_bg.as_css());
    ctx.fill_rect(layout.x - 4.0, layout.y - 4.0, extent + 8.0, extent + 8.0);

    ctx.set_font(&format!("bold {}px {}", cell * 0.55, FONT));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for row in 0..size {
        for col in 0..size {
            let pos = Position::new(row, col);
            let (x, y) = layout.cell_origin(pos);

            // Selected beats found
            let (bg, text) = if session.is_selected(pos) {
                (&palette.selected_bg, &palette.selected_text)
            } else if session.is_highlighted(pos) {
                (&palette.found_bg, &palette.selected_text)
            } else {
                (&palette.cell_bg, &palette.letter_text)
            };

            ctx.set_fill_style_str(&bg.as_css());
            ctx.fill_rect(x + 1.0, y + 1.0, cell - 2.0, cell - 2.0);

            ctx.set_fill_style_str(&text.as_css());
            let letter = session.puzzle().grid().letter(pos);
            let _ = ctx.fill_text(&letter.to_string(), x + cell / 2.0, y + cell / 2.0);
        }
    }

    // Keyboard cursor outline
    let (cx, cy) = layout.cell_origin(state.cursor());
    ctx.set_stroke_style_str(&palette.cursor.as_css_alpha(0.8));
    ctx.set_line_width(2.0);
    ctx.stroke_rect(cx + 1.0, cy + 1.0, cell - 2.0, cell - 2.0);
}

/// Draws the word list; returns the first free y below it
fn render_word_list(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    palette: &Palette,
    x: f64,
    y: f64,
    font_size: f64,
) -> f64 {
    let session = state.session();
    let settings = state.settings();
    let line = font_size * 1.5;

    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    ctx.set_font(&format!("bold {}px {}", font_size * 1.2, FONT));
    ctx.set_fill_style_str(&palette.accent.as_css());
    let _ = ctx.fill_text("WORD SEARCH", x, y);

    ctx.set_font(&format!("{}px {}", font_size, FONT));
    ctx.set_fill_style_str(&palette.info_text.as_css());
    let _ = ctx.fill_text(
        &format!(
            "{} · {} · {}x{}",
            settings.theme, settings.difficulty, settings.size, settings.size
        ),
        x,
        y + line,
    );

    let mut row_y = y + line * 2.5;
    for word in session.puzzle().words() {
        if session.is_found(word) {
            ctx.set_fill_style_str(&palette.found_text.as_css());
            let _ = ctx.fill_text(&format!("✓ {}", word), x, row_y);

            // Strike through
            let text_width = ctx
                .measure_text(word)
                .map(|m| m.width())
                .unwrap_or(font_size * word.len() as f64 * 0.6);
            let offset = ctx.measure_text("✓ ").map(|m| m.width()).unwrap_or(font_size);
            ctx.set_stroke_style_str(&palette.found_text.as_css());
            ctx.set_line_width(1.5);
            ctx.begin_path();
            ctx.move_to(x + offset, row_y + font_size / 2.0);
            ctx.line_to(x + offset + text_width, row_y + font_size / 2.0);
            ctx.stroke();
        } else {
            ctx.set_fill_style_str(&palette.letter_text.as_css());
            let _ = ctx.fill_text(&format!("  {}", word), x, row_y);
        }
        row_y += line;
    }
    row_y
}

fn render_progress(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    palette: &Palette,
    x: f64,
    y: f64,
    font_size: f64,
) {
    let stats = state.session().stats();
    let line = font_size * 1.5;

    ctx.set_font(&format!("{}px {}", font_size, FONT));
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.set_fill_style_str(&palette.info_text.as_css());
    let _ = ctx.fill_text(&format!("Found:     {:>3}", stats.found_words), x, y);
    let _ = ctx.fill_text(&format!("Remaining: {:>3}", stats.remaining_words), x, y + line);

    // Progress bar
    let bar_y = y + line * 2.2;
    let bar_width = 180.0;
    ctx.set_fill_style_str(&palette.grid_bg.as_css());
    ctx.fill_rect(x, bar_y, bar_width, font_size * 0.6);
    ctx.set_fill_style_str(&palette.selected_bg.as_css());
    ctx.fill_rect(
        x,
        bar_y,
        bar_width * stats.completion_percent as f64 / 100.0,
        font_size * 0.6,
    );

    let status_y = bar_y + line;
    if stats.is_complete {
        ctx.set_fill_style_str(&palette.win_color.as_css());
        let _ = ctx.fill_text("Puzzle Complete!", x, status_y);
        return;
    }

    ctx.set_fill_style_str(&palette.letter_text.as_css());
    let _ = ctx.fill_text(&format!("{}% Complete", stats.completion_percent), x, status_y);

    ctx.set_fill_style_str(&palette.accent.as_css());
    let _ = ctx.fill_text("Tips", x, status_y + line * 1.5);
    ctx.set_font(&format!("{}px {}", font_size * 0.85, FONT));
    ctx.set_fill_style_str(&palette.info_text.as_css());
    for (i, tip) in TIPS.iter().enumerate() {
        let _ = ctx.fill_text(&format!("- {}", tip), x, status_y + line * (2.5 + i as f64));
    }
}

fn render_win_banner(
    ctx: &CanvasRenderingContext2d,
    palette: &Palette,
    width: u32,
    height: u32,
    font_size: f64,
) {
    let banner_h = font_size * 3.0;
    let banner_y = height as f64 - banner_h - 10.0;
    ctx.set_fill_style_str(&palette.background.as_css_alpha(0.85));
    ctx.fill_rect(0.0, banner_y, width as f64, banner_h);

    ctx.set_font(&format!("bold {}px {}", font_size * 1.3, FONT));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(&palette.win_color.as_css());
    let _ = ctx.fill_text(
        "Congratulations! You found all the words!",
        width as f64 / 2.0,
        banner_y + banner_h / 2.0,
    );
}

fn render_message(
    ctx: &CanvasRenderingContext2d,
    palette: &Palette,
    msg: &str,
    width: u32,
    height: u32,
    font_size: f64,
) {
    ctx.set_font(&format!("{}px {}", font_size, FONT));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(&palette.accent.as_css());
    let _ = ctx.fill_text(msg, width as f64 / 2.0, height as f64 - font_size * 1.5);
}
