//! WebAssembly word search with a canvas UI
//!
//! The [`WordSearchGame`] controller owns a canvas and a [`GameState`];
//! the page forwards pointer and keyboard events to it. The free functions
//! expose the request layer of `wordsearch-core` to JavaScript.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};
use wordsearch_core::{api, PuzzleRequest};

mod game;
mod palette;
mod render;

// WASM tests require wasm-pack test to run
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use game::{CanvasLayout, GameState, Settings};
pub use palette::Palette;

// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    match console_log::init_with_level(log::Level::Debug) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(e) => {
            let msg = format!("console logging unavailable: {}", e);
            web_sys::console::warn_1(&msg.into());
        }
    }
}

/// Switch console logging between Info and Debug
#[wasm_bindgen]
pub fn set_debug_logging(enabled: bool) {
    let level = if enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    log::set_max_level(level);
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct WordSearchGame {
    state: GameState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    palette: Palette,
    layout: CanvasLayout,
    width: u32,
    height: u32,
    dpr: f64, // Device pixel ratio for crisp rendering
}

#[wasm_bindgen]
impl WordSearchGame {
    /// Create a new game attached to a canvas element
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WordSearchGame, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let settings = Settings::default();
        let state = GameState::new(settings).map_err(to_js_error)?;

        let mut game = WordSearchGame {
            state,
            canvas,
            ctx,
            palette: Palette::dark(),
            layout: CanvasLayout::fit(1000, 700, settings.size),
            width: 1000,
            height: 700,
            dpr: 1.0,
        };

        game.resize(1000, 700);
        log::info!("word search ready on #{}", canvas_id);
        Ok(game)
    }

    /// Pointer pressed; starts a selection when over the grid
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, event: &MouseEvent) {
        let cell = self.cell_for(event);
        self.state.pointer_down(cell);
        self.render();
    }

    /// Pointer moved; extends the selection while pressed. Leaving the grid
    /// ends the gesture and returns the newly found word, if any.
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, event: &MouseEvent) -> Option<String> {
        let cell = self.cell_for(event);
        let found = self.state.pointer_move(cell);
        self.render();
        found
    }

    /// Pointer released; returns the newly found word, if any
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> Option<String> {
        let found = self.state.pointer_up();
        self.render();
        found
    }

    /// Pointer left the canvas; ends the gesture like a release
    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) -> Option<String> {
        self.pointer_up()
    }

    /// Handle keyboard input
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        let handled = self.state.handle_key(&event.key());
        self.render();
        handled
    }

    /// Update game state (call from requestAnimationFrame)
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.state.tick();
        self.render();
    }

    /// Start a new game with the given settings
    #[wasm_bindgen]
    pub fn new_game(&mut self, theme: &str, size: i32, difficulty: &str) -> Result<(), JsValue> {
        let settings = Settings::parse(theme, size, difficulty).map_err(to_js_error)?;
        self.state = GameState::new(settings).map_err(to_js_error)?;
        self.layout = CanvasLayout::fit(self.width, self.height, settings.size);
        log::info!(
            "new {} {} puzzle, {} words",
            settings.difficulty,
            settings.theme,
            self.state.puzzle().words().len()
        );
        self.render();
        Ok(())
    }

    /// Set the color palette (dark, light, high_contrast)
    #[wasm_bindgen]
    pub fn set_palette(&mut self, name: &str) {
        self.palette = Palette::by_name(name);
        self.render();
    }

    /// Current puzzle as JSON
    #[wasm_bindgen]
    pub fn puzzle_json(&self) -> String {
        serde_json::to_string(self.state.puzzle()).unwrap_or_default()
    }

    /// Settings, words, found words and progress as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }

    /// Progress counters as JSON
    #[wasm_bindgen]
    pub fn stats_json(&self) -> String {
        serde_json::to_string(&self.state.session().stats()).unwrap_or_default()
    }

    /// Words found so far
    #[wasm_bindgen]
    pub fn found_words(&self) -> js_sys::Array {
        self.state
            .session()
            .found_words()
            .as_slice()
            .iter()
            .map(|w| JsValue::from_str(w))
            .collect()
    }

    /// Check if game is complete
    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Resize the game canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        // Minimum sizes
        let width = width.max(600);
        let height = height.max(500);

        self.width = width;
        self.height = height;

        // Update dpr in case it changed (e.g., moving to different monitor)
        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        // Set actual canvas resolution (scaled by dpr for crisp rendering)
        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        // Reset and scale context to account for dpr
        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(self.dpr, self.dpr);

        self.layout = CanvasLayout::fit(width, height, self.state.settings().size);
        self.render();
    }

    /// Get current width
    #[wasm_bindgen]
    pub fn get_width(&self) -> u32 {
        self.width
    }

    /// Get current height
    #[wasm_bindgen]
    pub fn get_height(&self) -> u32 {
        self.height
    }

    fn cell_for(&self, event: &MouseEvent) -> Option<wordsearch_core::Position> {
        self.layout.cell_at(
            event.offset_x() as f64,
            event.offset_y() as f64,
            self.state.settings().size,
        )
    }

    /// Render the game to canvas
    fn render(&self) {
        render::render_game(&self.ctx, &self.state, &self.palette, self.width, self.height, self.layout);
    }
}

/// Generate a puzzle from a `{ theme, size, difficulty }` object.
///
/// Missing fields take their defaults. Rejects with the same messages the
/// request layer produces, e.g. `"Size must be between 8 and 20"`.
#[wasm_bindgen]
pub fn generate_puzzle(request: JsValue) -> Result<JsValue, JsValue> {
    let request: PuzzleRequest = if request.is_undefined() || request.is_null() {
        PuzzleRequest::default()
    } else {
        serde_wasm_bindgen::from_value(request)?
    };
    let puzzle = api::handle_puzzle_request(&request).map_err(|e| {
        log::warn!("puzzle request rejected: {}", e);
        to_js_error(e)
    })?;
    Ok(serde_wasm_bindgen::to_value(&puzzle)?)
}

/// Available theme keys
#[wasm_bindgen]
pub fn list_themes() -> js_sys::Array {
    api::themes_response()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Liveness check, `{ status: "OK", message: ... }`
#[wasm_bindgen]
pub fn health() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&api::health())?)
}
