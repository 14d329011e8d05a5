//! Theme Runner core crate.
//!
//! A side-scrolling obstacle dodger for the browser canvas. The simulation
//! (`state`, `entities`, `input`) is plain Rust and runs natively under
//! `cargo test`; `app`, `render`, `assets` and `overlay` are the thin web-sys
//! layer that drives it once per animation frame.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod assets;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod render;
pub mod state;
pub mod theme;

pub use config::GameConfig;
pub use entities::{Obstacle, Player, Rect};
pub use error::{GameError, GameResult};
pub use input::{Command, InputEffect};
pub use state::{GameState, RunMode, TickOutcome};
pub use theme::{AssetRole, Theme, ThemeAssets};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Shows the theme menu; picking a theme starts the game.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    app::launch(GameConfig::default())?;
    Ok(())
}

/// Like `start_game`, with a JSON override of the default `GameConfig`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    app::launch(GameConfig::from_json(json)?)?;
    Ok(())
}

/// Starts a run directly, bypassing the menu. Unknown keys are rejected and
/// leave the current run untouched.
#[wasm_bindgen]
pub fn select_theme(key: &str) -> Result<(), JsValue> {
    app::select_theme_key(key)?;
    Ok(())
}

/// Registry keys in menu order.
#[wasm_bindgen]
pub fn theme_keys() -> Vec<String> {
    Theme::ALL.iter().map(|t| t.key().to_string()).collect()
}
