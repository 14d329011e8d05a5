//! Error types for the game.
//!
//! Every failure here is local: an invalid theme rejects one transition, an asset
//! fault only changes what gets drawn. Nothing halts the simulation.

use wasm_bindgen::JsValue;

use crate::theme::AssetRole;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Unknown theme: {0:?}")]
    InvalidTheme(String),

    #[error("Failed to load {role} image for theme {theme}: {url}")]
    AssetLoad {
        theme: &'static str,
        role: AssetRole,
        url: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    /// Wraps a JS exception thrown by a browser API.
    pub fn from_js(context: &str, value: JsValue) -> Self {
        match value.as_string() {
            Some(msg) => GameError::Dom(format!("{context}: {msg}")),
            None => GameError::Dom(format!("{context}: {value:?}")),
        }
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_theme_message_names_the_key() {
        let err = GameError::InvalidTheme("desert".into());
        assert_eq!(err.to_string(), "Unknown theme: \"desert\"");
    }

    #[test]
    fn asset_error_message_includes_role_and_url() {
        let err = GameError::AssetLoad {
            theme: "space",
            role: AssetRole::Obstacle,
            url: "images/meteor.png",
        };
        assert_eq!(
            err.to_string(),
            "Failed to load obstacle image for theme space: images/meteor.png"
        );
    }
}
