//! Tunable simulation parameters.
//!
//! `GameConfig::default()` reproduces the stock game. Hosts may override values
//! through JSON when the `serde_json` feature is enabled.

use crate::constants::*;
use crate::error::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub player_start_x: f64,
    pub player_start_y: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub gravity: f64,
    pub jump_power: f64,
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    pub obstacle_y: f64,
    pub spawn_chance: f64,
    pub scroll_speed: f64,
    pub parallax_factor: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_y: OBSTACLE_Y,
            spawn_chance: SPAWN_CHANCE,
            scroll_speed: SCROLL_SPEED,
            parallax_factor: PARALLAX_FACTOR,
        }
    }
}

impl GameConfig {
    /// The ground line is the bottom edge of the canvas.
    pub fn ground_y(&self) -> f64 {
        self.canvas_height
    }

    pub fn validate(&self) -> GameResult<()> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(GameError::Config(format!(
                "canvas must have positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.scroll_speed > 0.0) {
            return Err(GameError::Config(format!(
                "scroll_speed must be positive, got {}",
                self.scroll_speed
            )));
        }
        if !(self.gravity >= 0.0) {
            return Err(GameError::Config(format!(
                "gravity must not be negative, got {}",
                self.gravity
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(GameError::Config(format!(
                "spawn_chance must be within [0, 1], got {}",
                self.spawn_chance
            )));
        }
        Ok(())
    }

    /// Parses a (possibly partial) JSON override; missing fields keep defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
