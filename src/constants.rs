//! Simulation constants.
//!
//! All motion values are per-tick deltas. The game advances exactly one tick per
//! animation frame, so these numbers assume a nominal 60 Hz display refresh; a
//! faster display plays faster. Nothing in the crate scales by elapsed time.

/// Logical canvas size (width, height). Everything simulates in these units.
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

pub const PLAYER_START_X: f64 = 100.0;
/// Spawn height; the player drops onto the ground on the first ticks.
pub const PLAYER_START_Y: f64 = CANVAS_HEIGHT - 50.0;
pub const PLAYER_WIDTH: f64 = 60.0;
pub const PLAYER_HEIGHT: f64 = 60.0;

/// Added to vertical velocity every tick (y grows downward).
pub const GRAVITY: f64 = 0.6;
/// Vertical velocity assigned by a jump.
pub const JUMP_POWER: f64 = -15.0;

pub const OBSTACLE_WIDTH: f64 = 40.0;
pub const OBSTACLE_HEIGHT: f64 = 40.0;
pub const OBSTACLE_Y: f64 = CANVAS_HEIGHT - 50.0;

/// Per-tick probability of appending an obstacle at the right edge.
pub const SPAWN_CHANCE: f64 = 0.02;
/// Horizontal obstacle displacement per tick.
pub const SCROLL_SPEED: f64 = 5.0;
/// Background moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;
