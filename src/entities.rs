//! Player and obstacle kinematics. Pure data plus the per-entity motion rules.

use crate::config::GameConfig;

/// Axis-aligned box; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity, positive is downward.
    pub dy: f64,
    pub gravity: f64,
    pub jump_power: f64,
    pub on_ground: bool,
}

impl Player {
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            x: config.player_start_x,
            y: config.player_start_y,
            width: config.player_width,
            height: config.player_height,
            dy: 0.0,
            gravity: config.gravity,
            jump_power: config.jump_power,
            on_ground: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Launches the player if standing. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.dy = self.jump_power;
        true
    }

    /// One tick of gravity, then clamp to the ground line.
    pub fn integrate(&mut self, ground_y: f64) {
        self.dy += self.gravity;
        self.y += self.dy;
        if self.y + self.height >= ground_y {
            self.y = ground_y - self.height;
            self.dy = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    /// New obstacle flush with the right edge of the canvas.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            x: config.canvas_width,
            y: config.obstacle_y,
            width: config.obstacle_width,
            height: config.obstacle_height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn advance(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// Right edge has passed the left canvas boundary.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}
