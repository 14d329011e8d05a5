//! Game state and the per-frame simulation step.
//!
//! One `GameState` lives for the whole session. Starting or restarting a run
//! replaces the per-run fields (player, obstacles, score, scroll offset) while
//! the high score carries over.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entities::{Obstacle, Player};
use crate::theme::Theme;

/// Coarse session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    NotStarted,
    Running,
    Paused,
    Over,
}

/// What a single `tick` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing was touched.
    Idle,
    Continue { passed: u32, spawned: bool },
    GameOver { score: u32, high_score: u32 },
}

#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    mode: RunMode,
    theme: Option<Theme>,
    player: Player,
    obstacles: Vec<Obstacle>,
    score: u32,
    high_score: u32,
    speed: f64,
    background_x: f64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: Player::spawn(&config),
            obstacles: Vec::new(),
            score: 0,
            high_score: 0,
            speed: config.scroll_speed,
            background_x: 0.0,
            mode: RunMode::NotStarted,
            theme: None,
            config,
        }
    }

    // --- Read access (renderer, tests) ------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn mode(&self) -> RunMode {
        self.mode
    }
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }
    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn high_score(&self) -> u32 {
        self.high_score
    }
    pub fn speed(&self) -> f64 {
        self.speed
    }
    pub fn background_x(&self) -> f64 {
        self.background_x
    }

    /// The frame loop keeps re-requesting frames only while this holds.
    pub fn should_schedule(&self) -> bool {
        self.mode == RunMode::Running
    }

    // --- Lifecycle --------------------------------------------------------

    /// Begins a fresh run with `theme`.
    pub fn start(&mut self, theme: Theme) {
        self.theme = Some(theme);
        self.reset();
        self.mode = RunMode::Running;
        info!(theme = %theme, high_score = self.high_score, "run started");
    }

    /// Replaces all per-run state. The high score survives; it only moves on
    /// game over, so an abandoned run never counts.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.config);
        self.obstacles.clear();
        self.score = 0;
        self.speed = self.config.scroll_speed;
        self.background_x = 0.0;
    }

    /// Restart after a game over. Returns false (and changes nothing) otherwise.
    pub fn restart(&mut self) -> bool {
        if self.mode != RunMode::Over {
            return false;
        }
        self.reset();
        self.mode = RunMode::Running;
        info!(high_score = self.high_score, "run restarted");
        true
    }

    /// Abandons the current run and returns to theme selection.
    pub fn leave_to_menu(&mut self) {
        info!(from = ?self.mode, score = self.score, "returning to theme selection");
        self.mode = RunMode::NotStarted;
    }

    /// Running ⇄ Paused. Returns the new mode, or `None` if pausing does not
    /// apply in the current mode.
    pub fn toggle_pause(&mut self) -> Option<RunMode> {
        self.mode = match self.mode {
            RunMode::Running => RunMode::Paused,
            RunMode::Paused => RunMode::Running,
            RunMode::NotStarted | RunMode::Over => return None,
        };
        debug!(mode = ?self.mode, "pause toggled");
        Some(self.mode)
    }

    /// Jump if running and standing on the ground.
    pub fn jump(&mut self) -> bool {
        self.mode == RunMode::Running && self.player.jump()
    }

    pub fn end_game(&mut self) {
        self.mode = RunMode::Over;
        self.high_score = self.high_score.max(self.score);
        info!(score = self.score, high_score = self.high_score, "game over");
    }

    // --- Simulation step --------------------------------------------------

    /// Advances one frame. Does nothing unless the run mode is `Running`.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.mode != RunMode::Running {
            return TickOutcome::Idle;
        }

        let spawned = self.spawn_obstacle(rng);
        let passed = self.advance_obstacles();
        if self.detect_collision() {
            self.end_game();
            return TickOutcome::GameOver {
                score: self.score,
                high_score: self.high_score,
            };
        }
        self.integrate_player();
        self.scroll_background();
        TickOutcome::Continue { passed, spawned }
    }

    /// Appends an obstacle at the right edge with probability `spawn_chance`.
    /// Out-of-range chances clamp to [0, 1]; NaN never spawns.
    pub fn spawn_obstacle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let chance = match self.config.spawn_chance {
            p if p.is_nan() => 0.0,
            p => p.clamp(0.0, 1.0),
        };
        if rng.gen_bool(chance) {
            self.obstacles.push(Obstacle::spawn(&self.config));
            debug!(count = self.obstacles.len(), "obstacle spawned");
            true
        } else {
            false
        }
    }

    /// Moves every obstacle left, drops the ones that left the screen and
    /// scores one point per dropped obstacle. Returns the number dropped.
    pub fn advance_obstacles(&mut self) -> u32 {
        let speed = self.speed;
        let before = self.obstacles.len();
        self.obstacles.retain_mut(|o| {
            o.advance(speed);
            !o.is_off_screen()
        });
        let passed = (before - self.obstacles.len()) as u32;
        self.score += passed;
        passed
    }

    /// Whether the player overlaps any remaining obstacle.
    pub fn detect_collision(&self) -> bool {
        let player = self.player.bounds();
        self.obstacles.iter().any(|o| player.overlaps(&o.bounds()))
    }

    pub fn integrate_player(&mut self) {
        self.player.integrate(self.config.ground_y());
    }

    /// Half-rate parallax; wraps to 0 once a full canvas width has scrolled.
    pub fn scroll_background(&mut self) {
        self.background_x -= self.speed * self.config.parallax_factor;
        if self.background_x <= -self.config.canvas_width {
            self.background_x = 0.0;
        }
    }

    /// Appends a pre-built obstacle at the tail, bypassing the spawn roll.
    pub fn push_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiet_config() -> GameConfig {
        GameConfig { spawn_chance: 0.0, ..GameConfig::default() }
    }

    fn running(config: GameConfig) -> GameState {
        let mut s = GameState::new(config);
        s.start(Theme::Space);
        s
    }

    fn obstacle_at(x: f64) -> Obstacle {
        let mut o = Obstacle::spawn(&GameConfig::default());
        o.x = x;
        o
    }

    #[test]
    fn new_state_is_not_started_and_idle() {
        let mut s = GameState::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(s.mode(), RunMode::NotStarted);
        assert_eq!(s.theme(), None);
        assert_eq!(s.tick(&mut rng), TickOutcome::Idle);
        assert!(!s.should_schedule());
    }

    #[test]
    fn certain_spawn_appends_at_right_edge() {
        let mut s = running(GameConfig { spawn_chance: 1.0, ..GameConfig::default() });
        let mut rng = StdRng::seed_from_u64(7);
        assert!(s.spawn_obstacle(&mut rng));
        assert!(s.spawn_obstacle(&mut rng));
        assert_eq!(s.obstacles().len(), 2);
        assert_eq!(s.obstacles()[1].x, 800.0);
        assert_eq!(s.obstacles()[1].y, 350.0);
    }

    #[test]
    fn out_of_range_spawn_chance_is_clamped() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut always = running(GameConfig { spawn_chance: 1.5, ..GameConfig::default() });
        assert!(always.spawn_obstacle(&mut rng));
        assert!(matches!(always.tick(&mut rng), TickOutcome::Continue { spawned: true, .. }));

        for chance in [-0.5, f64::NAN] {
            let mut never = running(GameConfig { spawn_chance: chance, ..GameConfig::default() });
            assert!(!never.spawn_obstacle(&mut rng));
            assert_eq!(never.tick(&mut rng), TickOutcome::Continue { passed: 0, spawned: false });
        }
    }

    #[test]
    fn reset_leaves_high_score_untouched() {
        let mut s = running(quiet_config());
        s.score = 9;
        s.reset();
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 0);

        s.score = 3;
        s.end_game();
        s.reset();
        assert_eq!(s.high_score(), 3);
    }

    #[test]
    fn seeded_spawn_rate_is_roughly_two_percent() {
        let mut s = running(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(42);
        let spawned = (0..10_000).filter(|_| s.spawn_obstacle(&mut rng)).count();
        assert!((100..=300).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn removal_scores_every_departing_obstacle_once() {
        let mut s = running(quiet_config());
        // Two adjacent obstacles leave on the same tick; neither may be skipped.
        for x in [-40.0, -38.0, 500.0] {
            s.push_obstacle(obstacle_at(x));
        }
        assert_eq!(s.advance_obstacles(), 2);
        assert_eq!(s.score(), 2);
        assert_eq!(s.obstacles().len(), 1);
        assert_eq!(s.obstacles()[0].x, 495.0);
    }

    #[test]
    fn collision_ends_run_and_raises_high_score() {
        let mut s = running(quiet_config());
        let mut rng = StdRng::seed_from_u64(3);
        s.score = 4;
        let x = s.player().x + 10.0;
        s.push_obstacle(obstacle_at(x));
        let outcome = s.tick(&mut rng);
        assert_eq!(outcome, TickOutcome::GameOver { score: 4, high_score: 4 });
        assert_eq!(s.mode(), RunMode::Over);
        assert!(!s.should_schedule());
        assert_eq!(s.tick(&mut rng), TickOutcome::Idle);
    }

    #[test]
    fn background_wraps_after_full_width() {
        let mut s = running(quiet_config());
        for _ in 0..319 {
            s.scroll_background();
        }
        assert_eq!(s.background_x(), -797.5);
        s.scroll_background();
        assert_eq!(s.background_x(), 0.0);
    }

    #[test]
    fn toggle_pause_only_between_running_and_paused() {
        let mut s = GameState::default();
        assert_eq!(s.toggle_pause(), None);
        s.start(Theme::Ocean);
        assert_eq!(s.toggle_pause(), Some(RunMode::Paused));
        assert_eq!(s.toggle_pause(), Some(RunMode::Running));
        s.end_game();
        assert_eq!(s.toggle_pause(), None);
        assert_eq!(s.mode(), RunMode::Over);
    }

    #[test]
    fn restart_only_from_over() {
        let mut s = running(quiet_config());
        assert!(!s.restart());
        s.end_game();
        assert!(s.restart());
        assert_eq!(s.mode(), RunMode::Running);
        assert_eq!(s.theme(), Some(Theme::Space));
    }
}
