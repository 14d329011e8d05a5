//! Keyboard commands and the guarded transitions they trigger.
//!
//! `handle` mutates the game state and reports what the presentation layer
//! has to do in response (overlays, re-engaging the frame loop). It never
//! touches the DOM itself.

use tracing::{debug, info};

use crate::state::{GameState, RunMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
    ChangeTheme,
    TogglePause,
}

impl Command {
    /// Maps a `KeyboardEvent.key` value. Letters ignore case so caps lock
    /// does not disable restart/theme/pause.
    pub fn from_key(key: &str) -> Option<Command> {
        match key {
            " " => Some(Command::Jump),
            "r" | "R" => Some(Command::Restart),
            "t" | "T" => Some(Command::ChangeTheme),
            "p" | "P" => Some(Command::TogglePause),
            _ => None,
        }
    }
}

/// Follow-up work for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEffect {
    /// Guard failed; nothing changed.
    Ignored,
    Jumped,
    /// Fresh run started; the frame loop must be re-engaged.
    Restarted,
    /// Run abandoned; tear down overlays and show the theme menu.
    ShowThemeMenu,
    /// Show the pause notice. The frame loop stops on its own.
    Paused,
    /// Hide the pause notice and re-engage the frame loop.
    Resumed,
}

impl InputEffect {
    pub fn resumes_loop(self) -> bool {
        matches!(self, InputEffect::Restarted | InputEffect::Resumed)
    }
}

/// Applies `command` to `state`.
///
/// Guards: jump only while running and on the ground (so it is inert while
/// paused or over); restart only after game over; pause only toggles between
/// running and paused; theme change works from any mode.
pub fn handle(state: &mut GameState, command: Command) -> InputEffect {
    let effect = match command {
        Command::Jump => {
            if state.jump() {
                InputEffect::Jumped
            } else {
                InputEffect::Ignored
            }
        }
        Command::Restart => {
            if state.restart() {
                InputEffect::Restarted
            } else {
                InputEffect::Ignored
            }
        }
        Command::ChangeTheme => {
            state.leave_to_menu();
            InputEffect::ShowThemeMenu
        }
        Command::TogglePause => match state.toggle_pause() {
            Some(RunMode::Paused) => InputEffect::Paused,
            Some(_) => InputEffect::Resumed,
            None => InputEffect::Ignored,
        },
    };
    match effect {
        InputEffect::Ignored => debug!(?command, mode = ?state.mode(), "command ignored"),
        InputEffect::Jumped => debug!("jump"),
        _ => info!(?command, ?effect, "command applied"),
    }
    effect
}
