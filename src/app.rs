//! Browser driver: owns the session state, runs the animation-frame loop and
//! routes keyboard input.
//!
//! Everything runs on the page's single thread. Key handlers and frame
//! callbacks are separate tasks on the same event queue, so a transition made
//! by a key press is always visible to the next frame.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::assets::ThemeImages;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::input::{self, Command, InputEffect};
use crate::overlay;
use crate::render;
use crate::state::{GameState, TickOutcome};
use crate::theme::Theme;

pub const CANVAS_ID: &str = "gameCanvas";

struct App {
    state: GameState,
    ctx: CanvasRenderingContext2d,
    images: Option<ThemeImages>,
    rng: SmallRng,
    /// A frame request is outstanding; never request a second one.
    frame_pending: bool,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static FRAME: FrameCallback = Rc::new(RefCell::new(None));
}

fn canvas_context(config: &GameConfig) -> GameResult<CanvasRenderingContext2d> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::Dom("no document".into()))?;
    let canvas: HtmlCanvasElement = match doc.get_element_by_id(CANVAS_ID) {
        Some(el) => el
            .dyn_into()
            .map_err(|_| GameError::Dom(format!("#{CANVAS_ID} is not a canvas")))?,
        None => {
            let c: HtmlCanvasElement = doc
                .create_element("canvas")
                .map_err(|e| GameError::from_js("create canvas", e))?
                .dyn_into()
                .map_err(|_| GameError::Dom("canvas element is not an HtmlCanvasElement".into()))?;
            c.set_id(CANVAS_ID);
            doc.body()
                .ok_or_else(|| GameError::Dom("no body".into()))?
                .append_child(&c)
                .map_err(|e| GameError::from_js("append canvas", e))?;
            c
        }
    };
    canvas.set_width(config.canvas_width as u32);
    canvas.set_height(config.canvas_height as u32);
    canvas
        .get_context("2d")
        .map_err(|e| GameError::from_js("get 2d context", e))?
        .ok_or_else(|| GameError::Dom("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| GameError::Dom("2d context has unexpected type".into()))
}

/// Creates the session, hooks the keyboard and shows the theme menu.
pub fn launch(config: GameConfig) -> GameResult<()> {
    config.validate()?;
    let ctx = canvas_context(&config)?;
    let mut app = App {
        state: GameState::new(config),
        ctx,
        images: None,
        rng: SmallRng::from_entropy(),
        frame_pending: false,
    };
    let previous = APP.with(|cell| cell.borrow_mut().take());
    let relaunch = previous.is_some();
    // A request made for the replaced session still fires into `on_frame`.
    app.frame_pending = previous.is_some_and(|old| old.frame_pending);
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    if !relaunch {
        install_key_listener()?;
    }
    info!("session created");
    show_menu()
}

fn show_menu() -> GameResult<()> {
    overlay::hide_pause_notice();
    overlay::show_theme_selection(|theme| {
        if let Err(err) = select_theme(theme) {
            warn!(%err, "theme selection failed");
        }
    })
}

/// Starts a fresh run with `theme` and engages the frame loop.
pub fn select_theme(theme: Theme) -> GameResult<()> {
    let images = ThemeImages::load(theme)?;
    let started = APP.with(|cell| {
        let mut guard = cell.borrow_mut();
        let Some(app) = guard.as_mut() else {
            return false;
        };
        app.images = Some(images);
        app.state.start(theme);
        true
    });
    if !started {
        return Err(GameError::Dom("game not launched".into()));
    }
    overlay::hide_theme_selection();
    overlay::hide_pause_notice();
    schedule_frame();
    Ok(())
}

/// Same as `select_theme` but keyed by registry name; unknown keys leave the
/// session untouched.
pub fn select_theme_key(key: &str) -> GameResult<()> {
    let theme = Theme::from_key(key).inspect_err(|err| warn!(%err, "theme rejected"))?;
    select_theme(theme)
}

fn schedule_frame() {
    let should_request = APP.with(|cell| {
        let mut guard = cell.borrow_mut();
        match guard.as_mut() {
            Some(app) if !app.frame_pending && app.state.should_schedule() => {
                app.frame_pending = true;
                true
            }
            _ => false,
        }
    });
    if !should_request {
        return;
    }
    FRAME.with(|frame| {
        if frame.borrow().is_none() {
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(|_ts: f64| {
                on_frame();
            }) as Box<dyn FnMut(f64)>));
        }
        if let (Some(w), Some(cb)) = (window(), frame.borrow().as_ref()) {
            if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_err() {
                warn!("requestAnimationFrame failed");
                APP.with(|cell| {
                    if let Some(app) = cell.borrow_mut().as_mut() {
                        app.frame_pending = false;
                    }
                });
            }
        }
    });
}

fn on_frame() {
    APP.with(|cell| {
        let mut guard = cell.borrow_mut();
        let Some(app) = guard.as_mut() else { return };
        app.frame_pending = false;
        // Paused, over or back at the menu: let the loop lapse.
        if !app.state.should_schedule() {
            return;
        }
        match app.state.tick(&mut app.rng) {
            TickOutcome::GameOver { .. } => render::render_game_over(&app.ctx, &app.state),
            TickOutcome::Continue { .. } => {
                if let Some(images) = &app.images {
                    render::render_frame(&app.ctx, &app.state, images);
                }
            }
            TickOutcome::Idle => {}
        }
    });
    schedule_frame();
}

fn install_key_listener() -> GameResult<()> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::Dom("no document".into()))?;
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        let Some(command) = Command::from_key(&evt.key()) else {
            return;
        };
        if command == Command::Jump {
            // Space would otherwise scroll the page.
            evt.prevent_default();
        }
        let effect = APP.with(|cell| {
            cell.borrow_mut()
                .as_mut()
                .map(|app| input::handle(&mut app.state, command))
        });
        if let Some(effect) = effect {
            if let Err(err) = apply_effect(effect) {
                warn!(%err, ?effect, "input effect failed");
            }
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|e| GameError::from_js("listen keydown", e))?;
    closure.forget();
    Ok(())
}

fn apply_effect(effect: InputEffect) -> GameResult<()> {
    match effect {
        InputEffect::Ignored | InputEffect::Jumped => {}
        InputEffect::Paused => overlay::show_pause_notice()?,
        InputEffect::Resumed => overlay::hide_pause_notice(),
        InputEffect::Restarted => {}
        InputEffect::ShowThemeMenu => {
            APP.with(|cell| {
                if let Some(app) = cell.borrow().as_ref() {
                    let c = app.state.config();
                    app.ctx.clear_rect(0.0, 0.0, c.canvas_width, c.canvas_height);
                }
            });
            show_menu()?;
        }
    }
    if effect.resumes_loop() {
        schedule_frame();
    }
    Ok(())
}
