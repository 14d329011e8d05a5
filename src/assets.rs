//! Theme image loading.
//!
//! Images start loading as soon as `src` is assigned; nothing waits for them.
//! The renderer checks `is_ready` per draw and falls back to a placeholder.

use std::cell::Cell;

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, window};

use crate::error::{GameError, GameResult};
use crate::theme::{AssetRole, Theme};

pub struct ThemeImage {
    pub element: HtmlImageElement,
    role: AssetRole,
    url: &'static str,
    reported: Cell<bool>,
}

impl ThemeImage {
    fn load(role: AssetRole, url: &'static str) -> GameResult<Self> {
        let doc = window()
            .and_then(|w| w.document())
            .ok_or_else(|| GameError::Dom("no document".into()))?;
        let element: HtmlImageElement = doc
            .create_element("img")
            .map_err(|e| GameError::from_js("create img", e))?
            .dyn_into()
            .map_err(|_| GameError::Dom("img element is not an HtmlImageElement".into()))?;
        element.set_src(url);
        Ok(Self { element, role, url, reported: Cell::new(false) })
    }

    pub fn role(&self) -> AssetRole {
        self.role
    }

    /// Fully decoded and drawable.
    pub fn is_ready(&self) -> bool {
        self.element.complete() && self.element.natural_width() > 0
    }

    /// Finished loading but has no pixels: the fetch or decode failed.
    pub fn is_broken(&self) -> bool {
        self.element.complete() && self.element.natural_width() == 0
    }

    /// Logs a broken image once per load.
    pub fn report_if_broken(&self, theme: Theme) {
        if self.is_broken() && !self.reported.replace(true) {
            let err = GameError::AssetLoad { theme: theme.key(), role: self.role, url: self.url };
            warn!(%err, "drawing placeholder");
        }
    }
}

/// The three sprites of one theme.
pub struct ThemeImages {
    pub theme: Theme,
    pub player: ThemeImage,
    pub obstacle: ThemeImage,
    pub background: ThemeImage,
}

impl ThemeImages {
    pub fn load(theme: Theme) -> GameResult<Self> {
        let assets = theme.assets();
        let load = |role| ThemeImage::load(role, assets.get(role));
        Ok(Self {
            theme,
            player: load(AssetRole::Player)?,
            obstacle: load(AssetRole::Obstacle)?,
            background: load(AssetRole::Background)?,
        })
    }

    pub fn get(&self, role: AssetRole) -> &ThemeImage {
        match role {
            AssetRole::Player => &self.player,
            AssetRole::Obstacle => &self.obstacle,
            AssetRole::Background => &self.background,
        }
    }
}
