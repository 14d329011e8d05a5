//! Theme registry: the fixed set of visual themes and their image locators.
//!
//! Themes only change what the renderer draws. Speed, gravity and every other
//! simulation constant are theme-independent.

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Space,
    Ocean,
    Forest,
}

/// Which sprite slot an image fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetRole {
    Player,
    Obstacle,
    Background,
}

/// Opaque image locators (relative path or remote URL) for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeAssets {
    pub player: &'static str,
    pub obstacle: &'static str,
    pub background: &'static str,
}

impl ThemeAssets {
    pub fn get(&self, role: AssetRole) -> &'static str {
        match role {
            AssetRole::Player => self.player,
            AssetRole::Obstacle => self.obstacle,
            AssetRole::Background => self.background,
        }
    }
}

const SPACE_ASSETS: ThemeAssets = ThemeAssets {
    player: "images/spaceship.png",
    obstacle: "images/meteor.png",
    background: "https://img.freepik.com/free-vector/creative-watercolor-galaxy-background_79603-1388.jpg",
};

const OCEAN_ASSETS: ThemeAssets = ThemeAssets {
    player: "images/fish.png",
    obstacle: "images/seaweed.png",
    background: "https://www.patternpictures.com/wp-content/uploads/Intense-blue-ocean-background-water-render-patternpictures-5522-1400x930.jpg",
};

const FOREST_ASSETS: ThemeAssets = ThemeAssets {
    player: "images/squirrel.png",
    obstacle: "images/log.png",
    background: "https://images.pond5.com/forest-trees-background-glade-thicket-illustration-157953878_iconl_wide_nowm.jpeg",
};

impl Theme {
    /// Menu order.
    pub const ALL: [Theme; 3] = [Theme::Space, Theme::Ocean, Theme::Forest];

    pub fn key(self) -> &'static str {
        match self {
            Theme::Space => "space",
            Theme::Ocean => "ocean",
            Theme::Forest => "forest",
        }
    }

    /// Button caption: the key with its first letter upper-cased.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Space => "Space",
            Theme::Ocean => "Ocean",
            Theme::Forest => "Forest",
        }
    }

    pub fn assets(self) -> &'static ThemeAssets {
        match self {
            Theme::Space => &SPACE_ASSETS,
            Theme::Ocean => &OCEAN_ASSETS,
            Theme::Forest => &FOREST_ASSETS,
        }
    }

    pub fn from_key(key: &str) -> Result<Theme, GameError> {
        Theme::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| GameError::InvalidTheme(key.to_string()))
    }
}

impl FromStr for Theme {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_key(s)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetRole::Player => "player",
            AssetRole::Obstacle => "obstacle",
            AssetRole::Background => "background",
        })
    }
}
