//! Startup configuration: command-line flags with environment fallbacks.
//!
//! Every flag can also come from a `SCENE_EDITOR_*` variable, and `main`
//! loads a `.env` file before parsing. [`EditorConfig::validate`] validates the
//! numbers and computes the fixed panel rectangles once.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use clap::Parser;
use stage::geom::Rect;

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_PLAY_SPEED: f64 = 5.0;
pub const DEFAULT_HIERARCHY_WIDTH: u32 = 250;
pub const DEFAULT_INSPECTOR_WIDTH: u32 = 300;
pub const DEFAULT_CONSOLE_HEIGHT: u32 = 150;
pub const DEFAULT_MENU_HEIGHT: u32 = 40;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("window {width}px wide leaves no room for the scene view (hierarchy {hierarchy}px + inspector {inspector}px)")]
    SceneViewTooNarrow { width: u32, hierarchy: u32, inspector: u32 },
    #[error("window {height}px tall leaves no room for the scene view (menu {menu}px + console {console}px)")]
    SceneViewTooShort { height: u32, menu: u32, console: u32 },
    #[error("target fps must be positive")]
    ZeroFps,
    #[error("play speed must be a finite non-negative number, got {0}")]
    InvalidPlaySpeed(f64),
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "scene-editor", about = "Desktop 2D scene editor")]
pub struct EditorConfig {
    /// Window width in pixels.
    #[arg(long, env = "SCENE_EDITOR_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, env = "SCENE_EDITOR_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Frame rate the main loop is capped at.
    #[arg(long, env = "SCENE_EDITOR_FPS", default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Pixels per frame the selected object moves in play mode.
    #[arg(long, env = "SCENE_EDITOR_PLAY_SPEED", default_value_t = DEFAULT_PLAY_SPEED)]
    pub play_speed: f64,

    #[arg(long, env = "SCENE_EDITOR_HIDE_GRID")]
    pub hide_grid: bool,

    #[arg(long, env = "SCENE_EDITOR_HIDE_ORIGIN")]
    pub hide_origin: bool,

    /// Start with an empty scene instead of the three sample objects.
    #[arg(long, env = "SCENE_EDITOR_EMPTY")]
    pub empty: bool,

    #[arg(long, env = "SCENE_EDITOR_HIERARCHY_WIDTH", default_value_t = DEFAULT_HIERARCHY_WIDTH)]
    pub hierarchy_width: u32,

    #[arg(long, env = "SCENE_EDITOR_INSPECTOR_WIDTH", default_value_t = DEFAULT_INSPECTOR_WIDTH)]
    pub inspector_width: u32,

    #[arg(long, env = "SCENE_EDITOR_CONSOLE_HEIGHT", default_value_t = DEFAULT_CONSOLE_HEIGHT)]
    pub console_height: u32,

    #[arg(long, env = "SCENE_EDITOR_MENU_HEIGHT", default_value_t = DEFAULT_MENU_HEIGHT)]
    pub menu_height: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            play_speed: DEFAULT_PLAY_SPEED,
            hide_grid: false,
            hide_origin: false,
            empty: false,
            hierarchy_width: DEFAULT_HIERARCHY_WIDTH,
            inspector_width: DEFAULT_INSPECTOR_WIDTH,
            console_height: DEFAULT_CONSOLE_HEIGHT,
            menu_height: DEFAULT_MENU_HEIGHT,
        }
    }
}

/// Fixed window regions, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub window: Rect,
    pub menu: Rect,
    pub hierarchy: Rect,
    pub scene: Rect,
    pub inspector: Rect,
    pub console: Rect,
}

impl EditorConfig {
    /// Check the numbers and compute the panel layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the side panels or the menu and console
    /// leave the scene view without positive area, when `fps` is zero, or when
    /// the play speed is negative or not finite.
    pub fn validate(&self) -> Result<Layout, ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if !self.play_speed.is_finite() || self.play_speed < 0.0 {
            return Err(ConfigError::InvalidPlaySpeed(self.play_speed));
        }
        if self.hierarchy_width.saturating_add(self.inspector_width) >= self.width {
            return Err(ConfigError::SceneViewTooNarrow {
                width: self.width,
                hierarchy: self.hierarchy_width,
                inspector: self.inspector_width,
            });
        }
        if self.menu_height.saturating_add(self.console_height) >= self.height {
            return Err(ConfigError::SceneViewTooShort {
                height: self.height,
                menu: self.menu_height,
                console: self.console_height,
            });
        }

        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let menu_h = f64::from(self.menu_height);
        let console_h = f64::from(self.console_height);
        let left = f64::from(self.hierarchy_width);
        let right = f64::from(self.inspector_width);
        let body_h = h - menu_h - console_h;

        Ok(Layout {
            window: Rect::new(0.0, 0.0, w, h),
            menu: Rect::new(0.0, 0.0, w, menu_h),
            hierarchy: Rect::new(0.0, menu_h, left, body_h),
            scene: Rect::new(left, menu_h, w - left - right, body_h),
            inspector: Rect::new(w - right, menu_h, right, body_h),
            console: Rect::new(0.0, h - console_h, w, console_h),
        })
    }
}
