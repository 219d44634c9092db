//! Editor palette. Dark theme, built once as constants.

use crate::render::Color;

pub const BACKGROUND: Color = Color::rgb(30, 30, 30);
pub const PANEL_BG: Color = Color::rgb(40, 40, 40);
pub const BORDER: Color = Color::rgb(60, 60, 60);
pub const TEXT: Color = Color::rgb(220, 220, 220);
pub const TEXT_DIM: Color = Color::rgb(120, 120, 120);
pub const ACCENT: Color = Color::rgb(100, 150, 255);
pub const HOVER: Color = Color::rgb(80, 80, 80);
pub const SELECTION: Color = Color::rgb(255, 255, 0);
pub const SUCCESS: Color = Color::rgb(100, 255, 100);

// Scene view
pub const GRID_LINE: Color = Color::rgb(50, 50, 50);
pub const ORIGIN: Color = SUCCESS;
pub const OBJECT_DRAGGED: Color = Color::rgb(255, 200, 100);
pub const HEADING: Color = Color::rgb(255, 255, 255);

// Inspector fields
pub const FIELD_BG: Color = Color::rgb(35, 35, 35);
pub const FIELD_BORDER: Color = Color::rgb(80, 80, 80);
pub const FIELD_BG_HOVER: Color = Color::rgb(50, 50, 50);
pub const FIELD_BORDER_HOVER: Color = Color::rgb(120, 120, 120);
pub const FIELD_TEXT_SELECTION: Color = Color::rgb(100, 100, 200);
pub const LABEL_HOVER: Color = Color::rgb(180, 180, 180);

/// Background of an active text field. `pulse` is in `[0, 1]`.
#[must_use]
pub fn active_field_bg(pulse: f64) -> Color {
    let pulse = pulse.clamp(0.0, 1.0);
    Color::rgb(channel(40.0 + pulse * 20.0), channel(60.0 + pulse * 30.0), channel(100.0 + pulse * 40.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
