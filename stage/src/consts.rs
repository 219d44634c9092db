//! Shared numeric constants for the stage crate.

use crate::geom::Vec2;

// ── Camera ──────────────────────────────────────────────────────

/// Smallest zoom factor the camera will accept.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the camera will accept.
pub const MAX_ZOOM: f64 = 10.0;

/// Zoom multiplier applied for one wheel tick away from the user.
pub const ZOOM_STEP_IN: f64 = 1.1;

/// Zoom multiplier applied for one wheel tick towards the user.
pub const ZOOM_STEP_OUT: f64 = 0.9;

// ── Objects ─────────────────────────────────────────────────────

/// Footprint diameter of an unscaled object, in world units.
pub const BASE_DIAMETER: f64 = 32.0;

/// Floor applied to each scale component wherever geometry is derived from it.
pub const MIN_SCALE: f64 = 0.01;

/// Extra screen pixels added around an object for the selection ring.
pub const SELECTION_PAD_PX: f64 = 10.0;

/// Objects whose center lies this far outside the viewport are not drawn.
pub const CULL_MARGIN_PX: f64 = 50.0;

/// Names are only drawn at or above this zoom.
pub const LABEL_MIN_ZOOM: f64 = 0.5;

// ── Grid ────────────────────────────────────────────────────────

/// Grid spacing at zoom 1.0, in world units.
pub const GRID_BASE: f64 = 32.0;

/// Grid lines closer than this on screen are not drawn.
pub const GRID_MIN_SCREEN_PX: f64 = 8.0;

/// Grid lines further apart than this on screen are not drawn.
pub const GRID_MAX_SCREEN_PX: f64 = 200.0;

/// Half-length of the origin crosshair arms, in screen pixels.
pub const ORIGIN_CROSS_PX: f64 = 20.0;

// ── Overlays ────────────────────────────────────────────────────

/// Font size of the zoom and camera readouts.
pub const OVERLAY_FONT_PX: f64 = 20.0;

/// Top-left corner of the zoom readout, in view-local pixels.
pub const ZOOM_READOUT_AT: Vec2 = Vec2::new(10.0, 10.0);

/// Top-left corner of the camera readout, in view-local pixels.
pub const CAMERA_READOUT_AT: Vec2 = Vec2::new(10.0, 30.0);

// ── Inspector ───────────────────────────────────────────────────

/// Value change per pixel of horizontal drag for position fields.
pub const POSITION_DRAG_STEP: f64 = 1.0;

/// Value change per pixel of horizontal drag for the rotation field.
pub const ROTATION_DRAG_STEP: f64 = 2.0;

/// Value change per pixel of horizontal drag for scale fields.
pub const SCALE_DRAG_STEP: f64 = 0.01;

/// Font size used by inspector fields and labels.
pub const FIELD_FONT_PX: f64 = 16.0;

/// Angular speed of the active text field's background pulse, in radians per second.
pub const PULSE_RATE: f64 = 8.0;

/// Full caret blink period in seconds; the caret is visible for the first half.
pub const BLINK_PERIOD: f64 = 1.0;
