//! Recording surface for render and widget tests.

#![allow(dead_code)]

use crate::geom::{Rect, Vec2};
use crate::render::{Color, Surface, TextMetrics};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FillRect(Rect, Color),
    StrokeRect(Rect, Color),
    FillCircle(Vec2, f64, Color),
    FillEllipse(Vec2, Vec2, Color),
    StrokeEllipse(Vec2, Vec2, Color),
    Line(Vec2, Vec2, Color),
    Polygon(Vec<Vec2>, Color),
    Text(Vec2, String, Color),
    PushClip(Rect),
    PopClip,
}

/// Fixed-width text: every glyph is half the font size wide and the line is
/// one font size tall.
pub struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str, size: f64) -> Vec2 {
        Vec2::new(text.chars().count() as f64 * size * 0.5, size)
    }
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(_, s, _) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn text_color(&self, needle: &str) -> Option<Color> {
        self.calls.iter().find_map(|c| match c {
            Call::Text(_, s, color) if s == needle => Some(*color),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl TextMetrics for Recorder {
    fn measure_text(&self, text: &str, size: f64) -> Vec2 {
        FixedMetrics.measure_text(text, size)
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(Call::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, _thickness: f64, color: Color) {
        self.calls.push(Call::StrokeRect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.calls.push(Call::FillCircle(center, radius, color));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.calls.push(Call::FillEllipse(center, radii, color));
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, _thickness: f64, color: Color) {
        self.calls.push(Call::StrokeEllipse(center, radii, color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, _thickness: f64, color: Color) {
        self.calls.push(Call::Line(from, to, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(Call::Polygon(points.to_vec(), color));
    }

    fn text(&mut self, pos: Vec2, text: &str, _size: f64, color: Color) {
        self.calls.push(Call::Text(pos, text.to_string(), color));
    }

    fn push_clip(&mut self, rect: Rect) {
        self.calls.push(Call::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.calls.push(Call::PopClip);
    }
}
