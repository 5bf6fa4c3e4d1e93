//! The drawing target abstraction.
//!
//! The core never touches a real canvas; front-ends implement [`Surface`]
//! for whatever 2D API they have (the browser crate wraps
//! `CanvasRenderingContext2d`).

use glam::DVec2;
use std::fmt;

/// Current size of the render target in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Stroke colour in CSS `hsl()` terms. Saturation and lightness are percents
/// and are not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// One stroked and filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub line_width: f64,
    pub stroke: Hsl,
}

/// Fill used behind every particle outline.
pub const CIRCLE_FILL: &str = "#000000";

pub trait Surface {
    /// Clear the whole viewport.
    fn clear(&mut self, viewport: Viewport);
    /// Stroke the outline, then fill with [`CIRCLE_FILL`].
    fn draw_circle(&mut self, circle: &Circle);
}

/// A surface that only remembers what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Viewport),
    Circle(Circle),
}

impl RecordingSurface {
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle(c) => Some(c),
            DrawOp::Clear(_) => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ops.push(DrawOp::Clear(viewport));
    }

    fn draw_circle(&mut self, circle: &Circle) {
        self.ops.push(DrawOp::Circle(*circle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_formats_as_css() {
        let c = Hsl {
            hue: 120.5,
            saturation: 70.0,
            lightness: 55.0,
        };
        assert_eq!(c.to_string(), "hsl(120.5, 70%, 55%)");
    }

    #[test]
    fn viewport_center() {
        assert_eq!(Viewport::new(800.0, 600.0).center(), DVec2::new(400.0, 300.0));
    }
}
