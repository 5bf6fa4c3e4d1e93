//! Pseudo-perspective projection of a field point onto the surface.
//!
//! Depth is not divided out like a real camera would. Instead x/y are
//! remapped into a band that narrows with `z`, and size, colour and stroke
//! fade linearly over `[0, H/3]`. Nothing is clamped, so points far outside
//! that band produce out-of-range lightness, saturation or stroke widths.

use crate::constants::*;
use crate::math::remap;
use crate::surface::{Circle, Hsl, Viewport};
use glam::{DVec2, DVec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Position relative to the surface centre.
    pub screen: DVec2,
    pub size: f64,
    pub brightness: f64,
    pub saturation: f64,
    pub line_width: f64,
}

pub fn project(point: DVec3, base_size: f64, viewport: Viewport) -> Projection {
    let Viewport { width, height } = viewport;
    let depth_max = height / DEPTH_RANGE_DIVISOR;

    let x = remap(point.x, 0.0, width, point.z, height - point.z);
    let y = remap(point.y, 0.0, height, point.z, height - point.z);
    let size = if point.z == 0.0 {
        base_size
    } else {
        base_size / remap(point.z, 0.0, depth_max, SIZE_DEPTH_NEAR, SIZE_DEPTH_FAR).powi(2)
    };

    Projection {
        screen: DVec2::new(x, y),
        size,
        brightness: remap(point.z, 0.0, depth_max, BRIGHTNESS_NEAR, BRIGHTNESS_FAR),
        saturation: remap(point.z, 0.0, depth_max, SATURATION_NEAR, SATURATION_FAR),
        line_width: remap(point.z, 0.0, depth_max, LINE_WIDTH_NEAR, LINE_WIDTH_FAR),
    }
}

impl Projection {
    /// Absolute surface position; the field is centred on the surface.
    #[inline]
    pub fn draw_position(&self, viewport: Viewport) -> DVec2 {
        self.screen + viewport.center()
    }

    pub fn to_circle(&self, hue: f64, viewport: Viewport) -> Circle {
        Circle {
            center: self.draw_position(viewport),
            radius: self.size,
            line_width: self.line_width,
            stroke: Hsl {
                hue,
                saturation: self.saturation,
                lightness: self.brightness,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_depth_keeps_base_size_and_near_attributes() {
        let p = project(DVec3::new(0.0, 0.0, 0.0), 9.0, VP);
        assert_eq!(p.size, 9.0);
        assert_eq!(p.brightness, 55.0);
        assert_eq!(p.saturation, 70.0);
        assert_eq!(p.line_width, 2.0);
        assert_eq!(p.screen, DVec2::ZERO);
        assert_eq!(p.draw_position(VP), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn far_edge_of_depth_band() {
        // H/3 = 200
        let p = project(DVec3::new(0.0, 0.0, 200.0), 14.4, VP);
        assert!(close(p.size, 14.4 / 1.44));
        assert!(close(p.brightness, 45.0));
        assert!(close(p.saturation, 30.0));
        assert!(close(p.line_width, 0.3));
    }

    #[test]
    fn attributes_extrapolate_beyond_band() {
        // z = H puts the point three band-widths deep
        let p = project(DVec3::new(0.0, 0.0, 600.0), 10.0, VP);
        assert!(close(p.brightness, 25.0));
        assert!(close(p.saturation, -50.0));
        assert!(p.line_width < 0.0);
        assert!(close(p.size, 10.0 / (1.6 * 1.6)));
    }

    #[test]
    fn screen_band_narrows_with_depth() {
        // x remaps [0, W] onto [z, H - z]; the height is used for both axes
        let p = project(DVec3::new(800.0, 600.0, 100.0), 5.0, VP);
        assert!(close(p.screen.x, 500.0));
        assert!(close(p.screen.y, 500.0));
        let q = project(DVec3::new(400.0, 300.0, 100.0), 5.0, VP);
        assert!(close(q.screen.x, 300.0));
        assert!(close(q.screen.y, 300.0));
    }

    #[test]
    fn circle_carries_hue_and_fade() {
        let p = project(DVec3::new(-100.0, 50.0, 0.0), 4.0, VP);
        let c = p.to_circle(210.0, VP);
        assert_eq!(c.radius, 4.0);
        assert_eq!(c.stroke.hue, 210.0);
        assert_eq!(c.stroke.lightness, 55.0);
        assert_eq!(c.stroke.saturation, 70.0);
        assert_eq!(c.center, p.screen + DVec2::new(400.0, 300.0));
    }
}
