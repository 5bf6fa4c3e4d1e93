use field_core::{Circle, Surface, Viewport, CIRCLE_FILL};
use std::f64::consts::PI;
use web_sys as web;

/// [`Surface`] backed by a browser 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn draw_circle(&mut self, circle: &Circle) {
        let ctx = &self.ctx;
        ctx.set_line_width(circle.line_width);
        ctx.set_stroke_style_str(&circle.stroke.to_string());
        ctx.set_fill_style_str(CIRCLE_FILL);
        ctx.begin_path();
        // negative or NaN radii make arc() throw; the circle is just skipped
        _ = ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, 2.0 * PI);
        ctx.stroke();
        ctx.fill();
    }
}
