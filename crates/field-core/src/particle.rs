use crate::config::{FieldConfig, RotationScaling};
use crate::constants::HUE_MAX;
use crate::math::{distance, random_between, rotate};
use crate::projection::project;
use crate::surface::{Surface, Viewport};
use glam::{DVec2, DVec3};
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec3,
    /// Radius before depth scaling.
    pub size: f64,
    /// Rotation multiplier; only set when the config rotates per particle.
    pub speed: Option<f64>,
    pub hue: f64,
}

impl Particle {
    /// Random size and hue; `center` seeds the per-particle speed.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        position: DVec3,
        center: DVec3,
        config: &FieldConfig,
    ) -> Self {
        let (size_min, size_max) = config.size_range;
        let size = random_between(rng, size_min, size_max);
        let speed = match config.rotation {
            RotationScaling::PerParticle { .. } => Some(size.sqrt() * distance(center, position)),
            RotationScaling::Uniform { .. } => None,
        };
        let hue = random_between(rng, 0.0, HUE_MAX);
        Self {
            position,
            size,
            speed,
            hue,
        }
    }

    /// Rotation angles (about x, then y) for this frame's velocity.
    pub fn rotation_angles(&self, velocity: DVec2, scaling: RotationScaling) -> (f64, f64) {
        match scaling {
            RotationScaling::PerParticle { divisor } => {
                let speed = self.speed.unwrap_or(0.0);
                (speed * velocity.x / divisor, speed * velocity.y / divisor)
            }
            RotationScaling::Uniform { divisor } => (velocity.x / divisor, velocity.y / divisor),
        }
    }

    pub fn update(&mut self, velocity: DVec2, scaling: RotationScaling) {
        let (ax, ay) = self.rotation_angles(velocity, scaling);
        self.position = rotate(self.position, ax, ay);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, viewport: Viewport) {
        let projection = project(self.position, self.size, viewport);
        surface.draw_circle(&projection.to_circle(self.hue, viewport));
    }
}
