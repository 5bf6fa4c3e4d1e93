//! Explicit simulation state: what the render loop and the input handlers
//! share between frames.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::input::InputController;
use crate::surface::{Surface, Viewport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Simulation {
    pub field: ParticleField,
    pub input: InputController,
    pub viewport: Viewport,
    pub frame_count: u64,
}

impl Simulation {
    /// Populate the field and pick a random initial spin.
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, viewport: Viewport, rng: &mut R) -> Self {
        let input = InputController::with_random_spin(rng, &config);
        let field = ParticleField::populate(rng, config, viewport);
        log::info!(
            "[sim] {} particles, spin=({:.2},{:.2})",
            field.len(),
            input.velocity.x,
            input.velocity.y
        );
        Self {
            field,
            input,
            viewport,
            frame_count: 0,
        }
    }

    /// Deterministic construction for tests and reproducible demos.
    pub fn seeded(config: FieldConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(config, viewport, &mut rng)
    }

    /// Clear, rotate, draw back to front, then let the spin decay.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.viewport);
        self.field.tick(self.input.velocity);
        self.field.draw(surface, self.viewport);
        self.input.decay();
        self.frame_count += 1;
    }

    /// Only future projections see the new size; particles stay where they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        log::debug!("[sim] resized to {}x{}", width, height);
    }
}
