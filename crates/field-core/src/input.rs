//! Rotation velocity driven by mouse movement and touch drags.

use crate::config::{FieldConfig, TouchEndBehavior};
use crate::constants::VELOCITY_DECAY_DIVISOR;
use crate::math::{clamp, random_between};
use glam::DVec2;
use rand::Rng;

/// Last two touch positions; their difference is the drag delta.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct TouchState {
    pub now: DVec2,
    pub prev: DVec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputController {
    /// Per-frame rotation increment, before per-particle scaling.
    pub velocity: DVec2,
    pub touch: TouchState,
    pub limit: f64,
    pub touch_end: TouchEndBehavior,
}

impl InputController {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            velocity: DVec2::ZERO,
            touch: TouchState::default(),
            limit: config.velocity_limit,
            touch_end: config.touch_end,
        }
    }

    /// Start with a random spin in `[-limit, limit)` on both axes.
    pub fn with_random_spin<R: Rng + ?Sized>(rng: &mut R, config: &FieldConfig) -> Self {
        let mut input = Self::new(config);
        input.velocity = DVec2::new(
            random_between(rng, -input.limit, input.limit),
            random_between(rng, -input.limit, input.limit),
        );
        input
    }

    #[inline]
    fn clamp_delta(&self, delta: DVec2) -> DVec2 {
        DVec2::new(
            clamp(delta.x, -self.limit, self.limit),
            clamp(delta.y, -self.limit, self.limit),
        )
    }

    /// Relative mouse movement since the last event.
    pub fn pointer_move(&mut self, dx: f64, dy: f64) {
        self.velocity = self.clamp_delta(DVec2::new(dx, dy));
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.touch.now = DVec2::new(x, y);
        self.touch.prev = DVec2::ZERO;
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.touch.prev = self.touch.now;
        self.touch.now = DVec2::new(x, y);
        self.velocity = self.clamp_delta(self.touch.now - self.touch.prev);
    }

    pub fn touch_end(&mut self) {
        match self.touch_end {
            TouchEndBehavior::Coast => {}
            TouchEndBehavior::Stop => self.velocity = DVec2::ZERO,
        }
    }

    /// Once per frame: exponential slowdown toward rest.
    pub fn decay(&mut self) {
        self.velocity /= VELOCITY_DECAY_DIVISOR;
    }
}
