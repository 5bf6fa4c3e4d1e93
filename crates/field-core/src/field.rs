//! The particle collection and its per-frame update/draw pass.
//!
//! Draw order is back to front: after every tick the particles are sorted
//! by descending `z`, so nearer circles are painted over farther ones.

use crate::config::FieldConfig;
use crate::math::random_between;
use crate::particle::Particle;
use crate::surface::{Surface, Viewport};
use glam::{DVec2, DVec3};
use rand::Rng;

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub config: FieldConfig,
    /// Rotation origin used to seed per-particle speed.
    pub center: DVec3,
}

impl ParticleField {
    /// Fill the field with `config.particle_count` particles spread over the
    /// viewport-sized box centred on the origin, `z` in `[0, H)`.
    pub fn populate<R: Rng + ?Sized>(rng: &mut R, config: FieldConfig, viewport: Viewport) -> Self {
        let Viewport { width, height } = viewport;
        let center = DVec3::new(0.0, 0.0, height / 2.0);
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            let position = DVec3::new(
                random_between(rng, -width / 2.0, width / 2.0),
                random_between(rng, -height / 2.0, height / 2.0),
                random_between(rng, 0.0, height),
            );
            particles.push(Particle::spawn(rng, position, center, &config));
        }
        log::debug!(
            "[field] populated {} particles in {}x{}",
            particles.len(),
            width,
            height
        );
        Self {
            particles,
            config,
            center,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Rotate every particle by `velocity`, then restore back-to-front order.
    pub fn tick(&mut self, velocity: DVec2) {
        let scaling = self.config.rotation;
        for p in &mut self.particles {
            p.update(velocity, scaling);
        }
        self.sort_by_depth();
    }

    /// Stable sort, farthest (largest `z`) first.
    pub fn sort_by_depth(&mut self) {
        self.particles.sort_by(|a, b| b.position.z.total_cmp(&a.position.z));
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, viewport: Viewport) {
        for p in &self.particles {
            p.draw(surface, viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(config: FieldConfig) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleField::populate(&mut rng, config, Viewport::new(1280.0, 720.0))
    }

    #[test]
    fn populate_respects_count_and_bounds() {
        for config in [FieldConfig::parallax(), FieldConfig::uniform()] {
            let expected = config.particle_count;
            let f = field(config);
            assert_eq!(f.len(), expected);
            for p in &f.particles {
                assert!((-640.0..640.0).contains(&p.position.x));
                assert!((-360.0..360.0).contains(&p.position.y));
                assert!((0.0..720.0).contains(&p.position.z));
            }
        }
    }

    #[test]
    fn center_sits_half_a_height_deep() {
        let f = field(FieldConfig::parallax());
        assert_eq!(f.center, DVec3::new(0.0, 0.0, 360.0));
    }

    #[test]
    fn tick_orders_back_to_front() {
        let mut f = field(FieldConfig::uniform());
        f.tick(DVec2::new(7.0, -3.0));
        assert!(f
            .particles
            .windows(2)
            .all(|w| w[0].position.z >= w[1].position.z));
    }

    #[test]
    fn tick_at_rest_only_reorders() {
        let mut f = field(FieldConfig::parallax());
        let mut before: Vec<DVec3> = f.particles.iter().map(|p| p.position).collect();
        f.tick(DVec2::ZERO);
        f.tick(DVec2::ZERO);
        let mut after: Vec<DVec3> = f.particles.iter().map(|p| p.position).collect();
        let by_z = |a: &DVec3, b: &DVec3| b.z.total_cmp(&a.z);
        before.sort_by(by_z);
        after.sort_by(by_z);
        assert_eq!(before, after);
    }

    #[test]
    fn empty_field_is_harmless() {
        let mut config = FieldConfig::uniform();
        config.particle_count = 0;
        let mut f = field(config);
        assert!(f.is_empty());
        f.tick(DVec2::new(1.0, 1.0));
        assert!(f.is_empty());
    }
}
