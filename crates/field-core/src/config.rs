use crate::constants::*;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The two tunings of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// 40 large particles; farther particles spin faster, giving layered parallax.
    #[default]
    Parallax,
    /// 100 small particles that all rotate by the same angle.
    Uniform,
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parallax" | "a" => Ok(Variant::Parallax),
            "uniform" | "b" => Ok(Variant::Uniform),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Parallax => f.write_str("parallax"),
            Variant::Uniform => f.write_str("uniform"),
        }
    }
}

/// How the shared rotation velocity becomes per-particle rotation angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationScaling {
    /// `angle = speed * velocity / divisor`, speed seeded per particle.
    PerParticle { divisor: f64 },
    /// `angle = velocity / divisor` for every particle.
    Uniform { divisor: f64 },
}

/// What lifting the last finger does to the rotation velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEndBehavior {
    /// Velocity is left alone and keeps decaying.
    Coast,
    /// Velocity is zeroed.
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub size_range: (f64, f64),
    pub velocity_limit: f64,
    pub rotation: RotationScaling,
    pub touch_end: TouchEndBehavior,
}

impl FieldConfig {
    pub fn parallax() -> Self {
        Self {
            particle_count: PARALLAX_PARTICLE_COUNT,
            size_range: PARALLAX_SIZE_RANGE,
            velocity_limit: PARALLAX_VELOCITY_LIMIT,
            rotation: RotationScaling::PerParticle {
                divisor: PARALLAX_SPEED_DIVISOR,
            },
            touch_end: TouchEndBehavior::Coast,
        }
    }

    pub fn uniform() -> Self {
        Self {
            particle_count: UNIFORM_PARTICLE_COUNT,
            size_range: UNIFORM_SIZE_RANGE,
            velocity_limit: UNIFORM_VELOCITY_LIMIT,
            rotation: RotationScaling::Uniform {
                divisor: UNIFORM_ANGLE_DIVISOR,
            },
            touch_end: TouchEndBehavior::Stop,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Parallax => Self::parallax(),
            Variant::Uniform => Self::uniform(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_names_case_insensitively() {
        assert_eq!("parallax".parse::<Variant>(), Ok(Variant::Parallax));
        assert_eq!(" Uniform ".parse::<Variant>(), Ok(Variant::Uniform));
        assert_eq!("B".parse::<Variant>(), Ok(Variant::Uniform));
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let err = "spiral".parse::<Variant>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownVariant("spiral".into()));
        assert!(err.to_string().contains("spiral"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for v in [Variant::Parallax, Variant::Uniform] {
            assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
        }
    }

    #[test]
    fn variant_tunings() {
        let a = FieldConfig::parallax();
        assert_eq!(a.particle_count, 40);
        assert_eq!(a.velocity_limit, 2.5);
        assert_eq!(a.touch_end, TouchEndBehavior::Coast);
        let b = FieldConfig::for_variant(Variant::Uniform);
        assert_eq!(b.particle_count, 100);
        assert_eq!(b.size_range, (0.5, 7.0));
        assert_eq!(b.touch_end, TouchEndBehavior::Stop);
        assert_eq!(FieldConfig::default(), a);
    }
}
