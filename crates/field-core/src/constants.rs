// Tuning constants shared by every front-end.

// Rotation velocity decay: divided by this once per frame
pub const VELOCITY_DECAY_DIVISOR: f64 = 1.0005;

// Depth remap: [0, H / DEPTH_RANGE_DIVISOR] is the nominal depth band
pub const DEPTH_RANGE_DIVISOR: f64 = 3.0;

// Size shrink factor at the far edge of the depth band (squared when applied)
pub const SIZE_DEPTH_NEAR: f64 = 1.0;
pub const SIZE_DEPTH_FAR: f64 = 1.2;

// HSL lightness / saturation (percent) and stroke width, near -> far
pub const BRIGHTNESS_NEAR: f64 = 55.0;
pub const BRIGHTNESS_FAR: f64 = 45.0;
pub const SATURATION_NEAR: f64 = 70.0;
pub const SATURATION_FAR: f64 = 30.0;
pub const LINE_WIDTH_NEAR: f64 = 2.0;
pub const LINE_WIDTH_FAR: f64 = 0.3;

pub const HUE_MAX: f64 = 360.0;

// Parallax variant: few large particles, rotation scaled by per-particle speed
pub const PARALLAX_PARTICLE_COUNT: usize = 40;
pub const PARALLAX_SIZE_RANGE: (f64, f64) = (2.0, 15.0);
pub const PARALLAX_VELOCITY_LIMIT: f64 = 2.5;
pub const PARALLAX_SPEED_DIVISOR: f64 = 800_000.0;

// Uniform variant: more, smaller particles sharing one rotation angle
pub const UNIFORM_PARTICLE_COUNT: usize = 100;
pub const UNIFORM_SIZE_RANGE: (f64, f64) = (0.5, 7.0);
pub const UNIFORM_VELOCITY_LIMIT: f64 = 10.0;
pub const UNIFORM_ANGLE_DIVISOR: f64 = 500.0;
