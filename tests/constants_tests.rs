// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the browser constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use field_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_fades_run_near_to_far() {
    assert!(BRIGHTNESS_NEAR > BRIGHTNESS_FAR);
    assert!(SATURATION_NEAR > SATURATION_FAR);
    assert!(LINE_WIDTH_NEAR > LINE_WIDTH_FAR);
    assert!(SIZE_DEPTH_FAR > SIZE_DEPTH_NEAR);
    assert!(DEPTH_RANGE_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decay_slows_but_never_stops() {
    assert!(VELOCITY_DECAY_DIVISOR > 1.0);
    assert!(VELOCITY_DECAY_DIVISOR < 1.01);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn variant_ranges_are_well_formed() {
    assert!(PARALLAX_SIZE_RANGE.0 < PARALLAX_SIZE_RANGE.1);
    assert!(UNIFORM_SIZE_RANGE.0 < UNIFORM_SIZE_RANGE.1);
    assert!(PARALLAX_VELOCITY_LIMIT > 0.0 && UNIFORM_VELOCITY_LIMIT > 0.0);
    assert!(PARALLAX_PARTICLE_COUNT < UNIFORM_PARTICLE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn browser_settings_are_usable() {
    assert!(!CANVAS_ELEMENT_ID.is_empty());
    assert_eq!(CANVAS_FALLBACK_SELECTOR, "canvas");
    assert_eq!(VARIANT_QUERY_KEY, "variant");
    assert!(STATS_INTERVAL_FRAMES > 0);
}
