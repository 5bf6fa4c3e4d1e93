// Browser-side settings for the canvas front-end.

// Element looked up first; falls back to the first <canvas> on the page
pub const CANVAS_ELEMENT_ID: &str = "particle-canvas";
pub const CANVAS_FALLBACK_SELECTOR: &str = "canvas";

// URL query key selecting the tuning, e.g. `?variant=uniform`
pub const VARIANT_QUERY_KEY: &str = "variant";

// Console logging
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Emit a frame-time summary every this many frames (debug level)
pub const STATS_INTERVAL_FRAMES: u32 = 600;
