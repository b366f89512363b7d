// Shared measurement and overlay tuning constants used by every front-end.

// Tilt-aware scale heuristic: factor = TILT_BASE_FACTOR + |Δbeta| / TILT_DEGREES_PER_UNIT
pub const TILT_BASE_FACTOR: f64 = 2.0;
pub const TILT_DEGREES_PER_UNIT: f64 = 90.0;

// Simplified variant: constant factor applied to width-normalised pixel distance
pub const DEFAULT_FIXED_FACTOR: f64 = 2.0;

// Click demo variant: screen pixels per meter
pub const DEFAULT_PIXELS_PER_METER: f64 = 200.0;

// Smallest surface width used as a divisor (pixels)
pub const MIN_SURFACE_WIDTH: f64 = 1.0;

// Points held by a session before the measurement is published
pub const MAX_POINTS: usize = 2;

// Overlay sizing (pixels)
pub const CROSSHAIR_HALF_LENGTH: f64 = 20.0; // arm length from centre
pub const MARKER_RADIUS: f64 = 6.0;
pub const LINE_WIDTH: f64 = 2.0;

// Overlay colours (CSS syntax, consumed by Canvas2D hosts)
pub const CROSSHAIR_COLOR: &str = "rgba(255, 255, 255, 0.9)";
pub const MARKER_COLOR: &str = "#ff3b30";
pub const LINE_COLOR: &str = "#ffcc00";

// Readout
pub const METERS_UNIT: &str = "m";
