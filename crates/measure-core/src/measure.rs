//! Two-point distance heuristic.
//!
//! The estimate is a screen-space pixel distance scaled into "meters" by a
//! constant or by a coarse tilt factor. It is not a geometric measurement and
//! makes no claim to physical accuracy.

use crate::constants::{
    DEFAULT_FIXED_FACTOR, DEFAULT_PIXELS_PER_METER, METERS_UNIT, MIN_SURFACE_WIDTH,
    TILT_BASE_FACTOR, TILT_DEGREES_PER_UNIT,
};
use crate::orientation::OrientationSample;
use glam::DVec2;

/// A captured screen position stamped with the tilt at capture time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapturedPoint {
    pub position: DVec2,
    pub orientation: OrientationSample,
}

impl CapturedPoint {
    pub const fn new(position: DVec2, orientation: OrientationSample) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// How a pixel distance becomes an estimate in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScaleModel {
    /// `pixels / width * (2 + |Δbeta| / 90)`
    #[default]
    TiltAware,
    /// `pixels / width * factor`
    FixedFactor { factor: f64 },
    /// `pixels / pixels_per_meter`, independent of the surface size.
    PixelsPerMeter { pixels_per_meter: f64 },
}

impl ScaleModel {
    pub const fn fixed() -> Self {
        Self::FixedFactor {
            factor: DEFAULT_FIXED_FACTOR,
        }
    }

    pub const fn pixels_per_meter() -> Self {
        Self::PixelsPerMeter {
            pixels_per_meter: DEFAULT_PIXELS_PER_METER,
        }
    }

    /// Short name used by configuration sources.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TiltAware => "tilt",
            Self::FixedFactor { .. } => "fixed",
            Self::PixelsPerMeter { .. } => "ppm",
        }
    }
}

/// Published result of a two-point capture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub pixel_distance: f64,
    /// Multiplier applied to the width-normalised distance. For
    /// `PixelsPerMeter` this is `width / pixels_per_meter`.
    pub factor: f64,
    pub meters: f64,
}

impl Measurement {
    /// Meters with two decimals, e.g. `"0.04"`.
    pub fn meters_text(&self) -> String {
        format_meters(self.meters)
    }
}

#[inline]
pub fn pixel_distance(a: &CapturedPoint, b: &CapturedPoint) -> f64 {
    a.position.distance(b.position)
}

/// `2 + |Δbeta| / 90`, with a missing beta read as 0.
#[inline]
pub fn tilt_factor(a: &CapturedPoint, b: &CapturedPoint) -> f64 {
    let delta = (b.orientation.beta_or_zero() - a.orientation.beta_or_zero()).abs();
    TILT_BASE_FACTOR + delta / TILT_DEGREES_PER_UNIT
}

/// Estimate the distance between two captures on a surface `surface_width`
/// pixels wide.
pub fn estimate(
    model: ScaleModel,
    a: &CapturedPoint,
    b: &CapturedPoint,
    surface_width: f64,
) -> Measurement {
    let pixels = pixel_distance(a, b);
    let width = surface_width.max(MIN_SURFACE_WIDTH);
    let factor = match model {
        ScaleModel::TiltAware => tilt_factor(a, b),
        ScaleModel::FixedFactor { factor } => factor,
        ScaleModel::PixelsPerMeter { pixels_per_meter } => width / pixels_per_meter,
    };
    Measurement {
        pixel_distance: pixels,
        factor,
        meters: pixels / width * factor,
    }
}

#[inline]
pub fn format_meters(meters: f64) -> String {
    format!("{:.2}", meters)
}

/// Full readout with unit label, e.g. `"0.04 m"`.
#[inline]
pub fn format_readout(meters: f64) -> String {
    format!("{} {}", format_meters(meters), METERS_UNIT)
}
