//! Measurer configuration and the short names front-ends parse it from.

use crate::constants::{CROSSHAIR_HALF_LENGTH, LINE_WIDTH, MARKER_RADIUS};
use crate::error::ConfigError;
use crate::measure::ScaleModel;
use std::str::FromStr;

/// Where a capture lands on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureMode {
    /// Capture button records the crosshair at the surface centre.
    #[default]
    Reticle,
    /// Tapping the surface records the tapped position.
    Tap,
}

impl CaptureMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reticle => "reticle",
            Self::Tap => "tap",
        }
    }
}

impl FromStr for CaptureMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reticle" | "center" | "centre" => Ok(Self::Reticle),
            "tap" | "click" => Ok(Self::Tap),
            other => Err(ConfigError::UnknownCaptureMode(other.to_string())),
        }
    }
}

impl FromStr for ScaleModel {
    type Err = ConfigError;

    /// Accepts `tilt`, `fixed`, `fixed:<factor>`, `ppm` and `ppm:<pixels>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let (name, arg) = match s.split_once(':') {
            Some((n, a)) => (n, Some(a)),
            None => (s.as_str(), None),
        };
        match (name, arg) {
            ("tilt", None) => Ok(Self::TiltAware),
            ("fixed", None) => Ok(Self::fixed()),
            ("fixed", Some(a)) => Ok(Self::FixedFactor {
                factor: parse_positive("factor", a)?,
            }),
            ("ppm", None) => Ok(Self::pixels_per_meter()),
            ("ppm", Some(a)) => Ok(Self::PixelsPerMeter {
                pixels_per_meter: parse_positive("pixels_per_meter", a)?,
            }),
            _ => Err(ConfigError::UnknownVariant(s.clone())),
        }
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(v) => Err(ConfigError::NonPositive { name, value: v }),
        Err(_) => Err(ConfigError::NonPositive {
            name,
            value: f64::NAN,
        }),
    }
}

/// Overlay sizing in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub crosshair_half_length: f64,
    pub marker_radius: f64,
    pub line_width: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            crosshair_half_length: CROSSHAIR_HALF_LENGTH,
            marker_radius: MARKER_RADIUS,
            line_width: LINE_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasurerConfig {
    pub scale: ScaleModel,
    pub capture: CaptureMode,
    pub overlay: OverlayStyle,
}

impl MeasurerConfig {
    /// Build a config from optional `variant` / `capture` names, falling back
    /// to defaults for whatever is absent.
    pub fn from_names(variant: Option<&str>, capture: Option<&str>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(v) = variant {
            cfg.scale = v.parse()?;
        }
        if let Some(c) = capture {
            cfg.capture = c.parse()?;
        }
        Ok(cfg)
    }
}
