//! Latest-value device tilt.
//!
//! Orientation events arrive as an unordered push stream with no backpressure.
//! Only the most recent sample is ever read, so the host simply overwrites a
//! shared cell and captures copy whatever is there at that moment.

use std::cell::Cell;
use std::rc::Rc;

/// Device tilt in degrees. Each axis is `None` on devices without the sensor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

impl OrientationSample {
    pub const fn new(alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Front-to-back tilt, treating a missing reading as level.
    #[inline]
    pub fn beta_or_zero(&self) -> f64 {
        self.beta.unwrap_or(0.0)
    }
}

/// Single-threaded latest-value cell shared between the orientation
/// subscription and the measurer.
#[derive(Clone, Debug, Default)]
pub struct OrientationCell(Rc<Cell<OrientationSample>>);

impl OrientationCell {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&self, sample: OrientationSample) {
        self.0.set(sample);
    }

    #[inline]
    pub fn latest(&self) -> OrientationSample {
        self.0.get()
    }
}
