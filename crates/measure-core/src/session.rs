//! The point-capture measurer.
//!
//! One explicit session object owned by the host. It never reaches for a
//! camera, clock or DOM itself: the host injects the orientation cell, feeds
//! camera results and resize events in, and calls [`Measurer::render_tick`]
//! from its own frame scheduler while [`Measurer::is_active`] holds.

use crate::config::{CaptureMode, MeasurerConfig};
use crate::constants::MAX_POINTS;
use crate::error::CameraError;
use crate::measure::{estimate, format_meters, format_readout, CapturedPoint, Measurement};
use crate::orientation::{OrientationCell, OrientationSample};
use crate::overlay::{draw_frame, OverlaySurface, SurfaceSize};
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingFirstPoint,
    AwaitingSecondPoint,
    Measured,
}

impl SessionState {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Idle => "Press Start to open the camera.",
            Self::AwaitingFirstPoint => "Aim the crosshair at the first point and press Capture.",
            Self::AwaitingSecondPoint => "Now aim at the second point and press Capture.",
            Self::Measured => "Measurement complete. Press Reset to start over.",
        }
    }
}

/// Which camera stream the host should open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRequest {
    pub rear_facing: bool,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CaptureOutcome {
    /// Inactive session or two points already held.
    Ignored,
    FirstPoint(CapturedPoint),
    Measured(Measurement),
}

#[derive(Debug)]
pub struct Measurer {
    config: MeasurerConfig,
    orientation: OrientationCell,
    surface: SurfaceSize,
    points: SmallVec<[CapturedPoint; MAX_POINTS]>,
    active: bool,
    starting: bool,
    measurement: Option<Measurement>,
    camera_error: Option<CameraError>,
}

impl Measurer {
    pub fn new(config: MeasurerConfig, orientation: OrientationCell, surface: SurfaceSize) -> Self {
        log::info!(
            "[session] created variant={} capture={} surface={}x{}",
            config.scale.name(),
            config.capture.name(),
            surface.width,
            surface.height
        );
        Self {
            config,
            orientation,
            surface,
            points: SmallVec::new(),
            active: false,
            starting: false,
            measurement: None,
            camera_error: None,
        }
    }

    // ---------------- Start ----------------

    /// Begin a start attempt. Returns the stream the host should open, or
    /// `None` when the session is already active or an attempt is pending.
    pub fn request_start(&mut self) -> Option<CameraRequest> {
        if self.active || self.starting {
            log::warn!("[session] start ignored; already active or starting");
            return None;
        }
        self.starting = true;
        Some(CameraRequest {
            rear_facing: true,
            ideal_width: self.surface.width.max(1.0) as u32,
            ideal_height: self.surface.height.max(1.0) as u32,
        })
    }

    pub fn camera_opened(&mut self) {
        self.starting = false;
        self.active = true;
        self.camera_error = None;
        self.points.clear();
        self.measurement = None;
        log::info!("[session] camera opened; awaiting first point");
    }

    pub fn camera_failed(&mut self, err: CameraError) {
        log::warn!("[session] camera failed: {}", err);
        self.starting = false;
        self.active = false;
        self.camera_error = Some(err);
    }

    // ---------------- Capture / reset ----------------

    /// Capture at the reticle (surface centre).
    pub fn capture_point(&mut self) -> CaptureOutcome {
        let center = self.surface.center();
        self.capture_at(center)
    }

    /// Capture at an arbitrary surface position.
    pub fn capture_at(&mut self, position: DVec2) -> CaptureOutcome {
        if !self.capture_enabled() {
            log::debug!(
                "[session] capture ignored (active={}, points={})",
                self.active,
                self.points.len()
            );
            return CaptureOutcome::Ignored;
        }
        let point = CapturedPoint::new(position, self.orientation.latest());
        self.points.push(point);
        log::info!(
            "[session] point {} at ({:.1},{:.1}) beta={:?}",
            self.points.len(),
            position.x,
            position.y,
            point.orientation.beta
        );
        match self.points.as_slice() {
            [a, b] => {
                let m = estimate(self.config.scale, a, b, self.surface.width);
                log::info!(
                    "[session] measured px={:.1} factor={:.3} meters={:.2}",
                    m.pixel_distance,
                    m.factor,
                    m.meters
                );
                self.measurement = Some(m);
                CaptureOutcome::Measured(m)
            }
            _ => CaptureOutcome::FirstPoint(point),
        }
    }

    /// Route a surface tap according to the configured capture mode.
    pub fn on_tap(&mut self, position: DVec2) -> CaptureOutcome {
        match self.config.capture {
            CaptureMode::Tap => self.capture_at(position),
            CaptureMode::Reticle => CaptureOutcome::Ignored,
        }
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.measurement = None;
        log::info!("[session] reset (active={})", self.active);
    }

    // ---------------- Environment ----------------

    pub fn on_resize(&mut self, size: SurfaceSize) {
        log::debug!("[session] surface {}x{}", size.width, size.height);
        self.surface = size;
    }

    pub fn on_orientation_sample(&self, alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) {
        self.orientation.set(OrientationSample::new(alpha, beta, gamma));
    }

    /// Draw one overlay frame. Hosts call this only while [`Self::is_active`].
    pub fn render_tick(&self, surface: &mut impl OverlaySurface) {
        draw_frame(surface, self.surface, &self.config.overlay, &self.points);
    }

    // ---------------- Queries ----------------

    pub fn state(&self) -> SessionState {
        if !self.active {
            return SessionState::Idle;
        }
        match self.points.len() {
            0 => SessionState::AwaitingFirstPoint,
            1 => SessionState::AwaitingSecondPoint,
            _ => SessionState::Measured,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn points(&self) -> &[CapturedPoint] {
        &self.points
    }

    pub fn measurement(&self) -> Option<Measurement> {
        self.measurement
    }

    pub fn camera_error(&self) -> Option<&CameraError> {
        self.camera_error.as_ref()
    }

    pub fn start_enabled(&self) -> bool {
        !self.active && !self.starting
    }

    pub fn capture_enabled(&self) -> bool {
        self.active && self.points.len() < MAX_POINTS
    }

    pub fn reset_enabled(&self) -> bool {
        self.active
    }

    /// Instruction text; a camera failure replaces the idle prompt.
    pub fn instruction(&self) -> &'static str {
        match (&self.camera_error, self.state()) {
            (Some(err), SessionState::Idle) => err.user_message(),
            (_, state) => state.prompt(),
        }
    }

    /// Meters with two decimals; `"0.00"` until measured.
    pub fn distance_text(&self) -> String {
        format_meters(self.measurement.map_or(0.0, |m| m.meters))
    }

    pub fn readout(&self) -> String {
        format_readout(self.measurement.map_or(0.0, |m| m.meters))
    }
}
