//! Per-frame overlay drawing.
//!
//! Hosts implement [`OverlaySurface`] over their real drawing API; the
//! [`DrawList`] recorder backs tests and the native harness.

use crate::config::OverlayStyle;
use crate::measure::CapturedPoint;
use glam::DVec2;

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reticle location.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

pub trait OverlaySurface {
    fn clear(&mut self, size: SurfaceSize);
    fn crosshair(&mut self, center: DVec2, half_length: f64, width: f64);
    fn marker(&mut self, at: DVec2, radius: f64);
    fn line(&mut self, from: DVec2, to: DVec2, width: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(SurfaceSize),
    Crosshair {
        center: DVec2,
        half_length: f64,
        width: f64,
    },
    Marker { at: DVec2, radius: f64 },
    Line { from: DVec2, to: DVec2, width: f64 },
}

/// Records draw calls instead of rasterising them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Marker { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl OverlaySurface for DrawList {
    fn clear(&mut self, size: SurfaceSize) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(size));
    }

    fn crosshair(&mut self, center: DVec2, half_length: f64, width: f64) {
        self.commands.push(DrawCommand::Crosshair {
            center,
            half_length,
            width,
        });
    }

    fn marker(&mut self, at: DVec2, radius: f64) {
        self.commands.push(DrawCommand::Marker { at, radius });
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64) {
        self.commands.push(DrawCommand::Line { from, to, width });
    }
}

/// Draw one frame: clear, crosshair at the centre, a marker per point and a
/// connecting line once both points exist.
pub fn draw_frame(
    surface: &mut impl OverlaySurface,
    size: SurfaceSize,
    style: &OverlayStyle,
    points: &[CapturedPoint],
) {
    surface.clear(size);
    surface.crosshair(
        size.center(),
        style.crosshair_half_length,
        style.line_width,
    );
    for p in points {
        surface.marker(p.position, style.marker_radius);
    }
    if let [a, b] = points {
        surface.line(a.position, b.position, style.line_width);
    }
}
