use crate::constants::{
    CAPTURE_BUTTON_ID, INSTRUCTIONS_ID, READOUT_ID, RESET_BUTTON_ID, START_BUTTON_ID,
};
use crate::dom;
use glam::DVec2;
use measure_core::{
    Measurer, OverlaySurface, SurfaceSize, CROSSHAIR_COLOR, LINE_COLOR, MARKER_COLOR,
};
use web_sys as web;

/// Push session state into the instruction text, readout and buttons.
pub fn sync_controls(document: &web::Document, measurer: &Measurer) {
    dom::set_text(document, INSTRUCTIONS_ID, measurer.instruction());
    dom::set_text(document, READOUT_ID, &format!("Distance: {}", measurer.readout()));
    dom::set_disabled(document, START_BUTTON_ID, !measurer.start_enabled());
    dom::set_disabled(document, CAPTURE_BUTTON_ID, !measurer.capture_enabled());
    dom::set_disabled(document, RESET_BUTTON_ID, !measurer.reset_enabled());
}

/// Canvas2D implementation of the overlay surface.
pub struct CanvasOverlay {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasOverlay {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl OverlaySurface for CanvasOverlay {
    fn clear(&mut self, size: SurfaceSize) {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn crosshair(&mut self, center: DVec2, half_length: f64, width: f64) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(CROSSHAIR_COLOR);
        ctx.set_line_width(width);
        ctx.begin_path();
        ctx.move_to(center.x - half_length, center.y);
        ctx.line_to(center.x + half_length, center.y);
        ctx.move_to(center.x, center.y - half_length);
        ctx.line_to(center.x, center.y + half_length);
        ctx.stroke();
    }

    fn marker(&mut self, at: DVec2, radius: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(MARKER_COLOR);
        ctx.begin_path();
        if ctx
            .arc(at.x, at.y, radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        ctx.fill();
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(LINE_COLOR);
        ctx.set_line_width(width);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }
}
