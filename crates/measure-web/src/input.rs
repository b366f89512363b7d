use glam::DVec2;
use web_sys as web;

/// Map a client-space (CSS px) position into canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(
    client: DVec2,
    rect_origin: DVec2,
    rect_size: DVec2,
    backing_size: DVec2,
) -> DVec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return backing_size * 0.5;
    }
    (client - rect_origin) / rect_size * backing_size
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        DVec2::new(canvas.width() as f64, canvas.height() as f64),
    )
}

/// Canvas backing size for a viewport, never below one pixel per side.
#[inline]
pub fn viewport_backing_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    let w = if inner_width.is_finite() { inner_width } else { 0.0 };
    let h = if inner_height.is_finite() { inner_height } else { 0.0 };
    ((w as u32).max(1), (h as u32).max(1))
}
