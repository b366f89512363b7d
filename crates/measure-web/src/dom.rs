use crate::constants::{QUERY_CAPTURE, QUERY_VARIANT};
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click handler", element_id);
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(btn) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(disabled);
    }
}

/// Resize the canvas backing store to the viewport. Returns the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Option<(u32, u32)> {
    let w = web::window()?;
    let inner_w = w.inner_width().ok()?.as_f64()?;
    let inner_h = w.inner_height().ok()?.as_f64()?;
    let (w_px, h_px) = input::viewport_backing_size(inner_w, inner_h);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Some((w_px, h_px))
}

/// `(variant, capture)` names from the page URL, if present.
pub fn query_config_names() -> (Option<String>, Option<String>) {
    let params = web::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web::UrlSearchParams::new_with_str(&search).ok());
    match params {
        Some(p) => (p.get(QUERY_VARIANT), p.get(QUERY_CAPTURE)),
        None => (None, None),
    }
}
