use measure_core::{OrientationCell, OrientationSample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Subscribe `cell` to `deviceorientation`. Returns false when the browser
/// has no orientation support; tilt then stays at its default of zero.
pub fn subscribe(cell: OrientationCell) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let supported = js_sys::Reflect::has(&window, &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(false);
    if !supported {
        log::info!("[orientation] no DeviceOrientationEvent; tilt factor stays constant");
        return false;
    }

    let mut logged_first = false;
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        let sample = OrientationSample::new(ev.alpha(), ev.beta(), ev.gamma());
        if !logged_first {
            log::info!("[orientation] first sample {:?}", sample);
            logged_first = true;
        }
        cell.set(sample);
    }) as Box<dyn FnMut(_)>);
    let attached = window
        .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref())
        .is_ok();
    closure.forget();
    attached
}
