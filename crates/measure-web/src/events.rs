use crate::camera::BrowserCamera;
use crate::constants::{CAPTURE_BUTTON_ID, RESET_BUTTON_ID, RESIZE_EVENTS, START_BUTTON_ID};
use crate::dom;
use crate::frame::{self, FrameContext};
use crate::input;
use crate::overlay;
use measure_core::{CaptureOutcome, Measurer, SurfaceSize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub measurer: Rc<RefCell<Measurer>>,
    pub camera: Rc<BrowserCamera>,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    pub loop_running: Rc<Cell<bool>>,
}

impl Wiring {
    fn sync(&self) {
        overlay::sync_controls(&self.document, &self.measurer.borrow());
    }
}

pub fn wire_all(w: Wiring) {
    wire_start(&w);
    wire_capture(&w);
    wire_reset(&w);
    wire_canvas_tap(&w);
    wire_resize(&w);
    w.sync();
}

fn wire_start(w: &Wiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, START_BUTTON_ID, move || {
        let w = w.clone();
        spawn_local(async move {
            // Disable Start while the permission prompt is up.
            dom::set_disabled(&w.document, START_BUTTON_ID, true);
            match measure_core::start(&w.measurer, w.camera.as_ref()).await {
                Ok(Some(_stream)) => {
                    frame::start_loop(w.frame_ctx.clone(), w.loop_running.clone());
                }
                Ok(None) => {}
                Err(e) => log::error!("[camera] start failed: {}", e),
            }
            w.sync();
        });
    });
}

fn wire_capture(w: &Wiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, CAPTURE_BUTTON_ID, move || {
        let outcome = w.measurer.borrow_mut().capture_point();
        log_outcome(&outcome);
        w.sync();
    });
}

fn wire_reset(w: &Wiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, RESET_BUTTON_ID, move || {
        w.measurer.borrow_mut().reset();
        w.sync();
    });
}

fn wire_canvas_tap(w: &Wiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let outcome = w.measurer.borrow_mut().on_tap(pos);
        if outcome != CaptureOutcome::Ignored {
            ev.prevent_default();
            log_outcome(&outcome);
            w.sync();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some((width, height)) = dom::sync_canvas_to_viewport(&w.canvas) {
            w.measurer
                .borrow_mut()
                .on_resize(SurfaceSize::new(width as f64, height as f64));
        }
    }) as Box<dyn FnMut()>);
    for event in RESIZE_EVENTS {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn log_outcome(outcome: &CaptureOutcome) {
    match outcome {
        CaptureOutcome::Ignored => log::debug!("[click] capture ignored"),
        CaptureOutcome::FirstPoint(p) => log::info!(
            "[click] first point ({:.0},{:.0})",
            p.position.x,
            p.position.y
        ),
        CaptureOutcome::Measured(m) => log::info!("[click] distance {:.2} m", m.meters),
    }
}
