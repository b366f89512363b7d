#![cfg(target_arch = "wasm32")]
use measure_core::{Measurer, MeasurerConfig, OrientationCell, SurfaceSize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod orientation;
mod overlay;

use constants::{CANVAS_ID, VIDEO_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("measure-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn load_config() -> MeasurerConfig {
    let (variant, capture) = dom::query_config_names();
    match MeasurerConfig::from_names(variant.as_deref(), capture.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            MeasurerConfig::default()
        }
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let video: web::HtmlVideoElement = dom::element_by_id(&document, VIDEO_ID)?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (width, height) = dom::sync_canvas_to_viewport(&canvas).unwrap_or((1, 1));
    let orientation_cell = OrientationCell::new();
    orientation::subscribe(orientation_cell.clone());

    let measurer = Rc::new(RefCell::new(Measurer::new(
        load_config(),
        orientation_cell,
        SurfaceSize::new(width as f64, height as f64),
    )));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        measurer: measurer.clone(),
        overlay: overlay::CanvasOverlay::new(ctx),
        frames: 0,
    }));

    events::wire_all(events::Wiring {
        document,
        canvas,
        measurer,
        camera: Rc::new(camera::BrowserCamera::new(video)),
        frame_ctx,
        loop_running: Rc::new(Cell::new(false)),
    });
    Ok(())
}
