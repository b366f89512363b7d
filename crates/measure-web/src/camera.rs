use measure_core::{CameraError, CameraRequest, CameraSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `getUserMedia` camera feeding a `<video>` element.
pub struct BrowserCamera {
    video: web::HtmlVideoElement,
}

impl BrowserCamera {
    pub fn new(video: web::HtmlVideoElement) -> Self {
        Self { video }
    }
}

impl CameraSource for BrowserCamera {
    type Stream = web::MediaStream;

    async fn open(&self, request: &CameraRequest) -> Result<web::MediaStream, CameraError> {
        let window = web::window().ok_or_else(|| CameraError::unavailable("no window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| classify(&e))?;

        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::FALSE);
        constraints.set_video(&video_constraints(request)?);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| classify(&e))?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| classify(&e))?
            .dyn_into()
            .map_err(|_| CameraError::unavailable("getUserMedia did not return a MediaStream"))?;

        self.video.set_muted(true);
        _ = self.video.set_attribute("playsinline", "");
        self.video.set_src_object(Some(&stream));
        let playing = self.video.play().map_err(|e| classify(&e))?;
        JsFuture::from(playing).await.map_err(|e| classify(&e))?;
        log::info!(
            "[camera] playing {}x{}",
            self.video.video_width(),
            self.video.video_height()
        );
        Ok(stream)
    }
}

/// `{ facingMode, width: { ideal }, height: { ideal } }`
fn video_constraints(request: &CameraRequest) -> Result<JsValue, CameraError> {
    let facing = if request.rear_facing { "environment" } else { "user" };
    let video = js_sys::Object::new();
    let set = |target: &js_sys::Object, key: &str, value: &JsValue| {
        js_sys::Reflect::set(target, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|e| classify(&e))
    };
    set(&video, "facingMode", &JsValue::from_str(facing))?;
    for (key, ideal) in [("width", request.ideal_width), ("height", request.ideal_height)] {
        let dim = js_sys::Object::new();
        set(&dim, "ideal", &JsValue::from_f64(ideal as f64))?;
        set(&video, key, &dim)?;
    }
    Ok(video.into())
}

fn classify(err: &JsValue) -> CameraError {
    match err.dyn_ref::<web::DomException>() {
        Some(ex) => CameraError::from_dom_exception(&ex.name(), &ex.message()),
        None => CameraError::unavailable(format!("{:?}", err)),
    }
}
