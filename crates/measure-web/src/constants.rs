// DOM element ids the host page must provide
pub const VIDEO_ID: &str = "camera-video";
pub const CANVAS_ID: &str = "overlay-canvas";
pub const START_BUTTON_ID: &str = "start-btn";
pub const CAPTURE_BUTTON_ID: &str = "capture-btn";
pub const RESET_BUTTON_ID: &str = "reset-btn";
pub const INSTRUCTIONS_ID: &str = "instructions";
pub const READOUT_ID: &str = "measurement";

// URL query keys read at startup
pub const QUERY_VARIANT: &str = "variant";
pub const QUERY_CAPTURE: &str = "capture";

// Viewport events that resize the overlay canvas
pub const RESIZE_EVENTS: [&str; 2] = ["resize", "orientationchange"];
