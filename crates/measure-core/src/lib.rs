//! Platform-free core of the two-point camera measurement widget.
//!
//! Everything here is plain Rust: hosts (the wasm front-end, the native replay
//! harness) own a [`Measurer`], feed it camera results, orientation samples
//! and resize events, and draw its overlay through [`OverlaySurface`].

pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod measure;
pub mod orientation;
pub mod overlay;
pub mod session;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use measure::*;
pub use orientation::*;
pub use overlay::*;
pub use session::*;
