//! Error types for the measurement core.

use thiserror::Error;

/// Why a camera stream could not be opened.
///
/// Both variants end the current start attempt. Nothing retries on its own;
/// the user may press Start again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    /// The user or the platform refused camera access.
    #[error("camera permission denied")]
    PermissionDenied,

    /// No camera exists, or the one present could not be opened.
    #[error("camera unavailable: {reason}")]
    Unavailable {
        /// Platform-provided detail, for logs only.
        reason: String,
    },
}

impl CameraError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Classify a DOM exception name as reported by `getUserMedia`.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => {
                Self::PermissionDenied
            }
            _ if message.is_empty() => Self::unavailable(name),
            _ => Self::unavailable(format!("{name}: {message}")),
        }
    }

    /// Instruction text shown in place of the normal prompt.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Camera access was denied. Allow camera access and press Start to try again."
            }
            Self::Unavailable { .. } => {
                "No usable camera was found. Connect a camera and press Start to try again."
            }
        }
    }
}

/// Errors raised while parsing measurer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown scale variant: {0} (expected tilt, fixed or ppm)")]
    UnknownVariant(String),

    #[error("unknown capture mode: {0} (expected reticle or tap)")]
    UnknownCaptureMode(String),

    #[error("{name} must be a positive number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}
