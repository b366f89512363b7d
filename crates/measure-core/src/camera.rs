//! Camera acquisition seam.
//!
//! Acquisition is the only operation that suspends. [`start`] never holds the
//! measurer borrow across the await.

use crate::error::CameraError;
use crate::session::{CameraRequest, Measurer};
use std::cell::RefCell;

#[allow(async_fn_in_trait)]
pub trait CameraSource {
    /// Handle keeping the stream alive.
    type Stream;

    async fn open(&self, request: &CameraRequest) -> Result<Self::Stream, CameraError>;
}

/// Run one start attempt. `Ok(None)` means the measurer refused to start
/// (already active or another attempt is pending).
pub async fn start<C: CameraSource>(
    measurer: &RefCell<Measurer>,
    camera: &C,
) -> Result<Option<C::Stream>, CameraError> {
    let Some(request) = measurer.borrow_mut().request_start() else {
        return Ok(None);
    };
    log::info!(
        "[camera] requesting {} camera {}x{}",
        if request.rear_facing { "rear" } else { "front" },
        request.ideal_width,
        request.ideal_height
    );
    match camera.open(&request).await {
        Ok(stream) => {
            measurer.borrow_mut().camera_opened();
            Ok(Some(stream))
        }
        Err(err) => {
            measurer.borrow_mut().camera_failed(err.clone());
            Err(err)
        }
    }
}
