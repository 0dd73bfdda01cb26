//! Manually pumped host for native runs and tests

use super::{FrameHandle, FrameHost};
use crate::animation::Backdrop;
use crate::renderer::Canvas2d;
use crate::surface::Viewport;

/// A host whose frames only fire when `pump` is called.
///
/// Holds at most one pending frame, like a browser tab running a single
/// `requestAnimationFrame` chain.
#[derive(Debug, Clone)]
pub struct ManualHost {
    viewport: Viewport,
    next_handle: FrameHandle,
    pending: Option<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    listening: bool,
    requests: usize,
}

impl ManualHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            next_handle: 0,
            pending: None,
            cancelled: Vec::new(),
            listening: false,
            requests: 0,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Total frames requested so far
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Fire up to `frames` pending frames into `backdrop`; returns how many ran.
    ///
    /// Stops early once nothing is scheduled.
    pub fn pump<C: Canvas2d>(&mut self, backdrop: &mut Backdrop<C>, frames: usize) -> usize {
        let mut fired = 0;
        for _ in 0..frames {
            if self.pending.take().is_none() {
                break;
            }
            backdrop.on_frame(self);
            fired += 1;
        }
        fired
    }
}

impl FrameHost for ManualHost {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.viewport.width,
            self.viewport.height,
            self.viewport.device_pixel_ratio,
        )
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_handle += 1;
        self.requests += 1;
        self.pending = Some(self.next_handle);
        self.pending
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }

    fn listen_resize(&mut self) {
        self.listening = true;
    }

    fn unlisten_resize(&mut self) {
        self.listening = false;
    }
}
