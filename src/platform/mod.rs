//! Platform abstraction layer
//!
//! A `FrameHost` provides what the backdrop needs from its environment:
//! - Viewport size and device pixel ratio
//! - Frame scheduling and cancellation
//! - Resize notification (attach / detach)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::ManualHost;

use crate::surface::Viewport;

/// Identifier of a scheduled frame (a `requestAnimationFrame` id on the web)
pub type FrameHandle = i32;

pub trait FrameHost {
    /// Current viewport; implementations normalize via `Viewport::new`
    fn viewport(&self) -> Viewport;

    /// Schedule the next frame callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start delivering resize events to the backdrop
    fn listen_resize(&mut self);

    fn unlisten_resize(&mut self);
}
