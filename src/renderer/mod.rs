//! Canvas 2D rendering
//!
//! `render_frame` draws a field through the `Canvas2d` trait; `WebCanvas` is
//! the browser implementation.

pub mod canvas;
pub mod frame;
pub mod recording;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use canvas::{BACKDROP_LAYER_ATTRIBUTES, BACKDROP_LAYER_STYLE, Canvas2d, RadialWash};
pub use frame::{FrameStats, ambient_wash, link_alpha, pulse_radius, render_frame};
pub use recording::{DrawCommand, RecordingCanvas};
#[cfg(target_arch = "wasm32")]
pub use web::WebCanvas;
