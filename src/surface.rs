//! Surface sizing against the viewport and device pixel ratio
//!
//! The backing buffer is always `logical * dpr` device pixels and the canvas
//! transform scales by `dpr`, so all drawing happens in logical pixels.

use glam::{UVec2, Vec2};

use crate::renderer::Canvas2d;

/// Viewport dimensions as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical (CSS) px
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Build a viewport, normalizing bad host values.
    ///
    /// Negative or non-finite sizes become 0; an unreported or unusable
    /// device pixel ratio becomes 1.
    pub fn new(width: f32, height: f32, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: non_negative(width),
            height: non_negative(height),
            device_pixel_ratio: dpr,
        }
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Current logical size and pixel density of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    width: f32,
    height: f32,
    device_pixel_ratio: f64,
}

impl SurfaceState {
    pub fn from_viewport(viewport: Viewport) -> Self {
        let viewport = Viewport::new(viewport.width, viewport.height, viewport.device_pixel_ratio);
        Self {
            width: viewport.width,
            height: viewport.height,
            device_pixel_ratio: viewport.device_pixel_ratio,
        }
    }

    /// Size `canvas` for `viewport` and install the DPR transform
    pub fn initialize<C: Canvas2d + ?Sized>(viewport: Viewport, canvas: &mut C) -> Self {
        let state = Self::from_viewport(viewport);
        state.apply(canvas);
        state
    }

    /// Re-read the viewport and repeat the sizing step.
    ///
    /// The canvas is resized on every call (which also resets its transform),
    /// even when nothing changed. Returns whether the state changed.
    pub fn on_resize<C: Canvas2d + ?Sized>(&mut self, viewport: Viewport, canvas: &mut C) -> bool {
        let next = Self::from_viewport(viewport);
        let changed = next != *self;
        *self = next;
        self.apply(canvas);
        changed
    }

    pub fn apply<C: Canvas2d + ?Sized>(&self, canvas: &mut C) {
        canvas.resize_backing(self.backing_size(), self.logical_size());
        canvas.set_scale(self.device_pixel_ratio);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing buffer size in device px (fractional results truncate, as
    /// assigning to `canvas.width` does)
    pub fn backing_size(&self) -> UVec2 {
        UVec2::new(
            (self.width as f64 * self.device_pixel_ratio) as u32,
            (self.height as f64 * self.device_pixel_ratio) as u32,
        )
    }

    /// Zero-area surfaces get no points and a blank render
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
