//! Immediate-mode 2D drawing surface
//!
//! The renderer only talks to this trait. The browser implementation wraps a
//! `CanvasRenderingContext2d`; `RecordingCanvas` captures commands for tests
//! and headless runs. All coordinates are logical px once `set_scale` has been
//! applied.

use glam::{UVec2, Vec2};

use crate::config::Rgba;

/// Inline styles that make the canvas a full-viewport layer under the page
/// that never receives pointer events
pub const BACKDROP_LAYER_STYLE: [(&str, &str); 4] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("z-index", "0"),
    ("pointer-events", "none"),
];

/// The canvas is decorative and hidden from assistive technology
pub const BACKDROP_LAYER_ATTRIBUTES: [(&str, &str); 1] = [("aria-hidden", "true")];

/// A two-stop radial gradient filling the whole surface
#[derive(Debug, Clone, PartialEq)]
pub struct RadialWash {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub inner: Rgba,
    pub outer: Rgba,
}

pub trait Canvas2d {
    /// Resize the backing buffer (device px) and its display size (logical px).
    ///
    /// Resizing resets the transform, so callers follow up with `set_scale`.
    fn resize_backing(&mut self, backing: UVec2, logical: Vec2);

    /// Replace the transform with a uniform scale
    fn set_scale(&mut self, scale: f64);

    /// Clear `[0, size]` to transparent
    fn clear(&mut self, size: Vec2);

    /// Fill `[0, size]` with a radial gradient
    fn fill_radial_wash(&mut self, wash: &RadialWash, size: Vec2);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_layer_is_fixed_and_inert() {
        let style: std::collections::HashMap<_, _> = BACKDROP_LAYER_STYLE.into_iter().collect();
        assert_eq!(style["position"], "fixed");
        assert_eq!(style["inset"], "0");
        assert_eq!(style["z-index"], "0");
        assert_eq!(style["pointer-events"], "none");
        assert!(BACKDROP_LAYER_ATTRIBUTES.contains(&("aria-hidden", "true")));
    }
}
