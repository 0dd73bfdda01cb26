//! `Canvas2d` over a browser `<canvas>` element

use std::f64::consts::TAU;

use glam::{UVec2, Vec2};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::canvas::{BACKDROP_LAYER_ATTRIBUTES, BACKDROP_LAYER_STYLE, Canvas2d, RadialWash};
use crate::config::Rgba;
use crate::error::MountError;

pub struct WebCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| MountError::ContextUnavailable)?
            .ok_or(MountError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    /// Pin the canvas as a fixed, non-interactive layer behind the page
    pub fn make_backdrop_layer(&self) {
        let style = self.canvas.style();
        for (property, value) in BACKDROP_LAYER_STYLE {
            if let Err(e) = style.set_property(property, value) {
                log::warn!("failed to set {}: {:?}", property, e);
            }
        }
        for (name, value) in BACKDROP_LAYER_ATTRIBUTES {
            if let Err(e) = self.canvas.set_attribute(name, value) {
                log::warn!("failed to set {}: {:?}", name, e);
            }
        }
    }
}

impl Canvas2d for WebCanvas {
    fn resize_backing(&mut self, backing: UVec2, logical: Vec2) {
        self.canvas.set_width(backing.x);
        self.canvas.set_height(backing.y);
        let style = self.canvas.style();
        for (property, px) in [("width", logical.x), ("height", logical.y)] {
            if let Err(e) = style.set_property(property, &format!("{}px", px)) {
                log::warn!("failed to set canvas {}: {:?}", property, e);
            }
        }
    }

    fn set_scale(&mut self, scale: f64) {
        self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0).ok();
    }

    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_radial_wash(&mut self, wash: &RadialWash, size: Vec2) {
        let gradient = match self.ctx.create_radial_gradient(
            wash.center.x as f64,
            wash.center.y as f64,
            wash.inner_radius as f64,
            wash.center.x as f64,
            wash.center.y as f64,
            wash.outer_radius as f64,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("radial gradient rejected: {:?}", e);
                return;
            }
        };
        let _ = gradient.add_color_stop(0.0, &wash.inner.css());
        let _ = gradient.add_color_stop(1.0, &wash.outer.css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}
