//! Command-recording canvas for tests and headless runs

use glam::{UVec2, Vec2};

use super::canvas::{Canvas2d, RadialWash};
use crate::config::Rgba;

/// One captured drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ResizeBacking { backing: UVec2, logical: Vec2 },
    SetScale(f64),
    Clear(Vec2),
    Wash(RadialWash),
    Line { from: Vec2, to: Vec2, color: Rgba, width: f32 },
    Disc { center: Vec2, radius: f32, color: Rgba },
}

impl DrawCommand {
    /// Whether this call paints pixels (as opposed to sizing the surface)
    pub fn is_draw(&self) -> bool {
        !matches!(self, DrawCommand::ResizeBacking { .. } | DrawCommand::SetScale(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn draw_calls(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
    }

    /// Most recent backing resize, if any
    pub fn last_backing(&self) -> Option<(UVec2, Vec2)> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::ResizeBacking { backing, logical } => Some((*backing, *logical)),
            _ => None,
        })
    }
}

impl Canvas2d for RecordingCanvas {
    fn resize_backing(&mut self, backing: UVec2, logical: Vec2) {
        self.commands.push(DrawCommand::ResizeBacking { backing, logical });
    }

    fn set_scale(&mut self, scale: f64) {
        self.commands.push(DrawCommand::SetScale(scale));
    }

    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear(size));
    }

    fn fill_radial_wash(&mut self, wash: &RadialWash, _size: Vec2) {
        self.commands.push(DrawCommand::Wash(wash.clone()));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Disc { center, radius, color });
    }
}
