//! A single drifting point and its boundary policy

use glam::Vec2;

/// Render colour class of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Primary,
    Accent,
}

/// One simulated particle, in logical (DPR-independent) coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius before pulsing is applied
    pub base_radius: f32,
    /// Pulse phase offset in [0, 2π)
    pub phase: f32,
    pub category: Category,
}

impl Point {
    pub fn new(pos: Vec2, vel: Vec2, base_radius: f32, phase: f32) -> Self {
        Self {
            pos,
            vel,
            base_radius,
            phase,
            category: Category::Primary,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Move by one velocity step, then reflect off the `[0, bounds]` box.
    ///
    /// Position is never clamped. An axis whose coordinate ends up outside the
    /// box gets its velocity pointed back inside, so a point that left the box
    /// (or was stranded by a shrinking viewport) returns on its own.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        self.vel.x = reflect_axis(self.pos.x, self.vel.x, bounds.x);
        self.vel.y = reflect_axis(self.pos.y, self.vel.y, bounds.y);
    }
}

#[inline]
fn reflect_axis(coord: f32, vel: f32, max: f32) -> f32 {
    if coord < 0.0 {
        vel.abs()
    } else if coord > max {
        -vel.abs()
    } else {
        vel
    }
}
