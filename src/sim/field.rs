//! The point field: seeding, per-frame advance and proximity search

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::point::{Category, Point};
use crate::config::FieldConfig;

/// Number of points for a viewport: `min(cap, floor(width * height / density))`.
///
/// Degenerate viewports (either side ≤ 0) produce no points.
pub fn point_count(width: f32, height: f32, cap: usize, density: f32) -> usize {
    if !(width > 0.0 && height > 0.0 && density > 0.0) {
        return 0;
    }
    let by_area = (width as f64 * height as f64 / density as f64).floor();
    if by_area >= cap as f64 {
        cap
    } else {
        by_area as usize
    }
}

/// All simulated points of one backdrop instance
#[derive(Debug, Clone, Default)]
pub struct PointField {
    points: Vec<Point>,
}

impl PointField {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Seed a field for a `size` (logical px) surface
    pub fn seed<R: Rng + ?Sized>(size: Vec2, config: &FieldConfig, rng: &mut R) -> Self {
        let count = point_count(size.x, size.y, config.cap, config.density);
        let half_speed = config.speed.abs() / 2.0;
        let (r_min, r_max) = if config.radius_min <= config.radius_max {
            (config.radius_min, config.radius_max)
        } else {
            (config.radius_max, config.radius_min)
        };
        let accent_ratio = config.accent_ratio.clamp(0.0, 1.0) as f64;

        let points = (0..count)
            .map(|_| {
                let pos = Vec2::new(rng.random_range(0.0..=size.x), rng.random_range(0.0..=size.y));
                let vel = Vec2::new(
                    rng.random_range(-half_speed..=half_speed),
                    rng.random_range(-half_speed..=half_speed),
                );
                let base_radius = rng.random_range(r_min..=r_max);
                let phase = rng.random_range(0.0..TAU);
                let category = if accent_ratio > 0.0 && rng.random_bool(accent_ratio) {
                    Category::Accent
                } else {
                    Category::Primary
                };
                Point::new(pos, vel, base_radius, phase).with_category(category)
            })
            .collect();

        Self { points }
    }

    /// Step every point once and reflect it off the `[0, bounds]` box
    pub fn advance(&mut self, bounds: Vec2) {
        for point in &mut self.points {
            point.step(bounds);
        }
    }

    /// Visit every unordered pair closer than `link_distance` as `(i, j, distance)`, `i < j`.
    pub fn for_each_link(&self, link_distance: f32, mut visit: impl FnMut(usize, usize, f32)) {
        if !(link_distance > 0.0) {
            return;
        }
        let max_sq = link_distance * link_distance;
        for (i, a) in self.points.iter().enumerate() {
            for (j, b) in self.points.iter().enumerate().skip(i + 1) {
                let dist_sq = a.pos.distance_squared(b.pos);
                if dist_sq >= max_sq {
                    continue;
                }
                let dist = dist_sq.sqrt();
                if dist < link_distance {
                    visit(i, j, dist);
                }
            }
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
