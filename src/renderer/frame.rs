//! Per-frame drawing: ambient wash, proximity links, pulsing points

use glam::Vec2;

use super::canvas::{Canvas2d, RadialWash};
use crate::config::{FieldConfig, Rgba};
use crate::sim::{AnimationClock, Category, PointField};
use crate::surface::SurfaceState;

/// What a single frame painted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub links: usize,
    pub points: usize,
}

/// Stroke alpha for a link of length `distance`.
///
/// Falls linearly from `base_alpha` at zero distance to 0 at `link_distance`;
/// anything at or beyond the threshold is 0.
#[inline]
pub fn link_alpha(distance: f32, link_distance: f32, base_alpha: f32) -> f32 {
    if !(link_distance > 0.0) || distance >= link_distance {
        return 0.0;
    }
    base_alpha * (1.0 - distance / link_distance)
}

/// Radius of a point at clock angle `angle`
#[inline]
pub fn pulse_radius(base_radius: f32, phase: f32, angle: f32, amplitude: f32) -> f32 {
    base_radius + (angle + phase).sin() * amplitude
}

/// The static wash for a surface of `size` logical px
pub fn ambient_wash(size: Vec2, config: &FieldConfig) -> RadialWash {
    RadialWash {
        center: size * config.wash.center,
        inner_radius: config.wash.inner_radius,
        outer_radius: size.x.max(size.y),
        inner: config.palette.wash,
        outer: Rgba::TRANSPARENT,
    }
}

/// Draw one frame of the field onto `canvas`.
///
/// Order: clear, wash, links, points. A zero-area surface is cleared and
/// nothing else.
pub fn render_frame<C: Canvas2d + ?Sized>(
    canvas: &mut C,
    field: &PointField,
    surface: &SurfaceState,
    clock: &AnimationClock,
    config: &FieldConfig,
) -> FrameStats {
    let size = surface.logical_size();
    canvas.clear(size);

    let mut stats = FrameStats::default();
    if surface.is_degenerate() {
        return stats;
    }

    canvas.fill_radial_wash(&ambient_wash(size, config), size);

    // O(n²) pair search, bounded by the point cap
    let points = field.points();
    field.for_each_link(config.link_distance, |i, j, dist| {
        let alpha = link_alpha(dist, config.link_distance, config.link_alpha);
        canvas.stroke_line(
            points[i].pos,
            points[j].pos,
            config.palette.line.with_alpha(alpha),
            config.link_width,
        );
        stats.links += 1;
    });

    let angle = clock.angle(config.pulse_rate);
    for point in points {
        let radius = pulse_radius(point.base_radius, point.phase, angle, config.pulse_amplitude);
        let color = match point.category {
            Category::Primary => config.palette.point,
            Category::Accent => config.palette.accent,
        };
        // Canvas arcs reject negative radii
        canvas.fill_disc(point.pos, radius.max(0.0), color);
        stats.points += 1;
    }

    stats
}
