//! Frame-counting animation clock

use std::f64::consts::TAU;

/// Monotonic frame counter used only to phase the pulse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationClock {
    ticks: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// `ticks * rate`, wrapped into [0, 2π) so long sessions keep f32 precision
    pub fn angle(&self, rate: f32) -> f32 {
        (self.ticks as f64 * rate as f64).rem_euclid(TAU) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_ticks_monotonically() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.ticks(), 0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.ticks(), 2);
        assert!((clock.angle(0.02) - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_angle_wraps() {
        let clock = AnimationClock { ticks: 1_000_000 };
        let angle = clock.angle(0.015);
        assert!((0.0..std::f32::consts::TAU).contains(&angle));
        let expected = (1_000_000.0_f64 * 0.015_f32 as f64).sin() as f32;
        assert!((angle.sin() - expected).abs() < 1e-4);
    }
}
