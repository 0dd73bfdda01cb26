//! Backdrop configuration and presets
//!
//! Every tunable lives here. Presets cover the known looks; a JSON override
//! (usually the canvas `data-field-config` attribute) can replace any subset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Straight (non-premultiplied) RGBA colour with a fractional alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Colours used by the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Inner stop of the ambient wash
    pub wash: Rgba,
    /// Link colour; alpha is replaced by the distance-scaled link alpha
    pub line: Rgba,
    /// Fill for primary points
    pub point: Rgba,
    /// Fill for accent points (two-tone looks)
    pub accent: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wash: Rgba::new(23, 180, 255, 0.08),
            line: Rgba::new(23, 180, 255, 1.0),
            point: Rgba::new(245, 184, 0, 0.75),
            accent: Rgba::new(245, 184, 0, 0.75),
        }
    }
}

impl Palette {
    /// Blue/amber two-tone palette
    pub fn two_tone() -> Self {
        Self {
            wash: Rgba::new(23, 180, 255, 0.10),
            line: Rgba::new(23, 180, 255, 1.0),
            point: Rgba::new(23, 180, 255, 0.8),
            accent: Rgba::new(245, 184, 0, 0.85),
        }
    }
}

/// Geometry of the static radial wash behind the field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WashConfig {
    /// Centre as a fraction of (width, height)
    pub center: Vec2,
    /// Radius of the inner circle (logical px)
    pub inner_radius: f32,
}

impl Default for WashConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(WASH_CENTER.0, WASH_CENTER.1),
            inner_radius: WASH_INNER_RADIUS,
        }
    }
}

/// Point budget presets, trading density for per-frame cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    #[serde(alias = "low")]
    Low,
    #[default]
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

impl QualityPreset {
    /// `(cap, area per point)` for this preset
    pub fn point_budget(&self) -> (usize, f32) {
        match self {
            QualityPreset::Low => (140, 11000.0),
            QualityPreset::Medium => (160, 10000.0),
            QualityPreset::High => (180, 9000.0),
        }
    }
}

/// All backdrop tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Maximum point count
    pub cap: usize,
    /// Area-per-point divisor (logical px²)
    pub density: f32,
    /// Velocity components are drawn from [-speed/2, speed/2]
    pub speed: f32,
    /// Maximum distance at which a link is drawn (exclusive)
    pub link_distance: f32,
    /// Link alpha at zero distance
    pub link_alpha: f32,
    /// Link stroke width (logical px)
    pub link_width: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Pulse phase advance per frame tick (radians)
    pub pulse_rate: f32,
    pub pulse_amplitude: f32,
    /// Probability that a point is seeded as an accent
    pub accent_ratio: f32,
    /// When set, overrides `cap` and `density` with the preset's budget
    pub quality: Option<QualityPreset>,
    pub wash: WashConfig,
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cap: POINT_CAP,
            density: AREA_PER_POINT,
            speed: SPEED,
            link_distance: LINK_DISTANCE,
            link_alpha: LINK_ALPHA,
            link_width: LINK_WIDTH,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            pulse_rate: PULSE_RATE,
            pulse_amplitude: PULSE_AMPLITUDE,
            accent_ratio: 0.0,
            quality: None,
            wash: WashConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl FieldConfig {
    /// Denser two-tone look with ~30% accent points
    pub fn two_tone() -> Self {
        Self {
            cap: 160,
            density: 10000.0,
            speed: 0.15,
            link_distance: 120.0,
            link_alpha: 0.25,
            radius_max: 2.1,
            pulse_rate: 0.02,
            accent_ratio: 0.3,
            wash: WashConfig {
                center: Vec2::new(0.7, 0.2),
                ..Default::default()
            },
            palette: Palette::two_tone(),
            ..Default::default()
        }
    }

    /// Select a quality preset; its budget is applied by `sanitized`
    pub fn with_quality(mut self, preset: QualityPreset) -> Self {
        self.quality = Some(preset);
        self.sanitized()
    }

    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Repair values that would break the simulation or the canvas
    pub fn sanitized(mut self) -> Self {
        if let Some(preset) = self.quality {
            let (cap, density) = preset.point_budget();
            self.cap = cap;
            self.density = density;
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            log::warn!("density {} is not positive, using {}", self.density, AREA_PER_POINT);
            self.density = AREA_PER_POINT;
        }
        self.speed = finite_or_zero(self.speed).abs();
        self.link_distance = finite_or_zero(self.link_distance).max(0.0);
        self.link_alpha = finite_or_zero(self.link_alpha).clamp(0.0, 1.0);
        self.link_width = finite_or_zero(self.link_width).max(0.0);
        self.radius_min = finite_or_zero(self.radius_min).max(0.0);
        self.radius_max = finite_or_zero(self.radius_max).max(0.0);
        if self.radius_min > self.radius_max {
            std::mem::swap(&mut self.radius_min, &mut self.radius_max);
        }
        self.pulse_rate = finite_or_zero(self.pulse_rate);
        self.pulse_amplitude = finite_or_zero(self.pulse_amplitude).abs();
        self.accent_ratio = finite_or_zero(self.accent_ratio).clamp(0.0, 1.0);
        self.wash.inner_radius = finite_or_zero(self.wash.inner_radius).max(0.0);
        self
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
