//! Constellation Backdrop - an ambient animated point field
//!
//! Core modules:
//! - `sim`: Point field simulation (seeding, reflection, animation clock)
//! - `surface`: Viewport / device-pixel-ratio reconciliation
//! - `renderer`: Canvas 2D abstraction and per-frame drawing
//! - `animation`: Mount / frame / resize / unmount lifecycle
//! - `platform`: Frame scheduling hosts (browser and headless)
//! - `config`: Data-driven tunables and presets

pub mod animation;
pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod surface;

pub use animation::{Backdrop, LoopPhase};
pub use config::{FieldConfig, Palette, QualityPreset, Rgba, WashConfig};
pub use error::{ConfigError, LifecycleError, MountError};
pub use surface::{SurfaceState, Viewport};

/// Default tunables (the single-tone "glow" look)
pub mod consts {
    /// Upper bound on the number of points, independent of viewport size
    pub const POINT_CAP: usize = 180;
    /// Logical px² of viewport area per point
    pub const AREA_PER_POINT: f32 = 9000.0;
    /// Full width of the per-axis velocity range (components lie in ±SPEED/2)
    pub const SPEED: f32 = 0.12;
    /// Pairs closer than this (logical px) are linked
    pub const LINK_DISTANCE: f32 = 110.0;
    /// Link alpha at zero distance
    pub const LINK_ALPHA: f32 = 0.10;
    /// Link stroke width in logical px
    pub const LINK_WIDTH: f32 = 1.0;

    /// Base radius range for points
    pub const RADIUS_MIN: f32 = 0.6;
    pub const RADIUS_MAX: f32 = 2.0;

    /// Pulse phase advance per frame tick (radians)
    pub const PULSE_RATE: f32 = 0.015;
    /// Pulse amplitude (logical px added/removed from the base radius)
    pub const PULSE_AMPLITUDE: f32 = 0.4;

    /// Ambient wash centre as a fraction of (width, height)
    pub const WASH_CENTER: (f32, f32) = (0.6, 0.25);
    /// Ambient wash inner radius (logical px)
    pub const WASH_INNER_RADIUS: f32 = 80.0;
}
