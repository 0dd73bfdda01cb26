//! Point field simulation
//!
//! Pure state, no rendering or platform dependencies:
//! - Points are seeded once from the viewport area
//! - One `advance` per frame, no fixed timestep
//! - Randomness only through an injected `rand::Rng`

pub mod clock;
pub mod field;
pub mod point;

pub use clock::AnimationClock;
pub use field::{PointField, point_count};
pub use point::{Category, Point};
