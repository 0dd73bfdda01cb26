//! Error types
//!
//! The simulation and renderer are infallible; only mounting onto a host and
//! parsing configuration can fail.

use thiserror::Error;

/// Failure to parse a configuration override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid field config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal precondition failures when attaching to a drawing surface.
///
/// Reported once at mount; the backdrop never retries.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("canvas element #{0} not found")]
    CanvasNotFound(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// Lifecycle misuse of a backdrop instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("backdrop is already running")]
    AlreadyRunning,
    #[error("backdrop was stopped; mount a fresh instance instead")]
    Stopped,
}
