//! Error types
//!
//! Only startup can fail: the simulation itself is total. Every variant keeps
//! the underlying reason so the fatal diagnostic names what went wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while bringing up the window or loading assets
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("failed to create window: {reason}")]
    Window { reason: String },

    #[error("failed to load texture {}: {reason}", path.display())]
    Texture { path: PathBuf, reason: String },

    #[error("failed to load font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("failed to render text: {reason}")]
    Text { reason: String },
}

/// Failure while reading the optional settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid tuning in settings file")]
    Tuning(#[from] TuningError),
}

/// Gameplay parameters that would break the simulation's invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{name} size must be non-negative and finite, got {width}x{height}")]
    NegativeSize {
        name: &'static str,
        width: f64,
        height: f64,
    },

    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange {
        name: &'static str,
        min: i64,
        max: i64,
    },

    #[error("spawn interval must be at least 1, got {0}")]
    ZeroSpawnInterval(u32),

    #[error("animation needs at least one frame and one tick per frame")]
    EmptyAnimation,

    #[error("arena must have a non-zero area, got {width}x{height}")]
    EmptyArena { width: u32, height: u32 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("obstacle speed must be negative so segments leave the arena, got {0}")]
    ObstacleNotLeftward(f64),
}
