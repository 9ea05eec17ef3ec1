//! FlappySGD - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `game`: Frame loop, fixed-timestep accumulator and the frontend boundary
//! - `renderer`: Draw-list capture and the SFML frontend (`window` feature)
//! - `settings`: Presentation settings loaded from an optional JSON file
//! - `tuning`: Data-driven gameplay parameters

pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{FrontendError, SettingsError, TuningError};
pub use game::{FrameInput, Frontend, Game, RunSummary};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per presented frame at vsync)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame fed into the accumulator (seconds)
    pub const MAX_FRAME_TIME: f64 = 0.1;

    /// Visible area, in pixels
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Downward acceleration applied every step (pixels/step²)
    pub const GRAVITY: f64 = 0.5;
    /// Vertical velocity set while the up control is held (pixels/step)
    pub const FLAP_IMPULSE: f64 = -8.0;
    /// Extra upward position nudge applied with each flap (pixels)
    pub const FLAP_NUDGE: f64 = 1.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f64 = 32.0;
    pub const PLAYER_HEIGHT: f64 = 32.0;
    pub const PLAYER_START_X: f64 = SCREEN_WIDTH as f64 / 4.0;
    pub const PLAYER_START_Y: f64 = SCREEN_HEIGHT as f64 / 2.0;

    /// Obstacle segment defaults
    pub const OBSTACLE_WIDTH: f64 = 64.0;
    pub const OBSTACLE_HEIGHT: f64 = 512.0;
    /// Horizontal center of freshly spawned segments (just off the right edge)
    pub const OBSTACLE_SPAWN_X: f64 = 832.0;
    /// Horizontal velocity of every segment (pixels/step)
    pub const OBSTACLE_SPEED: f64 = -1.0;
    /// Vertical centers of the bottom and top segment before the random offset
    pub const OBSTACLE_BOTTOM_ANCHOR: f64 = 650.0;
    pub const OBSTACLE_TOP_ANCHOR: f64 = -50.0;

    /// Spawn scheduling
    pub const FIRST_SPAWN_TIME: f64 = 1.0;
    pub const SPAWN_INTERVAL_MIN: u32 = 3;
    pub const SPAWN_INTERVAL_MAX: u32 = 6;
    pub const SPAWN_OFFSET_MIN: i32 = -150;
    pub const SPAWN_OFFSET_MAX: i32 = 150;

    /// Player sprite sheet animation
    pub const ANIMATION_FRAMES: u32 = 4;
    pub const ANIMATION_FRAME_TICKS: u32 = 5;
}
