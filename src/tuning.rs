//! Data-driven gameplay parameters
//!
//! `Tuning::default()` reproduces the constants in [`crate::consts`] exactly.
//! A settings file may override individual fields.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Gameplay balance knobs consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Visible area width/height in pixels
    pub arena_width: u32,
    pub arena_height: u32,

    // === Player ===
    pub player_size: DVec2,
    pub player_start: DVec2,
    /// Downward acceleration per step
    pub gravity: f64,
    /// Vertical velocity set on flap
    pub flap_impulse: f64,
    /// Upward position nudge on flap (cosmetic)
    pub flap_nudge: f64,

    // === Obstacles ===
    pub obstacle_size: DVec2,
    pub obstacle_spawn_x: f64,
    pub obstacle_speed: f64,
    pub obstacle_bottom_anchor: f64,
    pub obstacle_top_anchor: f64,

    // === Spawning ===
    pub first_spawn_time: f64,
    pub spawn_interval_min: u32,
    pub spawn_interval_max: u32,
    pub spawn_offset_min: i32,
    pub spawn_offset_max: i32,

    // === Animation ===
    pub animation_frames: u32,
    pub animation_frame_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: SCREEN_WIDTH,
            arena_height: SCREEN_HEIGHT,

            player_size: DVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_start: DVec2::new(PLAYER_START_X, PLAYER_START_Y),
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            flap_nudge: FLAP_NUDGE,

            obstacle_size: DVec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            obstacle_spawn_x: OBSTACLE_SPAWN_X,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_bottom_anchor: OBSTACLE_BOTTOM_ANCHOR,
            obstacle_top_anchor: OBSTACLE_TOP_ANCHOR,

            first_spawn_time: FIRST_SPAWN_TIME,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,
            spawn_offset_min: SPAWN_OFFSET_MIN,
            spawn_offset_max: SPAWN_OFFSET_MAX,

            animation_frames: ANIMATION_FRAMES,
            animation_frame_ticks: ANIMATION_FRAME_TICKS,
        }
    }
}

impl Tuning {
    /// Arena dimensions as a vector
    pub fn arena_size(&self) -> DVec2 {
        DVec2::new(self.arena_width as f64, self.arena_height as f64)
    }

    /// Vertical distance between the centers of a gap's two segments
    pub fn gap_center_separation(&self) -> f64 {
        self.obstacle_bottom_anchor - self.obstacle_top_anchor
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.arena_width == 0 || self.arena_height == 0 {
            return Err(TuningError::EmptyArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        check_size("player", self.player_size)?;
        check_size("obstacle", self.obstacle_size)?;

        let scalars = [
            ("player start x", self.player_start.x),
            ("player start y", self.player_start.y),
            ("gravity", self.gravity),
            ("flap impulse", self.flap_impulse),
            ("flap nudge", self.flap_nudge),
            ("obstacle spawn x", self.obstacle_spawn_x),
            ("obstacle speed", self.obstacle_speed),
            ("bottom anchor", self.obstacle_bottom_anchor),
            ("top anchor", self.obstacle_top_anchor),
            ("first spawn time", self.first_spawn_time),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { name, value });
            }
        }
        // Recycling relies on every segment eventually passing the left edge
        if self.obstacle_speed >= 0.0 {
            return Err(TuningError::ObstacleNotLeftward(self.obstacle_speed));
        }

        if self.spawn_interval_min == 0 {
            return Err(TuningError::ZeroSpawnInterval(self.spawn_interval_min));
        }
        if self.spawn_interval_min > self.spawn_interval_max {
            return Err(TuningError::InvertedRange {
                name: "spawn interval",
                min: self.spawn_interval_min as i64,
                max: self.spawn_interval_max as i64,
            });
        }
        if self.spawn_offset_min > self.spawn_offset_max {
            return Err(TuningError::InvertedRange {
                name: "spawn offset",
                min: self.spawn_offset_min as i64,
                max: self.spawn_offset_max as i64,
            });
        }
        if self.animation_frames == 0 || self.animation_frame_ticks == 0 {
            return Err(TuningError::EmptyAnimation);
        }
        Ok(())
    }
}

fn check_size(name: &'static str, size: DVec2) -> Result<(), TuningError> {
    if size.is_finite() && size.x >= 0.0 && size.y >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::NegativeSize {
            name,
            width: size.x,
            height: size.y,
        })
    }
}
