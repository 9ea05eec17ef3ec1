//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod animation;
pub mod collision;
pub mod entity;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use animation::SpriteAnimation;
pub use collision::aabb_overlap;
pub use entity::{Body, Entity, Obstacle, ObstacleSide, Player};
pub use rect::Rect;
pub use spawner::{GapSpawn, ObstacleSpawner};
pub use state::{GameEvent, GamePhase, GameState, LossCause};
pub use tick::{TickInput, tick};
