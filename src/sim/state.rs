//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives in [`GameState`]; it
//! is passed explicitly to [`super::tick`] so runs can be replayed in tests.

use glam::DVec2;

use super::animation::SpriteAnimation;
use super::entity::{Obstacle, Player};
use super::spawner::ObstacleSpawner;
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Input steers the player
    Playing,
    /// Run ended; physics and drawing continue but input is ignored
    Lost,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// Player left the arena above or below
    OutOfBounds,
    /// Player's box overlapped an obstacle segment
    Collision { obstacle_id: u32 },
}

/// Notable things that happened during a step, drained by the game loop
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    GapSpawned { gap_id: u32, offset: i32, next_spawn_time: f64 },
    GapCleared { gap_id: u32 },
    ObstaclesRecycled { count: usize },
    Lost { cause: LossCause, tick: u64 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay parameters
    pub tuning: Tuning,
    /// Simulation clock (seconds of simulated time)
    pub elapsed_time: f64,
    /// Simulation tick counter
    pub tick_count: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player
    pub player: Player,
    /// Obstacle segments in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Obstacle pair scheduler
    pub spawner: ObstacleSpawner,
    /// Gaps spawned so far
    pub gaps_spawned: u32,
    /// Gaps whose trailing edge has passed the player
    pub gaps_cleared: u32,
    /// Highest gap id already counted as cleared
    pub(crate) last_cleared_gap: u32,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game state with the given tuning
    ///
    /// Tuning that would make the spawner or recycling misbehave is rejected.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let animation = SpriteAnimation::new(tuning.animation_frames, tuning.animation_frame_ticks);
        let player = Player::new(tuning.player_start, tuning.player_size, animation);
        let spawner = ObstacleSpawner::new(seed, tuning.first_spawn_time);

        Self {
            seed,
            tuning,
            elapsed_time: 0.0,
            tick_count: 0,
            phase: GamePhase::Playing,
            player,
            obstacles: Vec::new(),
            spawner,
            gaps_spawned: 0,
            gaps_cleared: 0,
            last_cleared_gap: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// Enter the lost phase; only the first call has any effect
    pub fn lose(&mut self, cause: LossCause) {
        if self.phase == GamePhase::Lost {
            return;
        }
        self.phase = GamePhase::Lost;
        self.events.push(GameEvent::Lost {
            cause,
            tick: self.tick_count,
        });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Arena dimensions
    #[inline]
    pub fn arena_size(&self) -> DVec2 {
        self.tuning.arena_size()
    }
}
