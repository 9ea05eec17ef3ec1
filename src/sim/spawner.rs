//! Time-driven obstacle spawning
//!
//! Each firing appends a bottom and a top segment that share x and velocity and
//! differ only in their vertical anchor, leaving a gap at a random height.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Body, Obstacle, ObstacleSide};
use crate::tuning::Tuning;

/// Description of one spawned gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSpawn {
    pub gap_id: u32,
    /// Random vertical offset applied to both anchors
    pub offset: i32,
    /// Interval drawn to re-arm the spawner
    pub interval: u32,
    /// Simulation time of the next spawn
    pub next_spawn_time: f64,
}

#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    rng: Pcg32,
    next_spawn_time: f64,
    next_gap_id: u32,
    next_obstacle_id: u32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64, first_spawn_time: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_spawn_time: first_spawn_time,
            next_gap_id: 1,
            next_obstacle_id: 1,
        }
    }

    /// Time threshold that must be exceeded for the next spawn
    #[inline]
    pub fn next_spawn_time(&self) -> f64 {
        self.next_spawn_time
    }

    /// Spawn one obstacle pair if `elapsed` has passed the threshold
    ///
    /// At most one pair is produced per call, even if the clock has run past
    /// several intervals.
    pub fn maybe_spawn(
        &mut self,
        elapsed: f64,
        tuning: &Tuning,
        obstacles: &mut Vec<Obstacle>,
    ) -> Option<GapSpawn> {
        if elapsed <= self.next_spawn_time {
            return None;
        }

        let interval = self
            .rng
            .random_range(tuning.spawn_interval_min..=tuning.spawn_interval_max);
        self.next_spawn_time += interval as f64;
        let offset = self
            .rng
            .random_range(tuning.spawn_offset_min..=tuning.spawn_offset_max);

        let gap_id = self.next_gap_id;
        self.next_gap_id += 1;

        let vel = DVec2::new(tuning.obstacle_speed, 0.0);
        let anchors = [
            (ObstacleSide::Bottom, tuning.obstacle_bottom_anchor),
            (ObstacleSide::Top, tuning.obstacle_top_anchor),
        ];
        for (side, anchor) in anchors {
            let pos = DVec2::new(tuning.obstacle_spawn_x, anchor + offset as f64);
            obstacles.push(Obstacle {
                id: self.next_obstacle_id,
                gap_id,
                side,
                body: Body::new(pos, vel, tuning.obstacle_size),
            });
            self.next_obstacle_id += 1;
        }

        Some(GapSpawn {
            gap_id,
            offset,
            interval,
            next_spawn_time: self.next_spawn_time,
        })
    }
}
