//! Fixed timestep simulation tick
//!
//! Core game step that advances simulation deterministically. Velocities are
//! per-step displacements, so `dt` only advances the spawn clock.

use super::collision::aabb_overlap;
use super::entity::Entity;
use super::state::{GameEvent, GamePhase, GameState, LossCause};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Up control held
    pub flap: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) {
    state.elapsed_time += dt;
    state.tick_count += 1;

    if let Some(spawn) =
        state
            .spawner
            .maybe_spawn(state.elapsed_time, &state.tuning, &mut state.obstacles)
    {
        state.gaps_spawned += 1;
        state.events.push(GameEvent::GapSpawned {
            gap_id: spawn.gap_id,
            offset: spawn.offset,
            next_spawn_time: spawn.next_spawn_time,
        });
    }

    // Input only steers while playing; physics runs regardless
    if state.phase == GamePhase::Playing && input.flap {
        state
            .player
            .flap(state.tuning.flap_impulse, state.tuning.flap_nudge);
    }
    state.player.fall(state.tuning.gravity);

    if state.player.out_of_bounds(state.tuning.arena_height as f64) {
        state.lose(LossCause::OutOfBounds);
    }

    let player_box = state.player.bounding_box();
    let mut hit = None;
    for obstacle in &mut state.obstacles {
        obstacle.integrate();
        if hit.is_none() && aabb_overlap(&obstacle.bounding_box(), &player_box) {
            hit = Some(obstacle.id);
        }
    }
    if let Some(obstacle_id) = hit {
        state.lose(LossCause::Collision { obstacle_id });
    }

    if state.phase == GamePhase::Playing {
        count_cleared_gaps(state, player_box.left);
    }
    recycle_obstacles(state);

    state.player.animation.step();
}

/// Count gaps whose segments have fully passed the player's leading edge
fn count_cleared_gaps(state: &mut GameState, player_left: f64) {
    let mut newly_cleared = Vec::new();
    for obstacle in &state.obstacles {
        if obstacle.gap_id > state.last_cleared_gap
            && obstacle.bounding_box().right() < player_left
            && !newly_cleared.contains(&obstacle.gap_id)
        {
            newly_cleared.push(obstacle.gap_id);
        }
    }

    for gap_id in newly_cleared {
        state.last_cleared_gap = state.last_cleared_gap.max(gap_id);
        state.gaps_cleared += 1;
        state.events.push(GameEvent::GapCleared { gap_id });
    }
}

/// Drop segments that can no longer be seen or hit
fn recycle_obstacles(state: &mut GameState) {
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_past_left_edge());
    let count = before - state.obstacles.len();
    if count > 0 {
        state.events.push(GameEvent::ObstaclesRecycled { count });
    }
}
