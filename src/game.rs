//! Frame loop and the frontend boundary
//!
//! Each frame: poll input → run simulation steps → present a [`Frame`]. The
//! frontend's `present` is the only blocking call (vsync). Steps are driven by
//! a fixed-timestep accumulator, so physics does not depend on the display's
//! refresh rate.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, SIM_DT};
use crate::error::TuningError;
use crate::renderer::Frame;
use crate::sim::{GameEvent, GamePhase, GameState, LossCause, TickInput, tick};
use crate::tuning::Tuning;

/// Input sampled once per presented frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Up control currently held
    pub flap: bool,
    /// Window closed or quit requested
    pub quit: bool,
}

/// Window, input and drawing collaborator
pub trait Frontend {
    /// Drain pending events without blocking and snapshot the controls
    fn poll_input(&mut self) -> FrameInput;

    /// Wall-clock seconds since the previous call
    fn frame_seconds(&mut self) -> f64;

    /// Draw and present one frame
    fn present(&mut self, frame: &Frame);
}

/// Converts variable frame times into whole simulation steps
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f64,
    max_substeps: u32,
    accumulator: f64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f64, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Add a frame's wall-clock time and return how many steps to run
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        let frame_time = frame_time.clamp(0.0, MAX_FRAME_TIME);
        self.accumulator += frame_time;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
    pub elapsed_time: f64,
    pub gaps_spawned: u32,
    pub gaps_cleared: u32,
    pub loss: Option<LossCause>,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    timestep: FixedTimestep,
    frames: u64,
    loss: Option<LossCause>,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        Self::with_timestep(seed, tuning, FixedTimestep::default())
    }

    pub fn with_timestep(
        seed: u64,
        tuning: Tuning,
        timestep: FixedTimestep,
    ) -> Result<Self, TuningError> {
        Ok(Self {
            state: GameState::with_tuning(seed, tuning)?,
            timestep,
            frames: 0,
            loss: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Run the simulation steps owed for one frame; returns how many ran
    pub fn update(&mut self, input: &FrameInput, frame_time: f64) -> u32 {
        let substeps = self.timestep.advance(frame_time);
        let tick_input = TickInput { flap: input.flap };
        for _ in 0..substeps {
            tick(&mut self.state, &tick_input, self.timestep.step());
        }
        self.frames += 1;
        self.handle_events();
        substeps
    }

    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Lost { cause, tick } => {
                    log::info!(
                        "You lose! {:?} at tick {} ({} gaps cleared)",
                        cause,
                        tick,
                        self.state.gaps_cleared
                    );
                    self.loss = Some(cause);
                }
                GameEvent::GapSpawned {
                    gap_id,
                    offset,
                    next_spawn_time,
                } => {
                    log::debug!(
                        "Gap {} spawned at offset {} (next at {:.2}s)",
                        gap_id,
                        offset,
                        next_spawn_time
                    );
                }
                GameEvent::GapCleared { gap_id } => {
                    log::debug!("Gap {} cleared", gap_id);
                }
                GameEvent::ObstaclesRecycled { count } => {
                    log::trace!("Recycled {} obstacle segments", count);
                }
            }
        }
    }

    /// Loop until the frontend reports quit
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> RunSummary {
        log::info!("Game running (seed {})", self.state.seed);
        loop {
            let input = frontend.poll_input();
            if input.quit {
                log::info!("Quit requested");
                break;
            }

            let frame_time = frontend.frame_seconds();
            self.update(&input, frame_time);
            frontend.present(&Frame::capture(&self.state));
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            ticks: self.state.tick_count,
            elapsed_time: self.state.elapsed_time,
            gaps_spawned: self.state.gaps_spawned,
            gaps_cleared: self.state.gaps_cleared,
            loss: self.loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestep_one_step_per_vsync_frame() {
        let mut ts = FixedTimestep::default();
        for _ in 0..10 {
            assert_eq!(ts.advance(SIM_DT), 1);
        }
    }

    #[test]
    fn test_timestep_accumulates_short_frames() {
        let mut ts = FixedTimestep::new(0.02, 8);
        assert_eq!(ts.advance(0.01), 0);
        assert_eq!(ts.advance(0.01), 1);
        assert_eq!(ts.advance(0.05), 2);
    }

    #[test]
    fn test_timestep_caps_substeps() {
        let mut ts = FixedTimestep::new(0.01, 4);
        // 0.1s clamp would be 10 steps, capped at 4
        assert_eq!(ts.advance(5.0), 4);
    }

    #[test]
    fn test_timestep_ignores_negative_time() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.advance(-1.0), 0);
    }

    #[test]
    fn test_update_records_loss() {
        let mut game = Game::new(3, Tuning::default()).unwrap();
        let input = FrameInput::default();
        while game.phase() == GamePhase::Playing {
            game.update(&input, SIM_DT);
        }
        assert_eq!(game.summary().loss, Some(LossCause::OutOfBounds));
        assert_eq!(game.summary().ticks, 37);
    }

    #[test]
    fn test_update_consumes_step_events() {
        let mut game = Game::new(3, Tuning::default()).unwrap();
        let input = FrameInput {
            flap: true,
            quit: false,
        };
        for _ in 0..70 {
            game.update(&input, SIM_DT);
            assert!(game.state().events.is_empty());
        }
        assert_eq!(game.state().gaps_spawned, 1);
    }

    #[test]
    fn test_new_rejects_invalid_tuning() {
        let tuning = Tuning {
            obstacle_speed: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            Game::new(3, tuning),
            Err(TuningError::ObstacleNotLeftward(_))
        ));
    }
}
