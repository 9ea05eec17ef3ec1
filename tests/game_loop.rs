//! Game loop driven through a headless frontend

use std::collections::VecDeque;

use flappy_sgd::consts::SIM_DT;
use flappy_sgd::renderer::Frame;
use flappy_sgd::sim::{GamePhase, LossCause};
use flappy_sgd::{FrameInput, Frontend, Game, Tuning};

/// Replays a fixed list of inputs, then asks to quit
struct ScriptedFrontend {
    inputs: VecDeque<FrameInput>,
    frame_time: f64,
    presented: Vec<Frame>,
}

impl ScriptedFrontend {
    fn new(inputs: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            frame_time: SIM_DT,
            presented: Vec::new(),
        }
    }

    fn idle(frames: usize) -> Self {
        Self::new(std::iter::repeat_n(FrameInput::default(), frames))
    }
}

impl Frontend for ScriptedFrontend {
    fn poll_input(&mut self) -> FrameInput {
        self.inputs.pop_front().unwrap_or(FrameInput {
            flap: false,
            quit: true,
        })
    }

    fn frame_seconds(&mut self) -> f64 {
        self.frame_time
    }

    fn present(&mut self, frame: &Frame) {
        self.presented.push(frame.clone());
    }
}

/// Flaps whenever the last drawn player box sank below a target line
struct Autopilot {
    frames_left: usize,
    target_y: f64,
    last_frame: Option<Frame>,
}

impl Frontend for Autopilot {
    fn poll_input(&mut self) -> FrameInput {
        if self.frames_left == 0 {
            return FrameInput {
                flap: false,
                quit: true,
            };
        }
        self.frames_left -= 1;
        let flap = self
            .last_frame
            .as_ref()
            .is_some_and(|f| f.player.center().y > self.target_y);
        FrameInput { flap, quit: false }
    }

    fn frame_seconds(&mut self) -> f64 {
        SIM_DT
    }

    fn present(&mut self, frame: &Frame) {
        self.last_frame = Some(frame.clone());
    }
}

#[test]
fn test_quit_before_first_frame() {
    let mut game = Game::new(1, Tuning::default()).unwrap();
    let mut frontend = ScriptedFrontend::idle(0);

    let summary = game.run(&mut frontend);

    assert_eq!(summary.frames, 0);
    assert_eq!(summary.ticks, 0);
    assert!(frontend.presented.is_empty());
}

#[test]
fn test_one_frame_presented_per_input() {
    let mut game = Game::new(1, Tuning::default()).unwrap();
    let mut frontend = ScriptedFrontend::idle(10);

    let summary = game.run(&mut frontend);

    assert_eq!(summary.frames, 10);
    assert_eq!(summary.ticks, 10);
    assert_eq!(frontend.presented.len(), 10);
}

#[test]
fn test_falling_player_loses_and_overlay_appears() {
    let mut game = Game::new(1, Tuning::default()).unwrap();
    let mut frontend = ScriptedFrontend::idle(60);

    let summary = game.run(&mut frontend);

    assert_eq!(summary.loss, Some(LossCause::OutOfBounds));
    assert_eq!(game.phase(), GamePhase::Lost);
    // Frame 37 is the first drawn after the losing step
    assert!(frontend.presented[..36].iter().all(|f| f.lose_overlay.is_none()));
    assert!(frontend.presented[36..].iter().all(|f| f.lose_overlay.is_some()));
    // Still simulating and drawing after the loss
    assert_eq!(summary.ticks, 60);
}

#[test]
fn test_flap_after_loss_has_no_effect() {
    let mut inputs = vec![FrameInput::default(); 40];
    inputs.extend(vec![
        FrameInput {
            flap: true,
            quit: false
        };
        10
    ]);
    let mut game = Game::new(1, Tuning::default()).unwrap();
    let mut frontend = ScriptedFrontend::new(inputs);

    game.run(&mut frontend);

    let ys: Vec<f64> = frontend.presented.iter().map(|f| f.player.center().y).collect();
    // Still falling faster every frame despite holding up
    for pair in ys[40..].windows(3) {
        assert!(pair[2] - pair[1] > pair[1] - pair[0]);
    }
}

#[test]
fn test_long_frames_run_multiple_steps() {
    let mut game = Game::new(1, Tuning::default()).unwrap();
    let mut frontend = ScriptedFrontend::idle(10);
    frontend.frame_time = SIM_DT * 2.0;

    let summary = game.run(&mut frontend);

    assert_eq!(summary.frames, 10);
    assert_eq!(summary.ticks, 20);
}

#[test]
fn test_autopilot_stays_alive_until_first_gap_arrives() {
    let mut game = Game::new(11, Tuning::default()).unwrap();
    let mut frontend = Autopilot {
        frames_left: 500,
        target_y: 320.0,
        last_frame: None,
    };

    let summary = game.run(&mut frontend);

    assert_eq!(summary.loss, None);
    assert!(summary.gaps_spawned >= 1);
    let last = frontend.last_frame.expect("frames were presented");
    assert!(!last.obstacles.is_empty());
    assert!(last.lose_overlay.is_none());
}

#[test]
fn test_same_seed_same_frames() {
    let script: Vec<FrameInput> = (0..400)
        .map(|i| FrameInput {
            flap: i % 12 == 0,
            quit: false,
        })
        .collect();

    let mut a = ScriptedFrontend::new(script.clone());
    let mut b = ScriptedFrontend::new(script);
    Game::new(77, Tuning::default()).unwrap().run(&mut a);
    Game::new(77, Tuning::default()).unwrap().run(&mut b);

    assert_eq!(a.presented, b.presented);
}
