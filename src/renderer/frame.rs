//! Per-frame draw list
//!
//! A [`Frame`] is a snapshot of everything the frontend needs to draw, taken
//! after the simulation has run for the frame. It holds no textures, so it can
//! be built and inspected without a window.

use glam::DVec2;

use crate::sim::{Entity, GameState, ObstacleSide, Rect};

/// One obstacle segment to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSprite {
    pub rect: Rect,
    pub side: ObstacleSide,
}

/// Everything drawn in one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Background, stretched over the whole window
    pub background: Rect,
    pub obstacles: Vec<ObstacleSprite>,
    /// Player destination box
    pub player: Rect,
    /// Sprite sheet frame index for the player
    pub player_frame: u32,
    /// Frames in the player sheet
    pub player_frame_count: u32,
    /// Center of the "You lose!" text, when the run is over
    pub lose_overlay: Option<DVec2>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let arena = state.arena_size();
        Self {
            background: Rect::new(0.0, 0.0, arena.x, arena.y),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleSprite {
                    rect: o.bounding_box(),
                    side: o.side,
                })
                .collect(),
            player: state.player.bounding_box(),
            player_frame: state.player.animation.frame(),
            player_frame_count: state.player.animation.frame_count(),
            lose_overlay: state.is_lost().then(|| arena * 0.5),
        }
    }
}

/// Source rectangle of one frame in a horizontal sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetFrame {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Slice `frame` out of a sheet of `frame_count` equal horizontal frames
pub fn sheet_frame(sheet_width: u32, sheet_height: u32, frame_count: u32, frame: u32) -> SheetFrame {
    let frame_width = sheet_width / frame_count.max(1);
    SheetFrame {
        left: (frame * frame_width) as i32,
        top: 0,
        width: frame_width as i32,
        height: sheet_height as i32,
    }
}

/// Top-left corner that centers a box of `size` on `center`
#[inline]
pub fn centered_origin(center: DVec2, size: DVec2) -> DVec2 {
    center - size * 0.5
}
