//! Moving entities: the player and obstacle segments
//!
//! Both share a [`Body`]; the [`Entity`] trait exposes it so physics and
//! collision code can treat them uniformly without mixing up player-only data
//! such as the sprite animation.

use glam::DVec2;

use super::animation::SpriteAnimation;
use super::rect::Rect;

/// Kinematic state shared by every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center point in screen coordinates
    pub pos: DVec2,
    /// Displacement per simulation step
    pub vel: DVec2,
    /// Width/height (non-negative)
    pub size: DVec2,
}

impl Body {
    pub fn new(pos: DVec2, vel: DVec2, size: DVec2) -> Self {
        Self {
            pos,
            vel,
            size: size.max(DVec2::ZERO),
        }
    }

    /// Bounding box derived from the current position and size
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Move by one step's worth of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Anything with a body
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    #[inline]
    fn bounding_box(&self) -> Rect {
        self.body().bounding_box()
    }

    #[inline]
    fn integrate(&mut self) {
        self.body_mut().integrate();
    }
}

/// The player-controlled flier
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub animation: SpriteAnimation,
}

impl Player {
    pub fn new(pos: DVec2, size: DVec2, animation: SpriteAnimation) -> Self {
        Self {
            body: Body::new(pos, DVec2::ZERO, size),
            animation,
        }
    }

    /// Upward impulse: velocity is reset, never accumulated
    pub fn flap(&mut self, impulse: f64, nudge: f64) {
        self.body.pos.y -= nudge;
        self.body.vel.y = impulse;
    }

    /// Integrate position, then accelerate downward
    pub fn fall(&mut self, gravity: f64) {
        self.body.integrate();
        self.body.vel += DVec2::new(0.0, gravity);
    }

    /// True once the center has left the arena vertically by more than half
    /// the player's height
    pub fn out_of_bounds(&self, arena_height: f64) -> bool {
        let half = self.body.size.y / 2.0;
        self.body.pos.y < -half || self.body.pos.y > arena_height + half
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// Which side of its gap a segment closes off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleSide {
    Top,
    Bottom,
}

/// One segment of an obstacle pair
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    /// Shared by the two segments spawned together
    pub gap_id: u32,
    pub side: ObstacleSide,
    pub body: Body,
}

impl Obstacle {
    /// True once the segment is entirely left of the visible area
    pub fn is_past_left_edge(&self) -> bool {
        self.bounding_box().right() <= 0.0
    }
}

impl Entity for Obstacle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(
            DVec2::new(200.0, 300.0),
            DVec2::new(32.0, 32.0),
            SpriteAnimation::new(4, 5),
        )
    }

    #[test]
    fn test_bounding_box_tracks_position() {
        let mut p = player();
        assert_eq!(p.bounding_box(), Rect::new(184.0, 284.0, 32.0, 32.0));
        p.body.vel = DVec2::new(0.0, 10.0);
        p.integrate();
        assert_eq!(p.bounding_box(), Rect::new(184.0, 294.0, 32.0, 32.0));
    }

    #[test]
    fn test_flap_resets_velocity() {
        let mut p = player();
        p.body.vel.y = -20.0;
        p.flap(-8.0, 1.0);
        assert_eq!(p.body.vel.y, -8.0);
        assert_eq!(p.body.pos.y, 299.0);
    }

    #[test]
    fn test_fall_integrates_before_gravity() {
        let mut p = player();
        p.fall(0.5);
        assert_eq!(p.body.pos.y, 300.0);
        assert_eq!(p.body.vel.y, 0.5);
        p.fall(0.5);
        assert_eq!(p.body.pos.y, 300.5);
        assert_eq!(p.body.vel.y, 1.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut p = player();
        assert!(!p.out_of_bounds(600.0));
        p.body.pos.y = 616.0;
        assert!(!p.out_of_bounds(600.0));
        p.body.pos.y = 616.5;
        assert!(p.out_of_bounds(600.0));
        p.body.pos.y = -16.5;
        assert!(p.out_of_bounds(600.0));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let body = Body::new(DVec2::ZERO, DVec2::ZERO, DVec2::new(-4.0, 8.0));
        assert_eq!(body.size, DVec2::new(0.0, 8.0));
    }

    #[test]
    fn test_obstacle_past_left_edge() {
        let mut obstacle = Obstacle {
            id: 1,
            gap_id: 1,
            side: ObstacleSide::Top,
            body: Body::new(
                DVec2::new(-31.0, 0.0),
                DVec2::new(-1.0, 0.0),
                DVec2::new(64.0, 512.0),
            ),
        };
        assert!(!obstacle.is_past_left_edge());
        obstacle.integrate();
        assert!(obstacle.is_past_left_edge());
    }
}
