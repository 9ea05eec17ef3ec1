//! Collision detection between axis-aligned boxes
//!
//! Boxes that merely share an edge do not collide: a player skimming the lip
//! of a segment survives.

use super::rect::Rect;

/// Check whether two boxes overlap with a non-empty open intersection
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.bottom() <= b.top || a.top >= b.bottom() || a.right() <= b.left || a.left >= b.right())
}
