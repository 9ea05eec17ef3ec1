//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: x grows to the right, y grows downward, so `top` is the
//! smaller y value.

use glam::DVec2;

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`
    #[inline]
    pub fn from_center(center: DVec2, size: DVec2) -> Self {
        let corner = center - size * 0.5;
        Self::new(corner.x, corner.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }
}
