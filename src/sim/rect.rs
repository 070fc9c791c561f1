//! Axis-aligned rectangle primitive
//!
//! Every entity owns one of these; all collision resolution in the sim is a
//! plain AABB overlap test between two `Rect`s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. `(x, y)` is the top-left corner; the y axis
/// points down, matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect of the given size centered on a point
    pub fn centered_at(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// AABB overlap test (strict: sharing only an edge does not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Move the rect so its center lands on the given x
    pub fn set_center_x(&mut self, center_x: f32) {
        self.x = center_x - self.width / 2.0;
    }

    /// Change the width, keeping the center fixed
    pub fn resize_width_centered(&mut self, width: f32) {
        debug_assert!(width > 0.0);
        let center_x = self.center_x();
        self.width = width;
        self.set_center_x(center_x);
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}
