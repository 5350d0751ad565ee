//! Cursor follower math: an instant dot, a trailing ring, and the magnetic
//! pull applied to hovered interactive elements.

use glam::Vec2;

use crate::constants::{CURSOR_OFFSCREEN, MAGNETIC_PULL, RING_LERP_FACTOR};

/// Tracks the raw pointer and the exponentially-smoothed ring position.
///
/// The dot renders at the raw target on every pointer event; the ring is
/// advanced once per frame and trails behind.
#[derive(Clone, Copy, Debug)]
pub struct CursorTracker {
    target: Vec2,
    ring: Vec2,
}

impl CursorTracker {
    pub fn new() -> Self {
        let parked = Vec2::splat(CURSOR_OFFSCREEN);
        Self {
            target: parked,
            ring: parked,
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Latest raw pointer sample; the dot's position.
    pub fn pointer(&self) -> Vec2 {
        self.target
    }

    /// Move the ring a fixed fraction toward the pointer and return the new
    /// position. With a stationary pointer the remaining distance shrinks
    /// every frame.
    pub fn tick(&mut self) -> Vec2 {
        self.ring = self.ring.lerp(self.target, RING_LERP_FACTOR);
        self.ring
    }

    pub fn ring(&self) -> Vec2 {
        self.ring
    }
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis-aligned element box in viewport coordinates, as reported by the DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Translation applied to a hovered element: proportional to the vector from
/// its center to the pointer, so the element leans toward the cursor.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect: Rect) -> Vec2 {
    (pointer - rect.center()) * MAGNETIC_PULL
}
