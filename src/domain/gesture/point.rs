// SPDX-License-Identifier: MPL-2.0
//! Touch coordinates and seek direction.

/// A position in logical pixels, origin at the top-left of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Signed displacement `(dx, dy)` from `origin` to `self`.
    #[must_use]
    pub fn offset_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Direction of a seek relative to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a horizontal drag: right is forward. No movement counts
    /// as backward.
    #[must_use]
    pub fn from_horizontal(delta_x: f32) -> Self {
        if delta_x > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Direction of a vertical swipe: up (negative screen `dy`) is forward.
    #[must_use]
    pub fn from_vertical(delta_y: f32) -> Self {
        if delta_y < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Indicator shown next to the seek time.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Forward => "+",
            Direction::Backward => "-",
        }
    }

    /// `1.0` for forward, `-1.0` for backward.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}
