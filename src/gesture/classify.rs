// SPDX-License-Identifier: MPL-2.0
//! Swipe recognition from the displacement of a pending touch.

use crate::domain::gesture::{Direction, Point, SwipeDistance};

/// Distance limits used to recognize a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Horizontal travel needed before a scrub starts.
    pub horizontal: SwipeDistance,
    /// Vertical travel needed before a quick seek fires.
    pub vertical: SwipeDistance,
    /// Vertical drift that still allows a horizontal swipe.
    pub max_vertical_drift: SwipeDistance,
    /// Horizontal drift that still allows a vertical swipe.
    pub max_horizontal_drift: SwipeDistance,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        use crate::config::defaults::{
            DEFAULT_HORIZONTAL_THRESHOLD_PX, DEFAULT_MAX_HORIZONTAL_DRIFT_PX,
            DEFAULT_MAX_VERTICAL_DRIFT_PX, DEFAULT_VERTICAL_THRESHOLD_PX,
        };

        Self {
            horizontal: SwipeDistance::new(DEFAULT_HORIZONTAL_THRESHOLD_PX),
            vertical: SwipeDistance::new(DEFAULT_VERTICAL_THRESHOLD_PX),
            max_vertical_drift: SwipeDistance::new(DEFAULT_MAX_VERTICAL_DRIFT_PX),
            max_horizontal_drift: SwipeDistance::new(DEFAULT_MAX_HORIZONTAL_DRIFT_PX),
        }
    }
}

/// A recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Continuous scrub along the x axis.
    Horizontal,
    /// One-shot quick seek; up is forward.
    Vertical(Direction),
}

/// Classifies the travel from `origin` to `current`.
///
/// The axis with the strictly larger displacement wins, so a move can
/// never qualify for both swipes. Equal displacements, or travel below
/// the thresholds, classify nothing.
///
/// # Example
///
/// ```
/// use seek_overlay::domain::gesture::Point;
/// use seek_overlay::gesture::{classify, Swipe, SwipeThresholds};
///
/// let t = SwipeThresholds::default();
/// let origin = Point::new(100.0, 100.0);
///
/// assert_eq!(classify(origin, Point::new(140.0, 110.0), &t), Some(Swipe::Horizontal));
/// assert_eq!(classify(origin, Point::new(120.0, 110.0), &t), None);
/// ```
#[must_use]
pub fn classify(origin: Point, current: Point, thresholds: &SwipeThresholds) -> Option<Swipe> {
    let (dx, dy) = current.offset_from(origin);
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());

    if abs_dx > thresholds.horizontal.value()
        && abs_dx > abs_dy
        && abs_dy < thresholds.max_vertical_drift.value()
    {
        return Some(Swipe::Horizontal);
    }

    if abs_dy > thresholds.vertical.value()
        && abs_dy > abs_dx
        && abs_dx < thresholds.max_horizontal_drift.value()
    {
        return Some(Swipe::Vertical(Direction::from_vertical(dy)));
    }

    None
}
