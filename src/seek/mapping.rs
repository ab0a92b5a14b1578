// SPDX-License-Identifier: MPL-2.0
//! Pixel to media-time mapping for horizontal scrubbing.

use crate::domain::gesture::{Direction, ScrubRate};

/// Clamps a seek target to `[0, duration]`.
///
/// An unknown, negative or non-finite duration collapses the range to zero,
/// and a `NaN` target maps to zero.
#[must_use]
pub fn clamp_target(target_secs: f64, duration_secs: f64) -> f64 {
    let upper = if duration_secs.is_finite() && duration_secs > 0.0 {
        duration_secs
    } else {
        0.0
    };
    if target_secs.is_nan() {
        return 0.0;
    }
    target_secs.clamp(0.0, upper)
}

/// Linear mapping anchored where the scrub was recognized.
///
/// # Example
///
/// ```
/// use seek_overlay::seek::ScrubMapping;
/// use seek_overlay::domain::gesture::ScrubRate;
///
/// // Scrub recognized at x = 100 while the engine was at 60 s.
/// let mapping = ScrubMapping::new(100.0, 60.0, ScrubRate::default());
///
/// // 62.5 px per second: 3750 px to the right is one minute later.
/// assert_eq!(mapping.target(3850.0, 300.0), 120.0);
/// // Never past the ends of the media.
/// assert_eq!(mapping.target(-10_000.0, 300.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubMapping {
    anchor_x: f32,
    start_secs: f64,
    rate: ScrubRate,
}

impl ScrubMapping {
    #[must_use]
    pub fn new(anchor_x: f32, start_secs: f64, rate: ScrubRate) -> Self {
        Self {
            anchor_x,
            start_secs,
            rate,
        }
    }

    /// Position the engine was at when the scrub began.
    #[must_use]
    pub fn start_secs(&self) -> f64 {
        self.start_secs
    }

    /// Seek target for a finger at `x`, clamped to the media.
    #[must_use]
    pub fn target(&self, x: f32, duration_secs: f64) -> f64 {
        let offset = self.rate.seconds_for(x - self.anchor_x);
        clamp_target(self.start_secs + offset, duration_secs)
    }

    /// Direction indicator for a finger at `x`, relative to the anchor.
    #[must_use]
    pub fn direction(&self, x: f32) -> Direction {
        Direction::from_horizontal(x - self.anchor_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    #[test]
    fn clamp_target_bounds() {
        assert_eq!(clamp_target(-5.0, 100.0), 0.0);
        assert_eq!(clamp_target(150.0, 100.0), 100.0);
        assert_eq!(clamp_target(42.5, 100.0), 42.5);
    }

    #[test]
    fn clamp_target_with_unknown_duration_is_zero() {
        assert_eq!(clamp_target(42.0, 0.0), 0.0);
        assert_eq!(clamp_target(42.0, f64::NAN), 0.0);
        assert_eq!(clamp_target(42.0, -1.0), 0.0);
    }

    #[test]
    fn clamp_target_nan_target_is_zero() {
        assert_eq!(clamp_target(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn target_moves_with_finger() {
        let mapping = ScrubMapping::new(200.0, 10.0, ScrubRate::default());
        assert_abs_diff_eq!(mapping.target(262.5, 100.0), 11.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(mapping.target(137.5, 100.0), 9.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(mapping.target(200.0, 100.0), 10.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn direction_is_relative_to_anchor() {
        let mapping = ScrubMapping::new(200.0, 10.0, ScrubRate::default());
        assert_eq!(mapping.direction(201.0), Direction::Forward);
        assert_eq!(mapping.direction(199.0), Direction::Backward);
    }

    #[test]
    fn start_position_is_kept() {
        let mapping = ScrubMapping::new(0.0, 33.0, ScrubRate::new(10.0));
        assert_eq!(mapping.start_secs(), 33.0);
    }
}
