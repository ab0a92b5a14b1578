// SPDX-License-Identifier: MPL-2.0
//! Progress bar state and drag tracking.

use crate::domain::gesture::SwipeDistance;
use crate::seek::{clamp_target, ScrubProgress};

/// Progress bar as drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekBar {
    pub visible: bool,
    pub position_secs: f64,
    pub duration_secs: f64,
}

impl Default for SeekBar {
    fn default() -> Self {
        Self {
            visible: true,
            position_secs: 0.0,
            duration_secs: 1.0,
        }
    }
}

impl SeekBar {
    /// Playback fraction in `[0, 1]` for drawing.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.duration_secs > 0.0 && self.duration_secs.is_finite() {
            #[allow(clippy::cast_possible_truncation)]
            let fraction = (self.position_secs / self.duration_secs).clamp(0.0, 1.0) as f32;
            fraction
        } else {
            0.0
        }
    }
}

/// A press on the seek bar, from touch-down to release.
///
/// Nothing moves until the finger has travelled past the drag threshold.
/// From then on, the travel measured from the crossing point is mapped
/// across the bar width onto the media duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarDrag {
    start_x: f32,
    start_secs: f64,
    threshold_x: Option<f32>,
    /// Set once the drag produced its first value.
    pub progress: Option<ScrubProgress>,
}

impl BarDrag {
    #[must_use]
    pub fn new(start_x: f32, start_secs: f64) -> Self {
        Self {
            start_x,
            start_secs,
            threshold_x: None,
            progress: None,
        }
    }

    /// Bar value for a finger at `x`, or `None` while the travel is still
    /// within `threshold`.
    pub fn track(
        &mut self,
        x: f32,
        bar_width: f32,
        duration_secs: f64,
        threshold: SwipeDistance,
    ) -> Option<f64> {
        let from_x = match self.threshold_x {
            Some(crossed_at) => crossed_at,
            None => {
                if (x - self.start_x).abs() <= threshold.value() {
                    return None;
                }
                self.threshold_x = Some(x);
                x
            }
        };

        if bar_width <= 0.0 {
            return Some(clamp_target(self.start_secs, duration_secs));
        }
        let delta = f64::from((x - from_x) / bar_width) * duration_secs;
        Some(clamp_target(self.start_secs + delta, duration_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    const THRESHOLD: f32 = 25.0;

    fn threshold() -> SwipeDistance {
        SwipeDistance::new(THRESHOLD)
    }

    #[test]
    fn bar_starts_visible() {
        assert!(SeekBar::default().visible);
    }

    #[test]
    fn fraction_is_clamped() {
        let bar = SeekBar {
            visible: true,
            position_secs: 150.0,
            duration_secs: 100.0,
        };
        assert_eq!(bar.fraction(), 1.0);

        let unknown = SeekBar {
            duration_secs: 0.0,
            ..bar
        };
        assert_eq!(unknown.fraction(), 0.0);
    }

    #[test]
    fn small_travel_produces_nothing() {
        let mut drag = BarDrag::new(100.0, 30.0);
        assert_eq!(drag.track(125.0, 600.0, 300.0, threshold()), None);
        assert_eq!(drag.track(75.0, 600.0, 300.0, threshold()), None);
    }

    #[test]
    fn crossing_point_maps_to_start_position() {
        let mut drag = BarDrag::new(100.0, 30.0);
        assert_eq!(drag.track(126.0, 600.0, 300.0, threshold()), Some(30.0));
    }

    #[test]
    fn travel_is_measured_from_crossing_point() {
        let mut drag = BarDrag::new(100.0, 30.0);
        drag.track(130.0, 600.0, 300.0, threshold());

        // 60 px of a 600 px bar is a tenth of 300 s
        let value = drag.track(190.0, 600.0, 300.0, threshold()).unwrap();
        assert_abs_diff_eq!(value, 60.0, epsilon = F64_EPSILON);

        // Once past the threshold, small moves count
        let value = drag.track(130.0, 600.0, 300.0, threshold()).unwrap();
        assert_abs_diff_eq!(value, 30.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn values_are_clamped_to_media() {
        let mut drag = BarDrag::new(300.0, 10.0);
        drag.track(260.0, 400.0, 100.0, threshold());
        assert_eq!(drag.track(-500.0, 400.0, 100.0, threshold()), Some(0.0));
        assert_eq!(drag.track(5000.0, 400.0, 100.0, threshold()), Some(100.0));
    }

    #[test]
    fn zero_width_bar_holds_start() {
        let mut drag = BarDrag::new(0.0, 12.0);
        assert_eq!(drag.track(50.0, 0.0, 100.0, threshold()), Some(12.0));
    }
}
