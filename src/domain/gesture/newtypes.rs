// SPDX-License-Identifier: MPL-2.0
//! Gesture tuning newtypes.
//!
//! Thresholds read from a hand-edited settings file pass through these
//! wrappers so that every value the classifier sees is within a sane range.

use std::time::Duration;

// =============================================================================
// SwipeDistance
// =============================================================================

/// Swipe distance bounds in pixels.
pub mod distance_bounds {
    /// Smallest accepted threshold or drift.
    pub const MIN: f32 = 1.0;
    /// Largest accepted threshold or drift.
    pub const MAX: f32 = 500.0;
}

/// A distance in logical pixels used as a swipe threshold or drift limit.
///
/// # Example
///
/// ```
/// use seek_overlay::domain::gesture::SwipeDistance;
///
/// let threshold = SwipeDistance::new(30.0);
/// assert_eq!(threshold.value(), 30.0);
///
/// // Values outside range are clamped
/// assert_eq!(SwipeDistance::new(-4.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDistance(f32);

impl SwipeDistance {
    /// Creates a new distance, clamping to valid range.
    ///
    /// `NaN` falls back to the minimum.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self(distance_bounds::MIN);
        }
        Self(pixels.clamp(distance_bounds::MIN, distance_bounds::MAX))
    }

    /// Returns the distance in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this is the minimum distance.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= distance_bounds::MIN
    }

    /// Returns true if this is the maximum distance.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= distance_bounds::MAX
    }
}

// =============================================================================
// HoldDuration
// =============================================================================

/// Press duration bounds in milliseconds.
pub mod hold_bounds {
    /// Shortest accepted hold duration.
    pub const MIN_MS: u64 = 50;
    /// Longest accepted hold duration.
    pub const MAX_MS: u64 = 2000;
}

/// How long a finger has to stay down for a press to change meaning
/// (tap cut-off, long-tap threshold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HoldDuration(u64);

impl HoldDuration {
    /// Creates a new hold duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(hold_bounds::MIN_MS, hold_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the hold duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// ScrubRate
// =============================================================================

/// Scrub mapping bounds in pixels per second of media time.
pub mod rate_bounds {
    /// Coarsest mapping (one pixel jumps a full second).
    pub const MIN: f32 = 1.0;
    /// Finest mapping.
    pub const MAX: f32 = 1000.0;
    /// Two pixels per 32 ms.
    pub const DEFAULT: f32 = 62.5;
}

/// Number of horizontal pixels a finger travels per second of media time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubRate(f32);

impl ScrubRate {
    /// Creates a new rate, clamping to valid range.
    #[must_use]
    pub fn new(pixels_per_second: f32) -> Self {
        if !pixels_per_second.is_finite() {
            return Self::default();
        }
        Self(pixels_per_second.clamp(rate_bounds::MIN, rate_bounds::MAX))
    }

    /// Returns the rate in pixels per second.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Converts a horizontal travel into a media time offset.
    #[must_use]
    pub fn seconds_for(self, delta_x: f32) -> f64 {
        f64::from(delta_x) / f64::from(self.0)
    }
}

impl Default for ScrubRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// ThrottleInterval
// =============================================================================

/// Seek throttle bounds in milliseconds.
pub mod throttle_bounds {
    /// Shortest spacing between forwarded seeks.
    pub const MIN_MS: u64 = 10;
    /// Longest spacing between forwarded seeks.
    pub const MAX_MS: u64 = 1000;
    /// Default spacing.
    pub const DEFAULT_MS: u64 = 50;
}

/// Minimum spacing between two seek commands forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleInterval(u64);

impl ThrottleInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(throttle_bounds::MIN_MS, throttle_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ThrottleInterval {
    fn default() -> Self {
        Self(throttle_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
