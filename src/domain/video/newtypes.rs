// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values the overlay
//! sends to the engine or uses for its own feedback, ensuring they are
//! always within valid ranges.

use std::time::Duration;

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed bounds (0.25x to 4.0x).
pub mod speed_bounds {
    /// Minimum playback speed.
    pub const MIN: f64 = 0.25;
    /// Maximum playback speed.
    pub const MAX: f64 = 4.0;
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Playback speed value, guaranteed to be within valid range (0.25x - 4.0x).
///
/// This newtype enforces validity at the type level, making it impossible
/// to send an invalid playback speed to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a new playback speed, clamping to valid range.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if speed.is_nan() {
            return Self::default();
        }
        Self(speed.clamp(speed_bounds::MIN, speed_bounds::MAX))
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if this is normal (1x) speed.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - speed_bounds::DEFAULT).abs() < 0.001
    }

    /// Returns true if this is the minimum speed.
    #[must_use]
    pub fn is_min(self) -> bool {
        (self.0 - speed_bounds::MIN).abs() < 0.001
    }

    /// Returns true if this is the maximum speed.
    #[must_use]
    pub fn is_max(self) -> bool {
        (self.0 - speed_bounds::MAX).abs() < 0.001
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// QuickSeekStep
// =============================================================================

/// Quick seek step bounds (1 to 60 seconds).
pub mod quick_seek_bounds {
    /// Minimum quick seek step in seconds.
    pub const MIN: u32 = 1;
    /// Maximum quick seek step in seconds.
    pub const MAX: u32 = 60;
    /// Default quick seek step in seconds.
    pub const DEFAULT: u32 = 5;
}

/// Whole-second jump performed by a vertical swipe.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSeekStep(u32);

impl QuickSeekStep {
    /// Creates a new quick seek step, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(quick_seek_bounds::MIN, quick_seek_bounds::MAX))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= quick_seek_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= quick_seek_bounds::MAX
    }
}

impl Default for QuickSeekStep {
    fn default() -> Self {
        Self(quick_seek_bounds::DEFAULT)
    }
}

// =============================================================================
// BannerDuration
// =============================================================================

/// Banner lifetime bounds in milliseconds.
pub mod banner_bounds {
    /// Shortest banner lifetime.
    pub const MIN_MS: u64 = 250;
    /// Longest banner lifetime.
    pub const MAX_MS: u64 = 30_000;
    /// Default banner lifetime.
    pub const DEFAULT_MS: u64 = 1000;
}

/// How long a transient banner (or the seek bar) stays visible.
///
/// # Example
///
/// ```
/// use seek_overlay::domain::video::BannerDuration;
/// use std::time::Duration;
///
/// let lifetime = BannerDuration::from_millis(4000);
/// assert_eq!(lifetime.as_duration(), Duration::from_secs(4));
///
/// // Values outside range are clamped
/// assert_eq!(BannerDuration::from_millis(1).as_millis(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerDuration(u64);

impl BannerDuration {
    /// Creates a new banner lifetime, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(banner_bounds::MIN_MS, banner_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the lifetime as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for BannerDuration {
    fn default() -> Self {
        Self(banner_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
