// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the overlay. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: Tap/long-tap timing and swipe distance thresholds
//! - **Seek**: Scrub mapping, throttle and quick-seek amounts
//! - **Feedback**: Banner lifetimes and seek bar auto-hide
//! - **Layout**: Touch zone fractions and preview size

use crate::domain::gesture::newtypes::{distance_bounds, hold_bounds, rate_bounds, throttle_bounds};
use crate::domain::video::newtypes::{banner_bounds, quick_seek_bounds, speed_bounds};

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Hold time after which a still press becomes a long-tap (milliseconds).
pub const DEFAULT_LONG_TAP_MS: u64 = 300;

/// Longest press that still counts as a tap (milliseconds).
pub const DEFAULT_TAP_MAX_MS: u64 = 150;

/// Horizontal travel needed to start a scrub (pixels).
pub const DEFAULT_HORIZONTAL_THRESHOLD_PX: f32 = 30.0;

/// Vertical travel needed to trigger a quick seek (pixels).
pub const DEFAULT_VERTICAL_THRESHOLD_PX: f32 = 40.0;

/// Vertical drift tolerated while classifying a horizontal swipe (pixels).
pub const DEFAULT_MAX_VERTICAL_DRIFT_PX: f32 = 50.0;

/// Horizontal drift tolerated while classifying a vertical swipe (pixels).
pub const DEFAULT_MAX_HORIZONTAL_DRIFT_PX: f32 = 50.0;

/// Playback speed applied while a long-tap is held.
pub const DEFAULT_LONG_PRESS_SPEED: f64 = 2.0;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Scrub mapping: two pixels per 32 ms of media time.
pub const DEFAULT_PIXELS_PER_SECOND: f32 = 62.5;

/// Minimum spacing between two forwarded seek commands (milliseconds).
pub const DEFAULT_SEEK_THROTTLE_MS: u64 = 50;

/// Jump applied by a vertical swipe (seconds).
pub const DEFAULT_QUICK_SEEK_SECS: u32 = 5;

/// Delay between the final seek and resuming playback (milliseconds).
pub const DEFAULT_RESUME_DELAY_MS: u64 = 100;

/// Horizontal travel on the seek bar before a drag starts seeking (pixels).
pub const DEFAULT_SEEK_BAR_DRAG_THRESHOLD_PX: f32 = 25.0;

/// Whether thumbnails are decoded while scrubbing.
pub const DEFAULT_PREVIEW_ENABLED: bool = true;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// Lifetime of transient banners: volume, quick seek, play/pause (milliseconds).
pub const DEFAULT_BANNER_MS: u64 = 1000;

/// Lifetime of the video info (title) banner (milliseconds).
pub const DEFAULT_VIDEO_INFO_MS: u64 = 4000;

/// Seek bar auto-hide delay (milliseconds).
pub const DEFAULT_SEEK_BAR_HIDE_MS: u64 = 4000;

/// Grace window after an interaction during which auto-hide is not re-armed (milliseconds).
pub const INTERACTION_GRACE_MS: u64 = 100;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Fraction of the height at the top where touches are ignored.
pub const TOP_IGNORE_FRACTION: f32 = 0.05;

/// Fraction of the width of each side strip toggling the info banner.
pub const EDGE_STRIP_FRACTION: f32 = 0.05;

/// Height of the seek bar box at the bottom of the overlay (pixels).
pub const SEEK_BAR_HEIGHT_PX: f32 = 70.0;

/// Horizontal inset of the progress bar inside the seek bar box (pixels).
pub const SEEK_BAR_INSET_PX: f32 = 60.0;

/// Preview thumbnail width (pixels).
pub const PREVIEW_WIDTH: u32 = 160;

/// Preview thumbnail height (pixels).
pub const PREVIEW_HEIGHT: u32 = 90;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gesture validation
    assert!(DEFAULT_TAP_MAX_MS < DEFAULT_LONG_TAP_MS);
    assert!(DEFAULT_TAP_MAX_MS >= hold_bounds::MIN_MS);
    assert!(DEFAULT_LONG_TAP_MS <= hold_bounds::MAX_MS);
    assert!(DEFAULT_HORIZONTAL_THRESHOLD_PX >= distance_bounds::MIN);
    assert!(DEFAULT_VERTICAL_THRESHOLD_PX >= distance_bounds::MIN);
    assert!(DEFAULT_MAX_VERTICAL_DRIFT_PX <= distance_bounds::MAX);
    assert!(DEFAULT_MAX_HORIZONTAL_DRIFT_PX <= distance_bounds::MAX);
    assert!(DEFAULT_LONG_PRESS_SPEED > speed_bounds::DEFAULT);
    assert!(DEFAULT_LONG_PRESS_SPEED <= speed_bounds::MAX);

    // Seek validation
    assert!(DEFAULT_PIXELS_PER_SECOND >= rate_bounds::MIN);
    assert!(DEFAULT_PIXELS_PER_SECOND <= rate_bounds::MAX);
    assert!(DEFAULT_SEEK_THROTTLE_MS >= throttle_bounds::MIN_MS);
    assert!(DEFAULT_QUICK_SEEK_SECS >= quick_seek_bounds::MIN);
    assert!(DEFAULT_QUICK_SEEK_SECS <= quick_seek_bounds::MAX);

    // Feedback validation
    assert!(DEFAULT_BANNER_MS >= banner_bounds::MIN_MS);
    assert!(DEFAULT_VIDEO_INFO_MS <= banner_bounds::MAX_MS);
    assert!(DEFAULT_SEEK_BAR_HIDE_MS <= banner_bounds::MAX_MS);
    assert!(INTERACTION_GRACE_MS < DEFAULT_SEEK_BAR_HIDE_MS);

    // Layout validation
    assert!(TOP_IGNORE_FRACTION > 0.0 && TOP_IGNORE_FRACTION < 0.5);
    assert!(EDGE_STRIP_FRACTION > 0.0 && EDGE_STRIP_FRACTION < 0.5);
    assert!(PREVIEW_WIDTH > 0 && PREVIEW_HEIGHT > 0);
};
