// SPDX-License-Identifier: MPL-2.0
//! Validated overlay tuning, built from [`Config`].

use crate::config::{defaults, Config};
use crate::domain::gesture::{HoldDuration, ScrubRate, SwipeDistance, ThrottleInterval};
use crate::domain::video::{BannerDuration, PlaybackSpeed, QuickSeekStep};
use crate::gesture::SwipeThresholds;

/// Every tunable of the overlay, already clamped to its valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub thresholds: SwipeThresholds,
    pub long_tap: HoldDuration,
    pub tap_max: HoldDuration,
    pub long_press_speed: PlaybackSpeed,
    pub scrub_rate: ScrubRate,
    pub throttle: ThrottleInterval,
    pub quick_seek: QuickSeekStep,
    pub resume_delay: HoldDuration,
    pub seek_bar_drag_threshold: SwipeDistance,
    pub banner: BannerDuration,
    pub video_info: BannerDuration,
    pub seek_bar_hide: BannerDuration,
    pub interaction_grace: HoldDuration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        let gesture = &config.gesture;
        let seek = &config.seek;
        let feedback = &config.feedback;

        let thresholds = SwipeThresholds {
            horizontal: SwipeDistance::new(
                gesture
                    .horizontal_threshold_px
                    .unwrap_or(defaults::DEFAULT_HORIZONTAL_THRESHOLD_PX),
            ),
            vertical: SwipeDistance::new(
                gesture
                    .vertical_threshold_px
                    .unwrap_or(defaults::DEFAULT_VERTICAL_THRESHOLD_PX),
            ),
            max_vertical_drift: SwipeDistance::new(
                gesture
                    .max_vertical_drift_px
                    .unwrap_or(defaults::DEFAULT_MAX_VERTICAL_DRIFT_PX),
            ),
            max_horizontal_drift: SwipeDistance::new(
                gesture
                    .max_horizontal_drift_px
                    .unwrap_or(defaults::DEFAULT_MAX_HORIZONTAL_DRIFT_PX),
            ),
        };

        Self {
            thresholds,
            long_tap: HoldDuration::from_millis(
                gesture.long_tap_ms.unwrap_or(defaults::DEFAULT_LONG_TAP_MS),
            ),
            tap_max: HoldDuration::from_millis(
                gesture.tap_max_ms.unwrap_or(defaults::DEFAULT_TAP_MAX_MS),
            ),
            long_press_speed: PlaybackSpeed::new(
                gesture
                    .long_press_speed
                    .unwrap_or(defaults::DEFAULT_LONG_PRESS_SPEED),
            ),
            scrub_rate: ScrubRate::new(
                gesture
                    .pixels_per_second
                    .unwrap_or(defaults::DEFAULT_PIXELS_PER_SECOND),
            ),
            throttle: ThrottleInterval::from_millis(
                seek.throttle_ms.unwrap_or(defaults::DEFAULT_SEEK_THROTTLE_MS),
            ),
            quick_seek: QuickSeekStep::new(
                seek.quick_seek_secs
                    .unwrap_or(defaults::DEFAULT_QUICK_SEEK_SECS),
            ),
            resume_delay: HoldDuration::from_millis(
                seek.resume_delay_ms
                    .unwrap_or(defaults::DEFAULT_RESUME_DELAY_MS),
            ),
            seek_bar_drag_threshold: SwipeDistance::new(
                seek.seek_bar_drag_threshold_px
                    .unwrap_or(defaults::DEFAULT_SEEK_BAR_DRAG_THRESHOLD_PX),
            ),
            banner: BannerDuration::from_millis(
                feedback.banner_ms.unwrap_or(defaults::DEFAULT_BANNER_MS),
            ),
            video_info: BannerDuration::from_millis(
                feedback
                    .video_info_ms
                    .unwrap_or(defaults::DEFAULT_VIDEO_INFO_MS),
            ),
            seek_bar_hide: BannerDuration::from_millis(
                feedback
                    .seek_bar_hide_ms
                    .unwrap_or(defaults::DEFAULT_SEEK_BAR_HIDE_MS),
            ),
            interaction_grace: HoldDuration::from_millis(defaults::INTERACTION_GRACE_MS),
        }
    }
}
