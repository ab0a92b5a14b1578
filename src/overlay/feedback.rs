// SPDX-License-Identifier: MPL-2.0
//! Transient on-screen feedback.
//!
//! Several cues can be live at once (a volume change during a scrub, say),
//! but only one banner is drawn. [`Feedback::active_banner`] picks it.

use crate::domain::gesture::Direction;
use crate::domain::video::format_clock;

/// Pause/resume cue shown after a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCue {
    Pause,
    Resume,
}

/// Seek target shown while scrubbing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekTime {
    pub target_secs: f64,
    pub direction: Option<Direction>,
}

/// The banner to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    /// Volume in percent.
    Volume(u32),
    /// Long-tap fast playback.
    SpeedBoost,
    /// Signed quick-seek offset in seconds.
    QuickSeek(i64),
    /// Clock text with direction suffix, e.g. `02:00 +`.
    SeekTime(String),
    Playback(PlaybackCue),
}

/// All live cues.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feedback {
    pub volume: Option<u32>,
    pub speed_boost: bool,
    pub quick_seek: Option<i64>,
    pub seek_time: Option<SeekTime>,
    pub playback: Option<PlaybackCue>,
    /// Title shown by the info banner; drawn separately from [`Banner`]s.
    pub video_info: Option<String>,
}

impl Feedback {
    /// Highest-priority cue, if any.
    #[must_use]
    pub fn active_banner(&self) -> Option<Banner> {
        if let Some(percent) = self.volume {
            return Some(Banner::Volume(percent));
        }
        if self.speed_boost {
            return Some(Banner::SpeedBoost);
        }
        if let Some(offset) = self.quick_seek {
            return Some(Banner::QuickSeek(offset));
        }
        if let Some(seek) = self.seek_time {
            return Some(Banner::SeekTime(seek_time_text(seek)));
        }
        self.playback.map(Banner::Playback)
    }
}

fn seek_time_text(seek: SeekTime) -> String {
    let clock = format_clock(seek.target_secs);
    match seek.direction {
        Some(direction) => format!("{clock} {}", direction.symbol()),
        None => clock,
    }
}

/// Volume as a truncated percentage of `max`. A zero `max` reads as 0 %.
#[must_use]
pub fn volume_percent(volume: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let percent = u64::from(volume) * 100 / u64::from(max);
    u32::try_from(percent).unwrap_or(u32::MAX)
}
