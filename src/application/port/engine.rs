// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! This module defines the [`PlaybackEngine`] trait: the property and command
//! surface of an external player (mpv, GStreamer, a test double) as seen
//! by the overlay.
//!
//! # Design Notes
//!
//! - Queries are cheap property reads and may return `None` (no media yet)
//! - Seeks are always exact; keyframe snapping is the engine's business
//! - Calls happen on the UI queue, one at a time

use crate::domain::video::PlaybackSpeed;

/// A seek request sent to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekCommand {
    /// Jump to an absolute position in seconds.
    Absolute { target_secs: f64 },
    /// Jump relative to the current position (negative goes back).
    Relative { offset_secs: f64 },
}

/// Port for controlling a playback engine.
///
/// # Example
///
/// ```ignore
/// use seek_overlay::application::port::PlaybackEngine;
///
/// fn toggle(engine: &mut impl PlaybackEngine) {
///     let paused = engine.is_paused().unwrap_or(false);
///     engine.set_paused(!paused);
/// }
/// ```
pub trait PlaybackEngine {
    /// Current playback position in seconds.
    fn position(&self) -> Option<f64>;

    /// Media duration in seconds.
    fn duration(&self) -> Option<f64>;

    /// Whether playback is paused.
    fn is_paused(&self) -> Option<bool>;

    /// Pauses or resumes playback.
    fn set_paused(&mut self, paused: bool);

    /// Current playback speed.
    fn speed(&self) -> PlaybackSpeed;

    /// Changes the playback speed.
    fn set_speed(&mut self, speed: PlaybackSpeed);

    /// Issues an exact seek.
    fn seek(&mut self, command: SeekCommand);

    /// Title reported by the media container, if any.
    fn media_title(&self) -> Option<String> {
        None
    }
}
