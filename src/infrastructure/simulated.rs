// SPDX-License-Identifier: MPL-2.0
//! In-process playback engine and preview source.
//!
//! [`SimulatedEngine`] stands in for a real player: its position advances
//! with wall time multiplied by the playback speed, and every command it
//! receives is journaled so tests can assert on the exact command stream.
//! Long-running hosts turn the journal off with
//! [`SimulatedEngine::without_journal`].
//! [`SimulatedPreviewSource`] renders a gradient whose hue follows the
//! requested timestamp.

use crate::application::port::{PlaybackEngine, PreviewSource, SeekCommand};
use crate::config::defaults::{PREVIEW_HEIGHT, PREVIEW_WIDTH};
use crate::domain::media::PreviewImage;
use crate::domain::video::PlaybackSpeed;
use crate::error::PreviewError;
use crate::seek::clamp_target;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A command received by [`SimulatedEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCall {
    Seek(SeekCommand),
    SetPaused(bool),
    SetSpeed(f64),
}

/// Playback engine simulated in memory.
#[derive(Debug, Clone)]
pub struct SimulatedEngine {
    duration_secs: Option<f64>,
    position_secs: f64,
    paused: bool,
    speed: PlaybackSpeed,
    title: Option<String>,
    clock: Option<Instant>,
    journal: Option<Vec<EngineCall>>,
}

impl SimulatedEngine {
    /// Creates a playing engine at position zero.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: Some(duration_secs),
            position_secs: 0.0,
            paused: false,
            speed: PlaybackSpeed::default(),
            title: None,
            clock: None,
            journal: Some(Vec::new()),
        }
    }

    /// Creates an engine with no media: every query returns `None`.
    #[must_use]
    pub fn unloaded() -> Self {
        Self {
            duration_secs: None,
            ..Self::new(0.0)
        }
    }

    #[must_use]
    pub fn with_position(mut self, position_secs: f64) -> Self {
        self.position_secs = self.clamp(position_secs);
        self
    }

    #[must_use]
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Stops recording commands. [`journal`](Self::journal) stays empty.
    #[must_use]
    pub fn without_journal(mut self) -> Self {
        self.journal = None;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Advances the playback position to wall time `now`.
    ///
    /// The first call only starts the clock.
    pub fn advance_to(&mut self, now: Instant) {
        if let Some(last) = self.clock {
            if !self.paused && self.duration_secs.is_some() {
                let elapsed = now.saturating_duration_since(last).as_secs_f64();
                self.position_secs = self.clamp(self.position_secs + elapsed * self.speed.value());
            }
        }
        self.clock = Some(now);
    }

    /// Returns the commands received so far.
    #[must_use]
    pub fn journal(&self) -> &[EngineCall] {
        self.journal.as_deref().unwrap_or_default()
    }

    /// Drains and returns the commands received so far.
    pub fn take_journal(&mut self) -> Vec<EngineCall> {
        self.journal.as_mut().map(std::mem::take).unwrap_or_default()
    }

    fn record(&mut self, call: EngineCall) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(call);
        }
    }

    fn clamp(&self, secs: f64) -> f64 {
        clamp_target(secs, self.duration_secs.unwrap_or(0.0))
    }
}

impl PlaybackEngine for SimulatedEngine {
    fn position(&self) -> Option<f64> {
        self.duration_secs.map(|_| self.position_secs)
    }

    fn duration(&self) -> Option<f64> {
        self.duration_secs
    }

    fn is_paused(&self) -> Option<bool> {
        self.duration_secs.map(|_| self.paused)
    }

    fn set_paused(&mut self, paused: bool) {
        self.record(EngineCall::SetPaused(paused));
        self.paused = paused;
    }

    fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.record(EngineCall::SetSpeed(speed.value()));
        self.speed = speed;
    }

    fn seek(&mut self, command: SeekCommand) {
        self.record(EngineCall::Seek(command));
        let target = match command {
            SeekCommand::Absolute { target_secs } => target_secs,
            SeekCommand::Relative { offset_secs } => self.position_secs + offset_secs,
        };
        self.position_secs = self.clamp(target);
    }

    fn media_title(&self) -> Option<String> {
        self.title.clone()
    }
}

/// Preview source producing synthetic frames.
#[derive(Debug, Clone)]
pub struct SimulatedPreviewSource {
    duration: Duration,
    opened: Option<PathBuf>,
}

impl SimulatedPreviewSource {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            opened: None,
        }
    }

    fn render(timestamp: Duration, duration: Duration) -> Option<PreviewImage> {
        let progress = if duration.is_zero() {
            0.0
        } else {
            timestamp.as_secs_f64() / duration.as_secs_f64()
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shade = (progress.clamp(0.0, 1.0) * 255.0) as u8;

        let mut pixels = Vec::with_capacity((PREVIEW_WIDTH * PREVIEW_HEIGHT * 4) as usize);
        for _y in 0..PREVIEW_HEIGHT {
            for x in 0..PREVIEW_WIDTH {
                #[allow(clippy::cast_possible_truncation)]
                let ramp = (x * 255 / PREVIEW_WIDTH) as u8;
                pixels.extend_from_slice(&[shade, ramp, 255 - shade, 255]);
            }
        }
        PreviewImage::from_rgba(PREVIEW_WIDTH, PREVIEW_HEIGHT, pixels)
    }
}

impl PreviewSource for SimulatedPreviewSource {
    fn open(&mut self, path: &Path) -> Result<(), PreviewError> {
        self.opened = Some(path.to_path_buf());
        Ok(())
    }

    fn frame_at(&mut self, timestamp: Duration) -> Result<Option<PreviewImage>, PreviewError> {
        if self.opened.is_none() {
            return Err(PreviewError::NotOpened);
        }
        if timestamp > self.duration {
            return Ok(None);
        }
        Ok(Self::render(timestamp, self.duration))
    }

    fn duration(&self) -> Option<Duration> {
        self.opened.as_ref().map(|_| self.duration)
    }

    fn release(&mut self) {
        self.opened = None;
    }
}
