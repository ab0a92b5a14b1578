// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Every handler advances the simulated engine to the event time before the
//! overlay sees the event, so positions read by gestures are current.

use crate::infrastructure::SimulatedEngine;
use crate::overlay::{self, Effect};
use crate::ui::input::{self, PointerTracker};
use iced::Event;
use std::path::PathBuf;
use std::time::Instant;

/// Maximum of the simulated system volume, in steps.
pub const VOLUME_MAX: u32 = 15;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub overlay: &'a mut overlay::State,
    pub engine: &'a mut SimulatedEngine,
    pub tracker: &'a mut PointerTracker,
    pub volume: &'a mut u32,
    pub media_path: &'a Option<PathBuf>,
}

impl UpdateContext<'_> {
    fn dispatch(&mut self, message: overlay::Message, now: Instant) -> Effect {
        self.engine.advance_to(now);
        let effect = self.overlay.handle(message, now, &mut *self.engine);
        if !matches!(effect, Effect::None | Effect::Refresh) {
            tracing::debug!(?effect, "overlay effect");
        }
        effect
    }
}

/// Handles a native event: keyboard volume steps and pointer input.
pub fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: &Event, now: Instant) {
    if let Some(step) = input::volume_step(event) {
        handle_volume_step(ctx, step, now);
    }

    if let Some(message) = ctx.tracker.translate(event) {
        ctx.dispatch(message, now);
    }
}

/// Changes the simulated system volume and shows it.
pub fn handle_volume_step(ctx: &mut UpdateContext<'_>, step: i32, now: Instant) {
    *ctx.volume = step_volume(*ctx.volume, step);
    let volume = *ctx.volume;
    ctx.dispatch(
        overlay::Message::VolumeChanged {
            volume,
            max: VOLUME_MAX,
        },
        now,
    );
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.dispatch(overlay::Message::Tick, now);
}

pub fn handle_media_ready(ctx: &mut UpdateContext<'_>, now: Instant) {
    let path = ctx.media_path.clone();
    ctx.dispatch(overlay::Message::MediaLoaded { path }, now);
}

/// Applies a keyboard step to the volume, staying within `0..=VOLUME_MAX`.
#[must_use]
pub fn step_volume(volume: u32, step: i32) -> u32 {
    let stepped = i64::from(volume) + i64::from(step);
    u32::try_from(stepped.clamp(0, i64::from(VOLUME_MAX))).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_steps_are_clamped() {
        assert_eq!(step_volume(0, -1), 0);
        assert_eq!(step_volume(VOLUME_MAX, 1), VOLUME_MAX);
        assert_eq!(step_volume(7, 1), 8);
    }

    #[test]
    fn volume_step_shows_banner() {
        let mut state = overlay::State::default();
        let mut engine = SimulatedEngine::new(60.0);
        let mut tracker = PointerTracker::new();
        let mut volume = 7;
        let media_path = None;
        let mut ctx = UpdateContext {
            overlay: &mut state,
            engine: &mut engine,
            tracker: &mut tracker,
            volume: &mut volume,
            media_path: &media_path,
        };

        handle_volume_step(&mut ctx, 1, Instant::now());

        assert_eq!(volume, 8);
        assert_eq!(state.active_banner(), Some(overlay::Banner::Volume(53)));
    }

    #[test]
    fn media_ready_names_the_video_after_the_file() {
        let mut state = overlay::State::default();
        let mut engine = SimulatedEngine::new(60.0);
        let mut tracker = PointerTracker::new();
        let mut volume = 7;
        let media_path = Some(PathBuf::from("/videos/Holiday.mkv"));
        let mut ctx = UpdateContext {
            overlay: &mut state,
            engine: &mut engine,
            tracker: &mut tracker,
            volume: &mut volume,
            media_path: &media_path,
        };

        handle_media_ready(&mut ctx, Instant::now());

        assert_eq!(state.title(), "Holiday");
    }
}
