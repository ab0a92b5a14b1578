// SPDX-License-Identifier: MPL-2.0
//! Demo application: the gesture overlay over a simulated player.
//!
//! The `App` struct wires together the overlay, the simulated engine,
//! localization and settings, and feeds native events and ticks into the
//! overlay. Startup policy (config loading, locale, preview backend) lives in
//! [`App::new`] so it is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;

pub use message::{Flags, Message};
pub use update::{step_volume, VOLUME_MAX};

use crate::config;
use crate::i18n::I18n;
use crate::infrastructure::SimulatedEngine;
use crate::overlay::{self, Settings};
use crate::preview::{PreviewBridge, PreviewWorker};
use crate::ui::input::PointerTracker;
use crate::ui::overlay_view;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Length of the simulated media when `--duration` is not given.
pub const DEFAULT_DURATION_SECS: f64 = 300.0;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 270.0;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    overlay: overlay::State,
    engine: SimulatedEngine,
    tracker: PointerTracker,
    volume: u32,
    media_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("media_path", &self.media_path)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot function; the flags are consumed by the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and locale, builds the overlay and schedules the media
    /// announcement.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let duration_secs = flags
            .duration_secs
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(DEFAULT_DURATION_SECS);
        let media_path = flags.file_path.map(PathBuf::from);

        let preview_enabled = config
            .seek
            .preview_enabled
            .unwrap_or(config::DEFAULT_PREVIEW_ENABLED);
        let preview = if preview_enabled {
            preview_bridge(duration_secs)
        } else {
            PreviewBridge::disabled()
        };

        let app = Self {
            i18n,
            overlay: overlay::State::new(Settings::from(&config), preview),
            engine: demo_engine(duration_secs),
            tracker: PointerTracker::new(),
            volume: VOLUME_MAX / 2,
            media_path,
        };
        tracing::info!(duration_secs, media = ?app.media_path, "overlay ready");

        (app, Task::done(Message::MediaReady))
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("title", self.overlay.title())])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            overlay: &mut self.overlay,
            engine: &mut self.engine,
            tracker: &mut self.tracker,
            volume: &mut self.volume,
            media_path: &self.media_path,
        };

        match message {
            Message::RawEvent(event) => update::handle_raw_event(&mut ctx, &event, Instant::now()),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::MediaReady => update::handle_media_ready(&mut ctx, Instant::now()),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        overlay_view::view(&self.overlay, &self.i18n)
    }
}

/// The player behind the demo. It runs for as long as the window stays open,
/// so it keeps no command journal.
fn demo_engine(duration_secs: f64) -> SimulatedEngine {
    SimulatedEngine::new(duration_secs).without_journal()
}

/// Preview backend: FFmpeg when built with the `ffmpeg` feature, synthetic
/// frames otherwise. Decoding always runs on the worker thread.
fn preview_bridge(duration_secs: f64) -> PreviewBridge {
    #[cfg(feature = "ffmpeg")]
    {
        let _ = duration_secs;
        PreviewBridge::new(Box::new(PreviewWorker::spawn(
            crate::infrastructure::FfmpegPreviewSource::new(),
        )))
    }
    #[cfg(not(feature = "ffmpeg"))]
    {
        use crate::infrastructure::SimulatedPreviewSource;
        use std::time::Duration;

        let duration = Duration::try_from_secs_f64(duration_secs).unwrap_or_default();
        PreviewBridge::new(Box::new(PreviewWorker::spawn(SimulatedPreviewSource::new(
            duration,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{PlaybackEngine, SeekCommand};

    #[test]
    fn demo_engine_does_not_accumulate_commands() {
        let mut engine = demo_engine(DEFAULT_DURATION_SECS);
        for i in 0..500 {
            engine.seek(SeekCommand::Relative {
                offset_secs: f64::from(i % 7) - 3.0,
            });
        }
        assert!(engine.journal().is_empty());
        assert_eq!(engine.duration(), Some(DEFAULT_DURATION_SECS));
    }
}
