// SPDX-License-Identifier: MPL-2.0
//! The gesture overlay drawn over a playing video.
//!
//! [`State`] owns everything the overlay remembers between events: the
//! active press, the seek throttle, the deadlines, the banners, the clock
//! labels, the seek bar and the preview bridge. Pointer, resize, volume,
//! media and tick events go through [`State::handle`], which talks to the
//! [`PlaybackEngine`] directly and reports an [`Effect`] for the host.
//!
//! Time is always passed in. Deferred actions are [`TimerKind`] deadlines
//! that fire on the next [`Message::Tick`] at or after their instant, so the
//! whole overlay can be driven deterministically.

pub mod clock;
pub mod feedback;
pub mod seek_bar;
pub mod settings;
pub mod timers;
pub mod zone;

pub use clock::ClockDisplay;
pub use feedback::{volume_percent, Banner, Feedback, PlaybackCue, SeekTime};
pub use seek_bar::{BarDrag, SeekBar};
pub use settings::Settings;
pub use timers::{TimerKind, Timers};
pub use zone::{Layout, Zone};

use crate::application::port::{PlaybackEngine, SeekCommand};
use crate::domain::gesture::{Direction, Point};
use crate::domain::media::{display_name, PreviewImage, FALLBACK_TITLE};
use crate::domain::video::PlaybackSpeed;
use crate::gesture::{Gesture, Release, Swipe, TouchSession};
use crate::preview::PreviewBridge;
use crate::seek::{ScrubMapping, ScrubProgress, ScrubSession, SeekThrottle};
use std::path::PathBuf;
use std::time::Instant;

/// Events fed to the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Finger down or left mouse button pressed.
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    /// The platform took the pointer away; handled like a release.
    PointerCancelled,
    Resized { width: f32, height: f32 },
    /// System volume changed to `volume` out of `max`.
    VolumeChanged { volume: u32, max: u32 },
    /// New media is playing. `path` opens the seek preview.
    MediaLoaded { path: Option<PathBuf> },
    /// Periodic wake-up: fire deadlines, poll previews, refresh labels.
    Tick,
}

/// What the host should know after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Something visible changed.
    Refresh,
    /// A tap paused playback or scheduled it to resume.
    Tapped { resumed: bool },
    LongPressStarted,
    LongPressEnded,
    ScrubStarted,
    /// A scrub ended with its final exact seek.
    ScrubFinished { target_secs: f64 },
    QuickSeek { offset_secs: f64 },
    /// The video info banner was shown or hidden.
    InfoToggled(bool),
}

/// The press currently owned by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Interaction {
    #[default]
    Idle,
    /// Press in the ignored top strip.
    Ignored,
    /// Press on a side strip.
    EdgePress,
    Touch(TouchSession),
    SeekBar(BarDrag),
}

/// Overlay state.
#[derive(Debug)]
pub struct State {
    settings: Settings,
    layout: Layout,
    interaction: Interaction,
    throttle: SeekThrottle,
    timers: Timers,
    feedback: Feedback,
    clock: ClockDisplay,
    seek_bar: SeekBar,
    preview: PreviewBridge,
    title: String,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Settings::default(), PreviewBridge::disabled())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: Settings, preview: PreviewBridge) -> Self {
        Self {
            throttle: SeekThrottle::new(settings.throttle),
            settings,
            layout: Layout::default(),
            interaction: Interaction::Idle,
            timers: Timers::default(),
            feedback: Feedback::default(),
            clock: ClockDisplay::default(),
            seek_bar: SeekBar::default(),
            preview,
            title: FALLBACK_TITLE.to_string(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Name of the loaded media, as shown in the info banner.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// The single banner to draw, if any.
    #[must_use]
    pub fn active_banner(&self) -> Option<Banner> {
        self.feedback.active_banner()
    }

    #[must_use]
    pub fn clock(&self) -> &ClockDisplay {
        &self.clock
    }

    #[must_use]
    pub fn seek_bar(&self) -> &SeekBar {
        &self.seek_bar
    }

    #[must_use]
    pub fn preview_image(&self) -> Option<&PreviewImage> {
        self.preview.image()
    }

    #[must_use]
    pub fn preview_enabled(&self) -> bool {
        self.preview.is_enabled()
    }

    /// Classification of the active finger press, if there is one.
    #[must_use]
    pub fn gesture(&self) -> Option<&Gesture> {
        match &self.interaction {
            Interaction::Touch(session) => Some(session.gesture()),
            _ => None,
        }
    }

    /// Current scrub target, from either a finger swipe or a bar drag.
    #[must_use]
    pub fn scrub_target(&self) -> Option<f64> {
        match &self.interaction {
            Interaction::Touch(session) => match session.gesture() {
                Gesture::Horizontal(scrub) => Some(scrub.progress.target_secs),
                _ => None,
            },
            Interaction::SeekBar(drag) => drag.progress.map(|p| p.target_secs),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub_target().is_some()
    }

    /// Earliest pending deadline; the host must tick no later than this.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn is_timer_armed(&self, kind: TimerKind) -> bool {
        self.timers.is_armed(kind)
    }

    /// Handles one event at wall time `now`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle<E>(&mut self, msg: Message, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        match msg {
            Message::PointerPressed(point) => self.press(point, now, engine),
            Message::PointerMoved(point) => self.motion(point, now, engine),
            Message::PointerReleased | Message::PointerCancelled => self.release(now, engine),
            Message::Resized { width, height } => {
                self.layout = Layout { width, height };
                Effect::Refresh
            }
            Message::VolumeChanged { volume, max } => {
                self.feedback.volume = Some(volume_percent(volume, max));
                self.timers
                    .arm(TimerKind::VolumeBanner, now, self.settings.banner.as_duration());
                Effect::Refresh
            }
            Message::MediaLoaded { path } => {
                self.title = display_name(engine.media_title().as_deref(), path.as_deref());
                self.feedback.video_info = Some(self.title.clone());
                self.timers.arm(
                    TimerKind::VideoInfoBanner,
                    now,
                    self.settings.video_info.as_duration(),
                );
                self.schedule_seek_bar_hide(now);
                if let Some(path) = path {
                    self.preview.open(&path);
                }
                tracing::debug!(title = %self.title, "media loaded");
                Effect::Refresh
            }
            Message::Tick => self.tick(now, engine),
        }
    }

    // =========================================================================
    // Pointer routing
    // =========================================================================

    fn press<E>(&mut self, point: Point, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        if self.interaction != Interaction::Idle {
            tracing::trace!("press ignored, another press is active");
            return Effect::None;
        }

        self.interaction = match self.layout.zone_at(point, self.seek_bar.visible) {
            Zone::Ignored => Interaction::Ignored,
            Zone::EdgeStrip => Interaction::EdgePress,
            Zone::SeekBar => {
                Interaction::SeekBar(BarDrag::new(point.x, engine.position().unwrap_or(0.0)))
            }
            Zone::Gestures => {
                self.timers
                    .arm(TimerKind::LongTap, now, self.settings.long_tap.as_duration());
                Interaction::Touch(TouchSession::new(point, now))
            }
        };
        Effect::None
    }

    fn motion<E>(&mut self, point: Point, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        match self.interaction {
            Interaction::Touch(session) => match session.gesture() {
                Gesture::Pending => match session.detect_swipe(point, &self.settings.thresholds)
                {
                    Some(Swipe::Horizontal) => self.start_finger_scrub(point, now, engine),
                    Some(Swipe::Vertical(direction)) => {
                        self.start_quick_seek(direction, now, engine)
                    }
                    None => Effect::None,
                },
                Gesture::Horizontal(_) => self.track_finger_scrub(point.x, now, engine),
                // Long-taps and quick seeks tolerate finger drift
                Gesture::LongTap | Gesture::Vertical { .. } => Effect::None,
            },
            Interaction::SeekBar(_) => self.drag_bar(point.x, now, engine),
            Interaction::Idle | Interaction::Ignored | Interaction::EdgePress => Effect::None,
        }
    }

    fn release<E>(&mut self, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle | Interaction::Ignored => Effect::None,
            Interaction::EdgePress => self.toggle_video_info(now),
            Interaction::Touch(session) => {
                self.timers.cancel(TimerKind::LongTap);
                match session.release(now, self.settings.tap_max) {
                    Release::Tap => self.tap(now, engine),
                    Release::Nothing => Effect::None,
                    Release::LongTapEnded => {
                        engine.set_speed(PlaybackSpeed::default());
                        self.feedback.speed_boost = false;
                        tracing::debug!("long press ended, normal speed");
                        Effect::LongPressEnded
                    }
                    Release::ScrubEnded(scrub) => self.finish_scrub(scrub.progress, now, engine),
                    Release::QuickSeekEnded => {
                        self.timers.cancel(TimerKind::InteractionGrace);
                        self.schedule_seek_bar_hide(now);
                        Effect::None
                    }
                }
            }
            Interaction::SeekBar(drag) => match drag.progress {
                Some(progress) => self.finish_scrub(progress, now, engine),
                None => {
                    self.schedule_seek_bar_hide(now);
                    Effect::None
                }
            },
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    fn tap<E>(&mut self, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        let paused = engine.is_paused().unwrap_or(false);
        let cue = if paused {
            // Exact seek to where we are so the first resumed frame is sharp
            let position = engine.position().unwrap_or(0.0);
            engine.seek(SeekCommand::Absolute {
                target_secs: position,
            });
            self.timers.arm(
                TimerKind::ResumePlayback,
                now,
                self.settings.resume_delay.as_duration(),
            );
            PlaybackCue::Resume
        } else {
            engine.set_paused(true);
            PlaybackCue::Pause
        };
        self.feedback.playback = Some(cue);
        self.timers
            .arm(TimerKind::PlaybackBanner, now, self.settings.banner.as_duration());

        if self.seek_bar.visible {
            self.seek_bar.visible = false;
            self.timers.cancel(TimerKind::SeekBarHide);
        } else {
            self.seek_bar.visible = true;
            self.schedule_seek_bar_hide(now);
        }

        tracing::debug!(?cue, "tap");
        Effect::Tapped { resumed: paused }
    }

    fn start_long_press<E>(&mut self, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        let Interaction::Touch(session) = &mut self.interaction else {
            return Effect::None;
        };
        if !session.promote_to_long_tap() {
            return Effect::None;
        }
        engine.set_speed(self.settings.long_press_speed);
        self.feedback.speed_boost = true;
        tracing::debug!(
            speed = self.settings.long_press_speed.value(),
            "long press, fast playback"
        );
        Effect::LongPressStarted
    }

    fn start_quick_seek<E>(&mut self, direction: Direction, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        self.timers.cancel(TimerKind::LongTap);
        if let Interaction::Touch(session) = &mut self.interaction {
            session.begin_quick_seek(direction);
        }
        self.cancel_auto_hide(now);

        let step = self.settings.quick_seek.value();
        let offset_secs = f64::from(step) * direction.sign();
        engine.seek(SeekCommand::Relative { offset_secs });

        let shown = match direction {
            Direction::Forward => i64::from(step),
            Direction::Backward => -i64::from(step),
        };
        self.feedback.quick_seek = Some(shown);
        self.timers
            .arm(TimerKind::QuickSeekBanner, now, self.settings.banner.as_duration());

        tracing::debug!(offset_secs, "vertical swipe, quick seek");
        Effect::QuickSeek { offset_secs }
    }

    fn start_finger_scrub<E>(&mut self, point: Point, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        self.timers.cancel(TimerKind::LongTap);
        let start_secs = engine.position().unwrap_or(0.0);
        let was_playing = self.begin_scrub(start_secs, now, engine);

        let mapping = ScrubMapping::new(point.x, start_secs, self.settings.scrub_rate);
        if let Interaction::Touch(session) = &mut self.interaction {
            session.begin_scrub(ScrubSession::new(mapping, was_playing));
        }

        tracing::debug!(anchor_x = point.x, start_secs, was_playing, "horizontal swipe, scrubbing");
        Effect::ScrubStarted
    }

    fn track_finger_scrub<E>(&mut self, x: f32, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        let duration = engine.duration().unwrap_or(0.0);
        let Interaction::Touch(session) = &mut self.interaction else {
            return Effect::None;
        };
        let Some(scrub) = session.scrub_mut() else {
            return Effect::None;
        };
        let target = scrub.track(x, duration);
        let direction = scrub.progress.direction;

        self.show_scrub_target(target, direction, now, engine);
        Effect::Refresh
    }

    fn drag_bar<E>(&mut self, x: f32, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        let Interaction::SeekBar(mut drag) = self.interaction else {
            return Effect::None;
        };
        let value = drag.track(
            x,
            self.layout.bar_width(),
            self.seek_bar.duration_secs,
            self.settings.seek_bar_drag_threshold,
        );
        let Some(value) = value else {
            self.interaction = Interaction::SeekBar(drag);
            return Effect::None;
        };

        self.cancel_auto_hide(now);
        let started = drag.progress.is_none();
        if started {
            let was_playing = self.begin_scrub(value, now, engine);
            drag.progress = Some(ScrubProgress::new(was_playing, value));
            tracing::debug!(start_secs = value, was_playing, "seek bar drag");
        }

        let direction = if value > self.seek_bar.position_secs {
            Direction::Forward
        } else {
            Direction::Backward
        };
        if let Some(progress) = drag.progress.as_mut() {
            progress.advance(value, direction);
        }
        self.seek_bar.position_secs = value;
        self.interaction = Interaction::SeekBar(drag);

        self.show_scrub_target(value, Some(direction), now, engine);
        if started {
            Effect::ScrubStarted
        } else {
            Effect::Refresh
        }
    }

    /// Shared start of finger and bar scrubs. Returns whether playback has to
    /// resume once the scrub ends.
    fn begin_scrub<E>(&mut self, start_secs: f64, now: Instant, engine: &mut E) -> bool
    where
        E: PlaybackEngine + ?Sized,
    {
        self.cancel_auto_hide(now);

        // A resume still pending from the previous scrub belongs to this one now
        let resume_pending = self.timers.cancel(TimerKind::ResumePlayback);
        let playing = engine.is_paused() == Some(false);
        if playing {
            engine.set_paused(true);
        }

        self.feedback.seek_time = Some(SeekTime {
            target_secs: start_secs,
            direction: None,
        });
        self.preview.clear();
        resume_pending || playing
    }

    fn show_scrub_target<E>(
        &mut self,
        target_secs: f64,
        direction: Option<Direction>,
        now: Instant,
        engine: &mut E,
    ) where
        E: PlaybackEngine + ?Sized,
    {
        self.feedback.seek_time = Some(SeekTime {
            target_secs,
            direction,
        });
        self.clock.show_target(target_secs);
        self.preview.request(target_secs);
        self.throttle.offer(target_secs, now, engine);
    }

    fn finish_scrub<E>(&mut self, progress: ScrubProgress, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        let target_secs = progress.target_secs;
        self.throttle.force(target_secs, now, engine);
        if progress.was_playing {
            self.timers.arm(
                TimerKind::ResumePlayback,
                now,
                self.settings.resume_delay.as_duration(),
            );
        }

        self.feedback.seek_time = None;
        self.preview.clear();
        self.timers.cancel(TimerKind::InteractionGrace);
        self.schedule_seek_bar_hide(now);

        tracing::debug!(target_secs, resume = progress.was_playing, "scrub finished");
        Effect::ScrubFinished { target_secs }
    }

    // =========================================================================
    // Seek bar visibility and banners
    // =========================================================================

    fn cancel_auto_hide(&mut self, now: Instant) {
        self.timers.arm(
            TimerKind::InteractionGrace,
            now,
            self.settings.interaction_grace.as_duration(),
        );
        self.timers.cancel(TimerKind::SeekBarHide);
    }

    fn schedule_seek_bar_hide(&mut self, now: Instant) {
        if self.timers.is_armed(TimerKind::InteractionGrace) {
            return;
        }
        self.timers
            .arm(TimerKind::SeekBarHide, now, self.settings.seek_bar_hide.as_duration());
    }

    fn toggle_video_info(&mut self, now: Instant) -> Effect {
        if self.feedback.video_info.take().is_some() {
            self.timers.cancel(TimerKind::VideoInfoBanner);
            return Effect::InfoToggled(false);
        }
        self.feedback.video_info = Some(self.title.clone());
        self.timers.arm(
            TimerKind::VideoInfoBanner,
            now,
            self.settings.video_info.as_duration(),
        );
        Effect::InfoToggled(true)
    }

    fn tick<E>(&mut self, now: Instant, engine: &mut E) -> Effect
    where
        E: PlaybackEngine + ?Sized,
    {
        let mut effect = Effect::Refresh;
        for kind in self.timers.take_expired(now) {
            match kind {
                TimerKind::LongTap => {
                    if self.start_long_press(engine) == Effect::LongPressStarted {
                        effect = Effect::LongPressStarted;
                    }
                }
                TimerKind::InteractionGrace => {}
                TimerKind::SeekBarHide => self.seek_bar.visible = false,
                TimerKind::ResumePlayback => engine.set_paused(false),
                TimerKind::PlaybackBanner => self.feedback.playback = None,
                TimerKind::QuickSeekBanner => self.feedback.quick_seek = None,
                TimerKind::VolumeBanner => self.feedback.volume = None,
                TimerKind::VideoInfoBanner => self.feedback.video_info = None,
            }
        }

        self.preview.poll();

        let position = engine.position().unwrap_or(0.0);
        let duration = engine.duration().unwrap_or(1.0);
        self.clock.refresh(position, duration, self.scrub_target());

        self.seek_bar.duration_secs = duration;
        let dragging = matches!(
            self.interaction,
            Interaction::SeekBar(BarDrag {
                progress: Some(_),
                ..
            })
        );
        if !dragging {
            self.seek_bar.position_secs = position;
        }
        effect
    }
}
