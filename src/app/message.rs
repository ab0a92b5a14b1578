// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A native event not captured by any widget.
    RawEvent(iced::Event),
    /// Periodic wake-up driving deadlines and the clock.
    Tick(Instant),
    /// Sent once after boot to announce the media to the overlay.
    MediaReady,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional media path; names the video and opens previews.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SEEK_OVERLAY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Length of the simulated media in seconds.
    pub duration_secs: Option<f64>,
}
