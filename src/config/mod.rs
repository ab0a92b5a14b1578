// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[gesture]` - Touch thresholds, long-tap timing and scrub rate
//! - `[seek]` - Seek throttling, quick-seek step, resume delay, previews
//! - `[feedback]` - Banner and seek bar lifetimes
//!
//! Every field is optional. Missing fields take the values in [`defaults`],
//! and out-of-range values are clamped when converted into
//! [`overlay::Settings`](crate::overlay::Settings).
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `SEEK_OVERLAY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use seek_overlay::config;
//! use std::path::PathBuf;
//!
//! let dir = Some(PathBuf::from("/tmp/seek-overlay"));
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(dir.clone());
//!
//! // Modify a setting
//! config.seek.quick_seek_secs = Some(10);
//!
//! // Save the modified configuration
//! config::save_with_override(&config, dir).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gesture recognition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Hold time before a still press becomes a long-tap (milliseconds).
    #[serde(default = "default_long_tap_ms", skip_serializing_if = "Option::is_none")]
    pub long_tap_ms: Option<u64>,

    /// Presses shorter than this are taps (milliseconds).
    #[serde(default = "default_tap_max_ms", skip_serializing_if = "Option::is_none")]
    pub tap_max_ms: Option<u64>,

    /// Horizontal travel that starts a scrub (pixels).
    #[serde(
        default = "default_horizontal_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub horizontal_threshold_px: Option<f32>,

    /// Vertical travel that triggers a quick seek (pixels).
    #[serde(
        default = "default_vertical_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub vertical_threshold_px: Option<f32>,

    /// Vertical drift tolerated by a horizontal swipe (pixels).
    #[serde(
        default = "default_max_vertical_drift_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_vertical_drift_px: Option<f32>,

    /// Horizontal drift tolerated by a vertical swipe (pixels).
    #[serde(
        default = "default_max_horizontal_drift_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_horizontal_drift_px: Option<f32>,

    /// Playback speed while long-tapping.
    #[serde(
        default = "default_long_press_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_press_speed: Option<f64>,

    /// Scrub sensitivity in pixels per second of media.
    #[serde(
        default = "default_pixels_per_second",
        skip_serializing_if = "Option::is_none"
    )]
    pub pixels_per_second: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_tap_ms: default_long_tap_ms(),
            tap_max_ms: default_tap_max_ms(),
            horizontal_threshold_px: default_horizontal_threshold_px(),
            vertical_threshold_px: default_vertical_threshold_px(),
            max_vertical_drift_px: default_max_vertical_drift_px(),
            max_horizontal_drift_px: default_max_horizontal_drift_px(),
            long_press_speed: default_long_press_speed(),
            pixels_per_second: default_pixels_per_second(),
        }
    }
}

/// Seek pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeekConfig {
    /// Minimum spacing between seeks sent while dragging (milliseconds).
    #[serde(default = "default_throttle_ms", skip_serializing_if = "Option::is_none")]
    pub throttle_ms: Option<u64>,

    /// Quick-seek jump for vertical swipes (seconds).
    #[serde(
        default = "default_quick_seek_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub quick_seek_secs: Option<u32>,

    /// Delay between the final seek and resuming playback (milliseconds).
    #[serde(
        default = "default_resume_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_delay_ms: Option<u64>,

    /// Travel needed before a seek bar drag moves (pixels).
    #[serde(
        default = "default_seek_bar_drag_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_bar_drag_threshold_px: Option<f32>,

    /// Show thumbnail previews while scrubbing.
    #[serde(
        default = "default_preview_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_enabled: Option<bool>,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            throttle_ms: default_throttle_ms(),
            quick_seek_secs: default_quick_seek_secs(),
            resume_delay_ms: default_resume_delay_ms(),
            seek_bar_drag_threshold_px: default_seek_bar_drag_threshold_px(),
            preview_enabled: default_preview_enabled(),
        }
    }
}

/// On-screen feedback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackConfig {
    /// Lifetime of volume, quick-seek and play/pause banners (milliseconds).
    #[serde(default = "default_banner_ms", skip_serializing_if = "Option::is_none")]
    pub banner_ms: Option<u64>,

    /// Lifetime of the video info banner (milliseconds).
    #[serde(
        default = "default_video_info_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_info_ms: Option<u64>,

    /// Idle time before the seek bar hides (milliseconds).
    #[serde(
        default = "default_seek_bar_hide_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_bar_hide_ms: Option<u64>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            banner_ms: default_banner_ms(),
            video_info_ms: default_video_info_ms(),
            seek_bar_hide_ms: default_seek_bar_hide_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Overlay configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub seek: SeekConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_long_tap_ms() -> Option<u64> {
    Some(DEFAULT_LONG_TAP_MS)
}

fn default_tap_max_ms() -> Option<u64> {
    Some(DEFAULT_TAP_MAX_MS)
}

fn default_horizontal_threshold_px() -> Option<f32> {
    Some(DEFAULT_HORIZONTAL_THRESHOLD_PX)
}

fn default_vertical_threshold_px() -> Option<f32> {
    Some(DEFAULT_VERTICAL_THRESHOLD_PX)
}

fn default_max_vertical_drift_px() -> Option<f32> {
    Some(DEFAULT_MAX_VERTICAL_DRIFT_PX)
}

fn default_max_horizontal_drift_px() -> Option<f32> {
    Some(DEFAULT_MAX_HORIZONTAL_DRIFT_PX)
}

fn default_long_press_speed() -> Option<f64> {
    Some(DEFAULT_LONG_PRESS_SPEED)
}

fn default_pixels_per_second() -> Option<f32> {
    Some(DEFAULT_PIXELS_PER_SECOND)
}

fn default_throttle_ms() -> Option<u64> {
    Some(DEFAULT_SEEK_THROTTLE_MS)
}

fn default_quick_seek_secs() -> Option<u32> {
    Some(DEFAULT_QUICK_SEEK_SECS)
}

fn default_resume_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESUME_DELAY_MS)
}

fn default_seek_bar_drag_threshold_px() -> Option<f32> {
    Some(DEFAULT_SEEK_BAR_DRAG_THRESHOLD_PX)
}

fn default_preview_enabled() -> Option<bool> {
    Some(DEFAULT_PREVIEW_ENABLED)
}

fn default_banner_ms() -> Option<u64> {
    Some(DEFAULT_BANNER_MS)
}

fn default_video_info_ms() -> Option<u64> {
    Some(DEFAULT_VIDEO_INFO_MS)
}

fn default_seek_bar_hide_ms() -> Option<u64> {
    Some(DEFAULT_SEEK_BAR_HIDE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "falling back to default config");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            gesture: GestureConfig {
                long_tap_ms: Some(450),
                pixels_per_second: Some(80.0),
                ..GestureConfig::default()
            },
            seek: SeekConfig {
                quick_seek_secs: Some(10),
                preview_enabled: Some(false),
                ..SeekConfig::default()
            },
            feedback: FeedbackConfig {
                seek_bar_hide_ms: Some(6000),
                ..FeedbackConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.gesture.long_tap_ms, Some(300));
        assert_eq!(config.gesture.tap_max_ms, Some(150));
        assert_eq!(config.gesture.horizontal_threshold_px, Some(30.0));
        assert_eq!(config.gesture.vertical_threshold_px, Some(40.0));
        assert_eq!(config.seek.throttle_ms, Some(50));
        assert_eq!(config.seek.quick_seek_secs, Some(5));
        assert_eq!(config.seek.resume_delay_ms, Some(100));
        assert_eq!(config.seek.preview_enabled, Some(true));
        assert_eq!(config.feedback.banner_ms, Some(1000));
        assert_eq!(config.feedback.video_info_ms, Some(4000));
        assert_eq!(config.feedback.seek_bar_hide_ms, Some(4000));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[seek]
quick_seek_secs = 15
"#,
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.seek.quick_seek_secs, Some(15));
        assert_eq!(loaded.seek.throttle_ms, Some(DEFAULT_SEEK_THROTTLE_MS));
        assert_eq!(loaded.gesture, GestureConfig::default());
        assert_eq!(loaded.feedback, FeedbackConfig::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[gesture]"), "should have [gesture] section");
        assert!(content.contains("[seek]"), "should have [seek] section");
        assert!(content.contains("[feedback]"), "should have [feedback] section");
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn wrong_value_type_is_a_load_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[gesture]\nlong_tap_ms = \"slow\"\n",
        )
        .expect("write file");

        let (_, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }
}
