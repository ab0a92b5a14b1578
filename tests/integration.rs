// SPDX-License-Identifier: MPL-2.0
use seek_overlay::config::{self, Config, GeneralConfig, GestureConfig, SeekConfig, LOAD_ERROR_KEY};
use seek_overlay::domain::video::PlaybackSpeed;
use seek_overlay::i18n::I18n;
use seek_overlay::overlay::{Banner, PlaybackCue, Settings};
use seek_overlay::ui::overlay_view::banner_text;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(
        banner_text(&Banner::Playback(PlaybackCue::Pause), &i18n, PlaybackSpeed::default()),
        "Pause"
    );

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write french config");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(
        banner_text(&Banner::Playback(PlaybackCue::Resume), &i18n, PlaybackSpeed::default()),
        "Reprendre"
    );
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_tuned_config_reaches_overlay_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let tuned = Config {
        gesture: GestureConfig {
            long_tap_ms: Some(500),
            long_press_speed: Some(3.0),
            ..GestureConfig::default()
        },
        seek: SeekConfig {
            throttle_ms: Some(100),
            quick_seek_secs: Some(10),
            ..SeekConfig::default()
        },
        ..Config::default()
    };
    config::save_with_override(&tuned, Some(dir.path().to_path_buf()))
        .expect("Failed to save tuned config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, tuned);

    let settings = Settings::from(&loaded);
    assert_eq!(settings.long_tap.as_duration(), Duration::from_millis(500));
    assert_eq!(settings.long_press_speed, PlaybackSpeed::new(3.0));
    assert_eq!(settings.throttle.as_duration(), Duration::from_millis(100));
    assert_eq!(settings.quick_seek.value(), 10);
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[gesture]\nlong_press_speed = 1000.0\npixels_per_second = -5.0\n\n[seek]\nthrottle_ms = 0\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let settings = Settings::from(&loaded);
    let defaults = Settings::default();

    assert!(settings.long_press_speed.is_max());
    assert!(settings.scrub_rate.value() >= 1.0);
    assert!(settings.throttle.as_duration() >= Duration::from_millis(10));
    assert_eq!(settings.tap_max, defaults.tap_max);
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[gesture\nlong_tap_ms = ")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_ne!(i18n.tr(LOAD_ERROR_KEY), LOAD_ERROR_KEY);
}
