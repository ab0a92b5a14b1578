// SPDX-License-Identifier: MPL-2.0
//! `seek_overlay` is a touch-gesture overlay for video players.
//!
//! Taps pause and resume, a long press plays fast while held, horizontal
//! swipes scrub through the video with throttled exact seeks and thumbnail
//! previews, and vertical swipes jump a fixed step. The overlay drives any
//! player through the [`application::port::PlaybackEngine`] port; the demo
//! binary runs it over a simulated engine in an Iced window.
//!
//! # Layout
//!
//! - [`domain`] - Value types: points, directions, clamped newtypes, clock text
//! - [`gesture`] - Swipe classification and the single touch session
//! - [`seek`] - Scrub mapping and the seek throttle
//! - [`preview`] - Thumbnail bridge and background decoding
//! - [`overlay`] - The orchestrating state machine
//! - [`application`] - Ports to the playback engine and preview decoder
//! - [`infrastructure`] - Simulated engine, optional `FFmpeg` previews
//! - [`config`], [`i18n`], [`ui`], [`app`] - Settings, localization and the demo

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod i18n;
pub mod infrastructure;
pub mod overlay;
pub mod preview;
pub mod seek;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
