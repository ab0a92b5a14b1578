// SPDX-License-Identifier: MPL-2.0
//! Styles for the banners, the time labels and the seek bar track.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_400, PRIMARY_400, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Rounded translucent box behind banners and the video title.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Strip holding the seek bar and its time labels.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Played part of the track.
#[must_use]
pub fn track_played(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PRIMARY_400)),
        ..Default::default()
    }
}

/// Remaining part of the track.
#[must_use]
pub fn track_remaining(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..GRAY_400
        })),
        ..Default::default()
    }
}
