// SPDX-License-Identifier: MPL-2.0
//! Rendering of the overlay state.
//!
//! The view is layered: the video surface, the title at the top, the active
//! banner in the middle, and the seek bar with its time labels and preview
//! at the bottom. Nothing here is interactive; input reaches the overlay
//! through [`crate::ui::input`].

use crate::domain::media::PreviewImage;
use crate::domain::video::PlaybackSpeed;
use crate::i18n::I18n;
use crate::overlay::{Banner, PlaybackCue, SeekBar, State};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, text, Column, Container, Row, Stack};
use iced::{Background, Element, Length, Theme};

/// Resolution of the drawn track, in portions.
const TRACK_PORTIONS: u16 = 1000;

/// Builds the overlay for `state`.
pub fn view<'a, M: 'a>(state: &State, i18n: &I18n) -> Element<'a, M> {
    let surface = Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            ..Default::default()
        });

    let mut stack = Stack::new().push(surface);

    if let Some(title) = &state.feedback().video_info {
        let label = Container::new(text(title.clone()).size(typography::TITLE_MD))
            .padding(spacing::SM)
            .style(styles::overlay::indicator(radius::MD));
        stack = stack.push(
            Container::new(label)
                .width(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Top),
        );
    }

    if let Some(banner) = state.active_banner() {
        let message = banner_text(&banner, i18n, state.settings().long_press_speed);
        let label = Container::new(text(message).size(typography::BANNER))
            .padding([spacing::XS, spacing::MD])
            .style(styles::overlay::indicator(radius::MD));
        stack = stack.push(
            Container::new(label)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    if state.seek_bar().visible {
        let mut bottom = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center);
        if let Some(preview) = state.preview_image() {
            bottom = bottom.push(preview_thumbnail(preview));
        }
        bottom = bottom.push(controls(state));

        stack = stack.push(
            Container::new(bottom)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        );
    }

    stack.width(Length::Fill).height(Length::Fill).into()
}

/// Localized text of a banner.
#[must_use]
pub fn banner_text(banner: &Banner, i18n: &I18n, boost: PlaybackSpeed) -> String {
    match banner {
        Banner::Volume(percent) => {
            i18n.tr_with_args("overlay-volume", &[("percent", &percent.to_string())])
        }
        Banner::SpeedBoost => {
            i18n.tr_with_args("overlay-speed-boost", &[("speed", &boost.value().to_string())])
        }
        Banner::QuickSeek(offset) => {
            i18n.tr_with_args("overlay-quick-seek", &[("offset", &format!("{offset:+}"))])
        }
        Banner::SeekTime(label) => label.clone(),
        Banner::Playback(PlaybackCue::Pause) => i18n.tr("overlay-pause"),
        Banner::Playback(PlaybackCue::Resume) => i18n.tr("overlay-resume"),
    }
}

/// Played and remaining portions of the track, never both zero.
#[must_use]
pub fn track_portions(bar: &SeekBar) -> (u16, u16) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let played = (bar.fraction() * f32::from(TRACK_PORTIONS)).round() as u16;
    let played = played.min(TRACK_PORTIONS);
    (played, TRACK_PORTIONS - played)
}

fn preview_thumbnail<'a, M: 'a>(preview: &PreviewImage) -> Element<'a, M> {
    let handle =
        image::Handle::from_rgba(preview.width(), preview.height(), preview.to_rgba_vec());
    Container::new(
        image(handle)
            .width(Length::Fixed(sizing::PREVIEW_W))
            .height(Length::Fixed(sizing::PREVIEW_H)),
    )
    .padding(spacing::XXS)
    .style(styles::overlay::indicator(radius::SM))
    .into()
}

fn controls<'a, M: 'a>(state: &State) -> Element<'a, M> {
    let (played, remaining) = track_portions(state.seek_bar());

    let mut track = Row::new().width(Length::Fill).align_y(Vertical::Center);
    if played > 0 {
        track = track.push(
            Container::new(text(""))
                .width(Length::FillPortion(played))
                .height(Length::Fixed(sizing::TIMELINE_TRACK))
                .style(styles::overlay::track_played),
        );
    }
    if remaining > 0 {
        track = track.push(
            Container::new(text(""))
                .width(Length::FillPortion(remaining))
                .height(Length::Fixed(sizing::TIMELINE_TRACK))
                .style(styles::overlay::track_remaining),
        );
    }

    let time_label = |value: &str, align: Horizontal| {
        Container::new(text(value.to_string()).size(typography::BODY))
            .width(Length::Fixed(sizing::TIME_LABEL_WIDTH))
            .align_x(align)
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(time_label(state.clock().current(), Horizontal::Left))
        .push(track)
        .push(time_label(state.clock().total(), Horizontal::Right));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(styles::overlay::controls_container)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::config::Config::default())
    }

    #[test]
    fn banner_texts_are_localized() {
        let i18n = english();
        let speed = PlaybackSpeed::new(2.0);

        assert_eq!(banner_text(&Banner::Volume(46), &i18n, speed), "Volume: 46%");
        assert_eq!(banner_text(&Banner::SpeedBoost, &i18n, speed), "2X");
        assert_eq!(banner_text(&Banner::QuickSeek(5), &i18n, speed), "+5");
        assert_eq!(banner_text(&Banner::QuickSeek(-5), &i18n, speed), "-5");
        assert_eq!(
            banner_text(&Banner::Playback(PlaybackCue::Resume), &i18n, speed),
            "Resume"
        );
        assert_eq!(
            banner_text(&Banner::SeekTime("02:00 +".to_string()), &i18n, speed),
            "02:00 +"
        );
    }

    #[test]
    fn fractional_boost_keeps_decimals() {
        let i18n = english();
        assert_eq!(
            banner_text(&Banner::SpeedBoost, &i18n, PlaybackSpeed::new(1.5)),
            "1.5X"
        );
    }

    #[test]
    fn track_portions_follow_position() {
        let bar = SeekBar {
            visible: true,
            position_secs: 30.0,
            duration_secs: 120.0,
        };
        assert_eq!(track_portions(&bar), (250, 750));

        let start = SeekBar {
            position_secs: 0.0,
            ..bar
        };
        assert_eq!(track_portions(&start), (0, 1000));
    }
}
