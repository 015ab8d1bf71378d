//! Widgets for the single player window.

use iced::widget::{button, column, container, image, row, slider, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Message, Tunebox};
use super::super::util::volume_label;
use super::constants::{COVER, INFO_TEXT, STATUS_TEXT, TIME_TEXT, VOLUME_SLIDER_W};

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(28), text("no cover").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fixed(size))
    .center_y(Length::Fixed(size))
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover(handle: Option<&image::Handle>, size: f32) -> Element<'static, Message> {
    match handle {
        Some(h) => container(image(h.clone()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fixed(size))
            .center_y(Length::Fixed(size))
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// Album art + scrolling info label + time label.
pub(crate) fn now_playing_panel(state: &Tunebox) -> iced::widget::Row<'_, Message> {
    let np = &state.now_playing;

    row![
        cover(state.cover.as_ref(), COVER),
        column![
            text(np.scroll_display()).size(INFO_TEXT),
            text(np.time_label().to_string()).size(TIME_TEXT),
        ]
        .spacing(8)
        .width(Length::Fill),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
}

pub(crate) fn seek_bar(state: &Tunebox) -> iced::widget::Slider<'_, u8, Message> {
    slider(0..=100u8, state.seek_percent, Message::SeekChanged).width(Length::Fill)
}

/// Prev / play-pause / next, open, volume.
pub(crate) fn transport_bar(state: &Tunebox) -> iced::widget::Row<'_, Message> {
    let play_label = if state.is_playing { "⏸" } else { "⏯" };

    row![
        button("⏮").on_press(Message::Previous),
        button(play_label).on_press(Message::TogglePlayPause),
        button("⏭").on_press(Message::Next),
        button("Open…").on_press(Message::OpenFile),
        container(
            row![
                slider(0..=100u8, state.volume, Message::VolumeChanged)
                    .width(Length::Fixed(VOLUME_SLIDER_W)),
                text(volume_label(state.volume)).size(TIME_TEXT),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
        )
        .align_right(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

pub(crate) fn status_line(state: &Tunebox) -> iced::widget::Text<'_> {
    text(&state.status).size(STATUS_TEXT)
}
