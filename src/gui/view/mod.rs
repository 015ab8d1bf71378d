//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod widgets;

use iced::widget::{Column, column};

use super::state::{Message, Tunebox};

pub(crate) fn view(state: &Tunebox) -> Column<'_, Message> {
    column![
        widgets::now_playing_panel(state),
        widgets::seek_bar(state),
        widgets::transport_bar(state),
        widgets::status_line(state),
    ]
    .spacing(12)
    .padding(12)
}
