//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Tunebox};

mod file;
mod playback;
mod util;

pub(crate) fn update(state: &mut Tunebox, message: Message) -> Task<Message> {
    match message {
        // Open
        Message::OpenFile => file::open_file(),
        Message::FileChosen(choice) => file::file_chosen(state, choice),
        Message::MediaReady(path, outcome) => file::media_ready(state, path, outcome),
        Message::MetadataRead {
            path,
            metadata,
            duration_ms,
        } => file::metadata_read(state, path, metadata, duration_ms),

        // Transport
        Message::TogglePlayPause => playback::toggle_play_pause(state),
        Message::Previous => playback::previous(state),
        Message::Next => playback::next(state),
        Message::VolumeChanged(v) => playback::set_volume(state, v),
        Message::SeekChanged(p) => playback::seek(state, p),

        // Timers
        Message::TickPlayback => playback::drain_events(state),
        Message::ScrollTick => playback::scroll_tick(state),
    }
}
