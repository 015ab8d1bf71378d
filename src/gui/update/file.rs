//! gui/update/file.rs
//! Open-file lifecycle:
//!
//! dialog/CLI path -> engine.load -> bounded wait -> tag read (helper thread) -> NowPlaying
//!
//! - Cancelling the dialog is a no-op, not an error.
//! - An engine failure (or timeout) aborts the open; the app keeps running.
//! - A failed open leaves the current track alone.

use std::path::PathBuf;

use iced::Task;
use tracing::{debug, info, warn};

use super::super::state::{Message, Tunebox};
use super::super::util::file_name;
use super::playback::{drop_engine, ensure_engine};
use super::util::spawn_blocking;
use crate::core::playback::{LoadOutcome, wait_until_ready};
use crate::core::tags::read_metadata;
use crate::core::types::TrackMetadata;

pub(crate) fn open_file() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Open MP3 File")
                .add_filter("MP3 Files", &["mp3"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileChosen,
    )
}

pub(crate) fn file_chosen(state: &mut Tunebox, choice: Option<PathBuf>) -> Task<Message> {
    let Some(path) = choice else {
        debug!("file selection cancelled");
        return Task::none();
    };

    if !crate::core::is_mp3(&path) {
        warn!(path = %path.display(), "not an .mp3 file; trying anyway");
    }

    start_load(state, path)
}

/// Hand `path` to the engine and wait (bounded) for it to start playing.
pub(crate) fn start_load(state: &mut Tunebox, path: PathBuf) -> Task<Message> {
    info!(path = %path.display(), "opening");
    let ready = ensure_engine(state).load(path.clone());

    state.loading = Some(path.clone());
    state.status = format!("Loading {}...", file_name(&path));

    let timeout = state.config.load_timeout;
    Task::perform(wait_until_ready(ready, timeout), move |outcome| {
        Message::MediaReady(path, outcome)
    })
}

pub(crate) fn media_ready(
    state: &mut Tunebox,
    path: PathBuf,
    outcome: LoadOutcome,
) -> Task<Message> {
    // A newer open superseded this one.
    if state.loading.as_ref() != Some(&path) {
        debug!(path = %path.display(), "ignoring stale load result");
        return Task::none();
    }

    let duration_ms = match outcome {
        LoadOutcome::Ready { duration_ms } => duration_ms,
        LoadOutcome::StillLoading => {
            warn!(path = %path.display(), "timed out waiting for media");
            if let Some(engine) = &state.engine {
                engine.stop();
            }
            state.loading = None;
            state.status = format!("Failed to load media: {} took too long.", file_name(&path));
            return Task::none();
        }
        LoadOutcome::Failed(reason) => {
            warn!(path = %path.display(), %reason, "media load failed");
            state.loading = None;
            state.status = format!("Failed to load media: {reason}");
            return Task::none();
        }
        LoadOutcome::Disconnected => {
            warn!(path = %path.display(), "playback engine is gone");
            drop_engine(state);
            state.loading = None;
            state.status = "Failed to load media: playback engine stopped. Try again.".into();
            return Task::none();
        }
    };

    let read_path = path.clone();
    Task::perform(
        spawn_blocking(move || read_metadata(&read_path)),
        move |metadata| Message::MetadataRead {
            path,
            metadata: metadata.unwrap_or_default(),
            duration_ms,
        },
    )
}

pub(crate) fn metadata_read(
    state: &mut Tunebox,
    path: PathBuf,
    metadata: TrackMetadata,
    duration_ms: u64,
) -> Task<Message> {
    if state.loading.as_ref() != Some(&path) {
        debug!(path = %path.display(), "ignoring stale metadata");
        return Task::none();
    }

    state.cover = metadata.album_art.as_ref().map(|art| {
        iced::widget::image::Handle::from_rgba(art.width, art.height, art.rgba.clone())
    });
    state.now_playing.track_loaded(metadata, duration_ms);

    state.status = format!("Playing: {}", file_name(&path));
    state.loading = None;
    state.current_path = Some(path);
    state.is_playing = true;
    state.needs_reload = false;
    state.seek_percent = 0;

    Task::none()
}
