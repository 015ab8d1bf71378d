//! gui/update/playback.rs
//! GUI <-> playback engine bridge.
//!
//! Design goals:
//! - GUI never touches rodio/symphonia directly.
//! - Engine events arrive via TickPlayback polling; label text comes from `NowPlaying`.

use std::cell::RefCell;

use iced::Task;
use tracing::{debug, info, warn};

use super::super::state::{Message, Tunebox};
use super::super::util::{position_percent, seek_target_ms};
use super::file::start_load;
use crate::core::config::volume_to_gain;
use crate::core::playback::{MediaEngine, PlayerEvent, start_playback};
use crate::core::types::PlaybackPosition;

/// Running engine, starting one if there is none (first open, or the last one died).
pub(crate) fn ensure_engine(state: &mut Tunebox) -> &dyn MediaEngine {
    let engine = state.engine.get_or_insert_with(|| {
        let (controller, events) = start_playback(state.config.engine_tick);
        controller.set_volume(volume_to_gain(state.volume));
        state.playback_events = Some(RefCell::new(events));
        Box::new(controller) as Box<dyn MediaEngine>
    });
    &**engine
}

/// Forget a dead engine so the next open starts a new one.
pub(crate) fn drop_engine(state: &mut Tunebox) {
    state.engine = None;
    state.playback_events = None;
    state.is_playing = false;
    state.needs_reload = true;
    state.now_playing.stopped();
}

pub(crate) fn drain_events(state: &mut Tunebox) -> Task<Message> {
    let Some(rx_cell) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<PlayerEvent> = Vec::new();
    {
        // Receiver::try_recv only needs &self, so borrow() is enough.
        let rx = rx_cell.borrow();
        while let Ok(ev) = rx.try_recv() {
            drained.push(ev);
        }
    }

    for ev in drained {
        handle_event(state, ev);
    }

    Task::none()
}

pub(crate) fn handle_event(state: &mut Tunebox, event: PlayerEvent) {
    match event {
        // Readiness is reported through LoadOutcome; this is informational.
        PlayerEvent::Loaded { path, duration_ms } => {
            debug!(path = %path.display(), ?duration_ms, "engine loaded");
        }
        PlayerEvent::Position {
            position_ms,
            duration_ms,
        } => {
            let total_ms = duration_ms.unwrap_or_else(|| state.now_playing.total_ms());
            state
                .now_playing
                .on_position(PlaybackPosition::new(position_ms, total_ms));
            state.seek_percent = position_percent(position_ms, total_ms);
        }
        PlayerEvent::Paused => {
            state.is_playing = false;
            state.now_playing.pause();
        }
        PlayerEvent::Resumed => {
            state.is_playing = true;
            state.now_playing.resume();
        }
        PlayerEvent::TrackEnded | PlayerEvent::Stopped => {
            state.is_playing = false;
            state.needs_reload = true;
            state.now_playing.stopped();
        }
        PlayerEvent::Error(err) => {
            warn!(%err, "playback error");
            state.status = format!("Playback error: {err}");
        }
    }
}

pub(crate) fn toggle_play_pause(state: &mut Tunebox) -> Task<Message> {
    let Some(path) = state.current_path.clone() else {
        state.status = "No media loaded. Please open a file first.".into();
        return Task::none();
    };

    // Nothing left in the engine to resume: play the file again from the top.
    if state.needs_reload || state.engine.is_none() {
        debug!(path = %path.display(), "replaying");
        return start_load(state, path);
    }

    let Some(engine) = &state.engine else {
        return Task::none();
    };

    if state.is_playing {
        engine.pause();
        state.is_playing = false;
        state.now_playing.pause();
    } else {
        engine.play();
        state.is_playing = true;
        state.now_playing.resume();
    }

    debug!(playing = state.is_playing, "play/pause");
    Task::none()
}

// No playlist yet: previous/next only log.
pub(crate) fn previous(_state: &mut Tunebox) -> Task<Message> {
    info!("previous track");
    Task::none()
}

pub(crate) fn next(_state: &mut Tunebox) -> Task<Message> {
    info!("next track");
    Task::none()
}

pub(crate) fn set_volume(state: &mut Tunebox, volume: u8) -> Task<Message> {
    let volume = volume.min(100);
    state.volume = volume;

    if let Some(engine) = &state.engine {
        engine.set_volume(volume_to_gain(volume));
    }

    debug!(volume, "volume changed");
    Task::none()
}

/// Seek slider moved. Only honored while playing.
pub(crate) fn seek(state: &mut Tunebox, percent: u8) -> Task<Message> {
    state.seek_percent = percent.min(100);

    if !state.is_playing {
        return Task::none();
    }

    let Some(engine) = &state.engine else {
        return Task::none();
    };

    let target_ms = seek_target_ms(percent, state.now_playing.total_ms());
    debug!(percent, target_ms, "seek");
    engine.seek(target_ms);

    Task::none()
}

pub(crate) fn scroll_tick(state: &mut Tunebox) -> Task<Message> {
    state.now_playing.tick();
    Task::none()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::fake::{Call, FakeEngine};
    use super::super::file::{media_ready, metadata_read};
    use super::*;
    use crate::core::playback::LoadOutcome;
    use crate::core::types::TrackMetadata;

    fn playing_state() -> (Tunebox, FakeEngine) {
        let fake = FakeEngine::default();
        let mut state = Tunebox::default();
        state.engine = Some(Box::new(fake.clone()));
        state.now_playing.track_loaded(
            TrackMetadata {
                title: Some("A Fairly Long Song Name".into()),
                artist: Some("Band".into()),
                album_art: None,
            },
            181_000,
        );
        state.current_path = Some(PathBuf::from("/music/song.mp3"));
        state.is_playing = true;
        (state, fake)
    }

    #[test]
    fn toggle_without_media_only_reports() {
        let mut state = Tunebox::default();
        let _ = toggle_play_pause(&mut state);
        assert_eq!(state.status, "No media loaded. Please open a file first.");
        assert!(!state.is_playing);
    }

    #[test]
    fn toggle_pauses_and_resumes_scrolling() {
        let (mut state, fake) = playing_state();
        state.now_playing.tick();

        let _ = toggle_play_pause(&mut state);
        assert!(!state.is_playing);
        assert!(!state.now_playing.is_scrolling());

        let _ = toggle_play_pause(&mut state);
        assert!(state.is_playing);
        assert!(state.now_playing.is_scrolling());
        assert_eq!(state.now_playing.scroll_offset(), 1);

        assert_eq!(fake.calls(), vec![Call::Pause, Call::Play]);
    }

    #[test]
    fn seek_uses_percent_of_length() {
        let (mut state, fake) = playing_state();
        let _ = seek(&mut state, 50);
        assert_eq!(fake.calls(), vec![Call::Seek(90_000)]);
    }

    #[test]
    fn seek_while_paused_is_ignored() {
        let (mut state, fake) = playing_state();
        state.is_playing = false;
        let _ = seek(&mut state, 50);
        assert!(fake.calls().is_empty());
        assert_eq!(state.seek_percent, 50);
    }

    #[test]
    fn volume_maps_to_gain() {
        let (mut state, fake) = playing_state();
        let _ = set_volume(&mut state, 80);
        assert_eq!(state.volume, 80);
        assert_eq!(fake.calls(), vec![Call::SetVolume(0.8)]);
    }

    #[test]
    fn position_events_update_time_and_slider() {
        let (mut state, _fake) = playing_state();

        handle_event(
            &mut state,
            PlayerEvent::Position {
                position_ms: 65_000,
                duration_ms: Some(181_000),
            },
        );
        assert_eq!(state.now_playing.time_label(), "01:05 / 03:01");
        assert_eq!(state.seek_percent, 35);

        // Unknown duration falls back to the length known at load time.
        handle_event(
            &mut state,
            PlayerEvent::Position {
                position_ms: 66_000,
                duration_ms: None,
            },
        );
        assert_eq!(state.now_playing.time_label(), "01:06 / 03:01");
    }

    #[test]
    fn track_end_stops_scrolling() {
        let (mut state, _fake) = playing_state();
        handle_event(&mut state, PlayerEvent::TrackEnded);
        assert!(!state.is_playing);
        assert!(!state.now_playing.is_scrolling());
        assert!(!state.now_playing.tick());
    }

    #[test]
    fn play_after_track_end_reopens_the_file() {
        let (mut state, fake) = playing_state();
        let path = PathBuf::from("/music/song.mp3");
        handle_event(&mut state, PlayerEvent::TrackEnded);

        let _ = toggle_play_pause(&mut state);
        assert_eq!(fake.calls(), vec![Call::Load(path.clone())]);
        assert_eq!(state.loading, Some(path.clone()));
        assert!(!state.is_playing);
        assert!(!state.now_playing.is_scrolling());

        let _ = media_ready(
            &mut state,
            path.clone(),
            LoadOutcome::Ready {
                duration_ms: 181_000,
            },
        );
        let _ = metadata_read(&mut state, path, TrackMetadata::default(), 181_000);
        assert!(state.is_playing);
        assert!(!state.needs_reload);
        assert!(state.now_playing.is_scrolling());
    }

    #[test]
    fn play_after_stop_reopens_the_file() {
        let (mut state, fake) = playing_state();
        handle_event(&mut state, PlayerEvent::Stopped);

        let _ = toggle_play_pause(&mut state);
        assert_eq!(
            fake.calls(),
            vec![Call::Load(PathBuf::from("/music/song.mp3"))]
        );
    }

    #[test]
    fn unknown_length_keeps_the_initial_time_label() {
        let (mut state, _fake) = playing_state();
        state.now_playing.track_loaded(TrackMetadata::default(), 0);

        handle_event(
            &mut state,
            PlayerEvent::Position {
                position_ms: 65_000,
                duration_ms: None,
            },
        );
        assert_eq!(state.now_playing.time_label(), "00:00 / 00:00");
        assert_eq!(state.seek_percent, 0);
    }

    #[test]
    fn engine_errors_show_in_status() {
        let (mut state, _fake) = playing_state();
        handle_event(&mut state, PlayerEvent::Error("seek failed".into()));
        assert_eq!(state.status, "Playback error: seek failed");
    }

    #[test]
    fn scroll_tick_rotates_label() {
        let (mut state, _fake) = playing_state();
        let before = state.now_playing.scroll_display();
        let _ = scroll_tick(&mut state);
        assert_ne!(state.now_playing.scroll_display(), before);
    }
}
