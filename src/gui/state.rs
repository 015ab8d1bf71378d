//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use iced::Task;

use crate::core::config::PlayerConfig;
use crate::core::now_playing::NowPlaying;
use crate::core::playback::{LoadOutcome, MediaEngine, PlayerEvent};
use crate::core::types::TrackMetadata;

/// App state
pub(crate) struct Tunebox {
    pub config: PlayerConfig,
    pub status: String,

    // Engine (started lazily on first open)
    pub engine: Option<Box<dyn MediaEngine>>,
    pub playback_events: Option<RefCell<Receiver<PlayerEvent>>>,

    // Track
    pub loading: Option<PathBuf>,
    pub current_path: Option<PathBuf>,
    pub now_playing: NowPlaying,
    pub cover: Option<iced::widget::image::Handle>,

    // Transport
    pub is_playing: bool,
    /// The engine let go of the track (ended or stopped); play reopens it.
    pub needs_reload: bool,
    pub volume: u8,
    pub seek_percent: u8,
}

impl Tunebox {
    pub(crate) fn new(config: PlayerConfig) -> Self {
        Self {
            now_playing: NowPlaying::new(&config),
            volume: config.initial_volume,
            config,
            status: "Open an MP3 file to start.".to_string(),

            engine: None,
            playback_events: None,

            loading: None,
            current_path: None,
            cover: None,

            is_playing: false,
            needs_reload: false,
            seek_percent: 0,
        }
    }

    /// Initial state, optionally opening a file passed on the command line.
    pub(crate) fn boot(config: PlayerConfig, initial: Option<PathBuf>) -> (Self, Task<Message>) {
        let state = Self::new(config);
        let task = match initial {
            Some(path) => Task::done(Message::FileChosen(Some(path))),
            None => Task::none(),
        };
        (state, task)
    }
}

impl Default for Tunebox {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // File open flow
    OpenFile,
    FileChosen(Option<PathBuf>),
    MediaReady(PathBuf, LoadOutcome),
    MetadataRead {
        path: PathBuf,
        metadata: TrackMetadata,
        duration_ms: u64,
    },

    // Transport
    TogglePlayPause,
    Previous,
    Next,
    VolumeChanged(u8),
    SeekChanged(u8),

    // Timers
    TickPlayback,
    ScrollTick,
}
