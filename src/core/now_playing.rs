//! core/now_playing.rs
//!
//! Everything the "now playing" area shows, derived from metadata + engine events.
//! The GUI forwards events here and renders the getters; no iced types involved.

use tracing::debug;

use crate::core::config::PlayerConfig;
use crate::core::sync::{Marquee, initial_time_label, time_label_update};
use crate::core::types::{AlbumArt, PlaybackPosition, TrackMetadata};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const NOTHING_LOADED: &str = "No track loaded";
pub const EMPTY_TIME_LABEL: &str = "00:00 / 00:00";

/// `Title: {title} : Artist: {artist}` with "Unknown" fallbacks.
pub fn info_label(meta: &TrackMetadata) -> String {
    let title = meta.title.as_deref().unwrap_or(UNKNOWN_TITLE);
    let artist = meta.artist.as_deref().unwrap_or(UNKNOWN_ARTIST);
    format!("Title: {title} : Artist: {artist}")
}

#[derive(Debug, Clone)]
pub struct NowPlaying {
    marquee: Marquee,
    time_label: String,
    total_ms: u64,
    album_art: Option<AlbumArt>,
    loaded: bool,
}

impl Default for NowPlaying {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}

impl NowPlaying {
    pub fn new(config: &PlayerConfig) -> Self {
        Self::with_width(config.marquee_width)
    }

    fn with_width(marquee_width: usize) -> Self {
        let mut marquee = Marquee::new(marquee_width);
        marquee.load(NOTHING_LOADED);

        Self {
            marquee,
            time_label: EMPTY_TIME_LABEL.to_string(),
            total_ms: 0,
            album_art: None,
            loaded: false,
        }
    }

    /// A new file is ready: replace everything and start scrolling from offset 0.
    pub fn track_loaded(&mut self, meta: TrackMetadata, total_ms: u64) {
        let label = info_label(&meta);
        debug!(label = %label, total_ms, "track loaded");

        self.marquee.load(&label);
        self.time_label = initial_time_label(total_ms);
        self.total_ms = total_ms;
        self.album_art = meta.album_art;
        self.loaded = true;

        self.marquee.start();
    }

    /// Position-change notification. Zero position/duration keeps the old label.
    ///
    /// A file whose length nobody could determine reports 0 for the whole
    /// track, so its label stays at `00:00 / 00:00` while it plays.
    pub fn on_position(&mut self, pos: PlaybackPosition) {
        if pos.total_ms > 0 {
            self.total_ms = pos.total_ms;
        }
        if let Some(label) = time_label_update(pos) {
            self.time_label = label;
        }
    }

    pub fn tick(&mut self) -> bool {
        self.marquee.tick()
    }

    pub fn pause(&mut self) {
        self.marquee.stop();
    }

    pub fn resume(&mut self) {
        if self.loaded {
            self.marquee.start();
        }
    }

    /// Engine stopped or the track ended: stop scrolling, keep the labels.
    pub fn stopped(&mut self) {
        self.marquee.stop();
    }

    pub fn clear(&mut self) {
        *self = Self::with_width(self.marquee.width());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_scrolling(&self) -> bool {
        self.marquee.is_scrolling()
    }

    pub fn info_text(&self) -> &str {
        self.marquee.text()
    }

    pub fn scroll_display(&self) -> String {
        self.marquee.display()
    }

    pub fn scroll_offset(&self) -> usize {
        self.marquee.offset()
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn album_art(&self) -> Option<&AlbumArt> {
        self.album_art.as_ref()
    }
}
