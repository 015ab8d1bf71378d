//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are plain bags of data
//! - No GUI code
//! - No tag parsing code

use std::fmt;

/// Best-effort metadata for the currently loaded file.
///
/// Every field is optional:
/// - `Some(value)` = the tag was present and readable
/// - `None` = unknown (missing tag, unreadable container, undecodable picture)
///
/// Built once per opened file and replaced wholesale when a new one is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    /// ID3 Title (TIT2)
    pub title: Option<String>,

    /// ID3 Artist (TPE1)
    pub artist: Option<String>,

    /// First embedded picture (APIC) that decoded successfully.
    pub album_art: Option<AlbumArt>,
}

impl TrackMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.album_art.is_none()
    }
}

/// Decoded cover image as straight RGBA8 pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct AlbumArt {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

// Pixel buffers are large; keep Debug output readable.
impl fmt::Debug for AlbumArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlbumArt")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Raw position/duration pair as reported by the playback engine.
///
/// Transient: rebuilt on every position event, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackPosition {
    pub current_ms: u64,
    pub total_ms: u64,
}

impl PlaybackPosition {
    pub fn new(current_ms: u64, total_ms: u64) -> Self {
        Self {
            current_ms,
            total_ms,
        }
    }
}
