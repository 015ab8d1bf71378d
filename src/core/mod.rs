//! core/mod.rs
//!
//! The brain of the app:
//! - Read ID3 metadata (title/artist/cover) for the file being opened
//! - Talk to the playback engine (rodio thread)
//! - Turn engine numbers + metadata into label text for the GUI
//!
//! No iced imports in here; the GUI only renders what these modules produce.

pub mod config;
pub mod error;
pub mod now_playing;
pub mod playback;
pub mod sync;
pub mod tags;
pub mod types;

use std::path::Path;

/// Only `.mp3` files are offered/accepted.
pub fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::is_mp3;

    #[test]
    fn mp3_extension_is_case_insensitive() {
        assert!(is_mp3(Path::new("a/b/song.mp3")));
        assert!(is_mp3(Path::new("SONG.MP3")));
        assert!(!is_mp3(Path::new("song.flac")));
        assert!(!is_mp3(Path::new("mp3")));
    }
}
