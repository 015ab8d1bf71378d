//! Error types for the core.
//!
//! Metadata errors never reach the GUI: `tags::read_metadata` logs and absorbs them.
//! Playback errors are turned into `PlayerEvent::Error` / `LoadOutcome::Failed`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// The tag container could not be opened or parsed.
    #[error("metadata unavailable: {0}")]
    Unavailable(#[from] id3::Error),

    /// An embedded picture was present but its bytes are not a known image.
    #[error("album art decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to init default audio output: {0}")]
    OutputInit(#[from] rodio::StreamError),

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode failed: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("format probe failed: {0}")]
    Probe(#[from] symphonia::core::errors::Error),

    #[error("no supported audio track found")]
    NoTrack,

    #[error("seek failed: {0}")]
    Seek(#[from] rodio::source::SeekError),
}

pub type PlaybackResult<T> = Result<T, PlaybackError>;
