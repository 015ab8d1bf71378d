//! core/tags/read.rs
//! Read ID3 tags from an MP3 and convert them into `TrackMetadata`.
//!
//! - A missing/corrupt container is NOT fatal: callers get an empty `TrackMetadata`.
//! - An undecodable picture only drops the art; title/artist still come through.
//! - Read-only: the source file is never touched.

use std::path::Path;

use id3::Tag;
use id3::frame::Content;
use tracing::{debug, warn};

use super::art::decode_album_art;
use super::kind::TagKind;
use crate::core::error::MetadataError;
use crate::core::types::TrackMetadata;

/// Best-effort read. Failures are logged and degrade to "unknown".
pub fn read_metadata(path: &Path) -> TrackMetadata {
    match try_read_metadata(path) {
        Ok(meta) => meta,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "no metadata available");
            TrackMetadata::default()
        }
    }
}

/// Same as [`read_metadata`], but a container failure is returned to the caller.
pub fn try_read_metadata(path: &Path) -> Result<TrackMetadata, MetadataError> {
    let tag = Tag::read_from_path(path)?;
    Ok(metadata_from_tag(&tag))
}

pub fn metadata_from_tag(tag: &Tag) -> TrackMetadata {
    let mut meta = TrackMetadata::default();

    for frame in tag.frames() {
        match (TagKind::from_frame_id(frame.id()), frame.content()) {
            (TagKind::Title, Content::Text(s)) => {
                if let Some(v) = first_value(s) {
                    meta.title = Some(v);
                }
            }
            (TagKind::Artist, Content::Text(s)) => {
                if let Some(v) = first_value(s) {
                    meta.artist = Some(v);
                }
            }
            (TagKind::Picture, Content::Picture(p)) => {
                // First picture that decodes wins.
                if meta.album_art.is_some() {
                    continue;
                }
                match decode_album_art(&p.data) {
                    Ok(art) => meta.album_art = Some(art),
                    Err(e) => {
                        warn!(
                            mime = %p.mime_type,
                            bytes = p.data.len(),
                            error = %e,
                            "skipping album art"
                        );
                    }
                }
            }
            (kind, _) => {
                if kind != TagKind::Other {
                    debug!(id = frame.id(), "frame has unexpected content; ignored");
                }
            }
        }
    }

    meta
}

/// ID3v2.4 stores multiple values NUL-separated; only the first is used.
fn first_value(s: &str) -> Option<String> {
    let v = s.split('\0').next().unwrap_or_default();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}
