//! core/tags/mod.rs
//!
//! ID3 metadata reading.
//! Public API:
//! - [`read_metadata`] maps a path to best-effort `TrackMetadata` (never fails).
//!
//! Frames are classified by id (`kind`); pictures are decoded by `art`.

mod art;
mod kind;
mod read;

pub use read::read_metadata;
