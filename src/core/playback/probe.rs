//! core/playback/probe.rs
//! Track length lookup.
//!
//! rodio's MP3 decoder often can't tell how long a file is, so the engine asks:
//! 1. symphonia's container probe (frame count * time base)
//! 2. the ID3 `TLEN` frame (milliseconds, as text)

use std::fs::File;
use std::path::Path;

use id3::TagLike;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;
use tracing::debug;

use crate::core::error::{PlaybackError, PlaybackResult};

pub fn track_length_ms(path: &Path) -> Option<u64> {
    match probe_length_ms(path) {
        Ok(Some(ms)) => return Some(ms),
        Ok(None) => {}
        Err(e) => debug!(path = %path.display(), error = %e, "length probe failed"),
    }
    tlen_ms(path)
}

fn probe_length_ms(path: &Path) -> PlaybackResult<Option<u64>> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let track = probed
        .format
        .default_track()
        .ok_or(PlaybackError::NoTrack)?;

    Ok(duration_from_params(
        track.codec_params.time_base,
        track.codec_params.n_frames,
    ))
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let t = tb.calc_time(frames);
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}

fn tlen_ms(path: &Path) -> Option<u64> {
    let tag = id3::Tag::read_from_path(path).ok()?;
    let text = tag.get("TLEN")?.content().text()?;
    text.trim().parse::<u64>().ok().filter(|&ms| ms > 0)
}
