//! Elapsed/total time formatting.

use crate::core::types::PlaybackPosition;

const MS_PER_SECOND: u64 = 1000;
const SECONDS_PER_MINUTE: u64 = 60;

/// Milliseconds -> (minutes, seconds). Sub-second remainder is truncated.
pub fn ms_to_minutes_seconds(ms: u64) -> (u64, u64) {
    let secs = ms / MS_PER_SECOND;
    (secs / SECONDS_PER_MINUTE, secs % SECONDS_PER_MINUTE)
}

/// `MM:SS`. Padding is a minimum: 100 minutes renders as `100:00`.
pub fn format_clock(ms: u64) -> String {
    let (m, s) = ms_to_minutes_seconds(ms);
    format!("{m:02}:{s:02}")
}

/// `MM:SS / MM:SS`
pub fn format_time(current_ms: u64, total_ms: u64) -> String {
    format!("{} / {}", format_clock(current_ms), format_clock(total_ms))
}

/// Placeholder shown right after a file is loaded.
pub fn initial_time_label(total_ms: u64) -> String {
    format_time(0, total_ms)
}

/// New label for a position event, or `None` to keep the current one.
///
/// Both sides must be at least one whole second: an engine that has not yet
/// reported a length (or sits at 0) must not clobber the load-time placeholder.
pub fn time_label_update(pos: PlaybackPosition) -> Option<String> {
    let current_s = pos.current_ms / MS_PER_SECOND;
    let total_s = pos.total_ms / MS_PER_SECOND;

    if current_s == 0 || total_s == 0 {
        return None;
    }

    Some(format_time(pos.current_ms, pos.total_ms))
}
