//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

/// Gets filename, used in status lines.
/// Ex: '/music/song.mp3' -> 'song.mp3'
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Seek slider percent -> engine position, in whole seconds.
pub(crate) fn seek_target_ms(percent: u8, total_ms: u64) -> u64 {
    let percent = u64::from(percent.min(100));
    percent * total_ms / 100_000 * 1000
}

/// Engine position -> seek slider percent.
pub(crate) fn position_percent(position_ms: u64, total_ms: u64) -> u8 {
    if total_ms == 0 {
        return 0;
    }
    (position_ms.min(total_ms) * 100 / total_ms) as u8
}

pub(crate) fn volume_label(volume: u8) -> String {
    format!("volume : {volume}")
}
