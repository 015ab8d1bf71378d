//! Player settings.
//!
//! Defaults mirror the reference player; `main.rs` lets CLI flags override them.

use std::time::Duration;

pub const DEFAULT_VOLUME: u8 = 50;
pub const DEFAULT_SCROLL_INTERVAL_MS: u64 = 400;
pub const DEFAULT_MARQUEE_WIDTH: usize = 20;
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ENGINE_TICK_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// 0..=100, same scale as the volume slider.
    pub initial_volume: u8,
    /// Marquee tick period.
    pub scroll_interval: Duration,
    /// Labels at or below this many chars are shown without scrolling.
    pub marquee_width: usize,
    /// Upper bound on waiting for the engine to report a file as ready.
    pub load_timeout: Duration,
    /// How often the engine pushes position events.
    pub engine_tick: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME,
            scroll_interval: Duration::from_millis(DEFAULT_SCROLL_INTERVAL_MS),
            marquee_width: DEFAULT_MARQUEE_WIDTH,
            load_timeout: Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS),
            engine_tick: Duration::from_millis(DEFAULT_ENGINE_TICK_MS),
        }
    }
}

impl PlayerConfig {
    pub fn with_volume(mut self, volume: u8) -> Self {
        self.initial_volume = volume.min(100);
        self
    }
}

/// Map the 0..=100 slider scale onto rodio's 0.0..=1.0 gain.
pub fn volume_to_gain(volume: u8) -> f32 {
    f32::from(volume.min(100)) / 100.0
}
