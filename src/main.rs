//! Tunebox
//!
//! # What this program is
//! A small desktop MP3 player (built with `iced`): open a file, see its title/artist/cover,
//! play/pause, seek, change volume, and watch a scrolling "now playing" label.
//!
//! # How Iced works (super simple mental model)
//! - `Tunebox` = the app state
//! - `Message` = “something happened” (button clicked, engine ticked, dialog closed)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Concurrency
//! - Audio runs on the playback engine thread (rodio); the GUI polls its events.
//! - Tag reading runs on a helper thread so a slow disk doesn't freeze the window.
//! - All label state is only touched from `update`.

mod core;
mod gui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::{
    DEFAULT_LOAD_TIMEOUT_SECS, DEFAULT_MARQUEE_WIDTH, DEFAULT_SCROLL_INTERVAL_MS, DEFAULT_VOLUME,
    PlayerConfig,
};
use crate::gui::Tunebox;
use crate::gui::view::constants::{WINDOW_H, WINDOW_W};

#[derive(Parser, Debug)]
#[command(name = "tunebox", version, about = "Minimal desktop MP3 player")]
struct Cli {
    /// MP3 file to open on startup
    file: Option<PathBuf>,

    /// Initial volume (0-100)
    #[arg(long, default_value_t = DEFAULT_VOLUME, value_parser = clap::value_parser!(u8).range(0..=100))]
    volume: u8,

    /// Marquee tick period in milliseconds
    #[arg(long, default_value_t = DEFAULT_SCROLL_INTERVAL_MS)]
    scroll_interval_ms: u64,

    /// Labels up to this many characters don't scroll
    #[arg(long, default_value_t = DEFAULT_MARQUEE_WIDTH)]
    marquee_width: usize,

    /// How long to wait for the engine to report a file as playable
    #[arg(long, default_value_t = DEFAULT_LOAD_TIMEOUT_SECS)]
    load_timeout_secs: u64,
}

impl Cli {
    fn config(&self) -> PlayerConfig {
        PlayerConfig {
            scroll_interval: Duration::from_millis(self.scroll_interval_ms.max(1)),
            marquee_width: self.marquee_width,
            load_timeout: Duration::from_secs(self.load_timeout_secs),
            ..PlayerConfig::default()
        }
        .with_volume(self.volume)
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "tunebox=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let initial = cli.file;

    tracing::info!(?config, "starting");

    iced::application(
        move || Tunebox::boot(config.clone(), initial.clone()),
        gui::update,
        gui::view,
    )
    .title("Tunebox")
    .subscription(gui::subscription)
    .window_size((WINDOW_W, WINDOW_H))
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_player_defaults() {
        let cli = Cli::parse_from(["tunebox"]);
        assert_eq!(cli.config(), PlayerConfig::default());
        assert!(cli.file.is_none());
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::parse_from([
            "tunebox",
            "song.mp3",
            "--volume",
            "80",
            "--marquee-width",
            "30",
        ]);
        let cfg = cli.config();
        assert_eq!(cfg.initial_volume, 80);
        assert_eq!(cfg.marquee_width, 30);
        assert_eq!(cli.file, Some(PathBuf::from("song.mp3")));
    }

    #[test]
    fn volume_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["tunebox", "--volume", "101"]).is_err());
    }
}
