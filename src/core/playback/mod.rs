//! core/playback/mod.rs
//! Playback engine boundary.
//!
//! The engine (rodio owner) lives on its own thread. The GUI talks to it through
//! [`MediaEngine`] and reads [`PlayerEvent`]s back off a channel.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{error, warn};

mod engine;
mod probe;

use engine::PlaybackEngine;

/// Single completion signal for a load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready { duration_ms: u64 },
    /// Gave up waiting; the engine may still finish later.
    StillLoading,
    Failed(String),
    /// The engine thread is gone; a fresh one is needed.
    Disconnected,
}

#[derive(Debug)]
pub enum PlayerCommand {
    Load {
        path: PathBuf,
        ready: oneshot::Sender<LoadOutcome>,
    },
    Play,
    Pause,
    Stop,
    Seek(u64),      // ms
    SetVolume(f32), // 0.0..=1.0
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Loaded {
        path: PathBuf,
        duration_ms: Option<u64>,
    },
    Paused,
    Resumed,
    Stopped,
    /// Position-change notification.
    Position {
        position_ms: u64,
        duration_ms: Option<u64>,
    },
    TrackEnded,
    Error(String),
}

/// What the GUI needs from a media engine. Fakes implement this in tests.
pub trait MediaEngine: Send {
    /// Start loading `path`. The receiver resolves once, when the file is
    /// playing or has failed.
    fn load(&self, path: PathBuf) -> oneshot::Receiver<LoadOutcome>;
    fn play(&self);
    fn pause(&self);
    fn stop(&self);
    fn seek(&self, position_ms: u64);
    /// 0.0..=1.0
    fn set_volume(&self, gain: f32);
}

#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        if self.command_tx.send(cmd).is_err() {
            warn!("playback engine is gone; command dropped");
        }
    }
}

impl MediaEngine for PlaybackController {
    fn load(&self, path: PathBuf) -> oneshot::Receiver<LoadOutcome> {
        let (ready, rx) = oneshot::channel();
        // If the engine is gone `ready` is dropped here and the receiver reports it.
        self.send(PlayerCommand::Load { path, ready });
        rx
    }

    fn play(&self) {
        self.send(PlayerCommand::Play);
    }

    fn pause(&self) {
        self.send(PlayerCommand::Pause);
    }

    fn stop(&self) {
        self.send(PlayerCommand::Stop);
    }

    fn seek(&self, position_ms: u64) {
        self.send(PlayerCommand::Seek(position_ms));
    }

    fn set_volume(&self, gain: f32) {
        self.send(PlayerCommand::SetVolume(gain));
    }
}

/// Wait for a load to settle, bounded by `timeout`.
pub async fn wait_until_ready(
    rx: oneshot::Receiver<LoadOutcome>,
    timeout: Duration,
) -> LoadOutcome {
    match tokio::time::timeout(timeout, rx).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(_)) => LoadOutcome::Disconnected,
        Err(_) => LoadOutcome::StillLoading,
    }
}

/// Spawns playback thread and returns:
/// - PlaybackController (store in GUI state)
/// - Receiver<PlayerEvent> (drained by the GUI's TickPlayback subscription)
pub fn start_playback(tick: Duration) -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    let spawned = thread::Builder::new()
        .name("playback".into())
        .spawn(move || {
            let mut engine = match PlaybackEngine::new(event_tx.clone(), tick) {
                Ok(e) => e,
                Err(e) => {
                    error!(error = %e, "playback engine failed to start");
                    let _ = event_tx.send(PlayerEvent::Error(e.to_string()));
                    return;
                }
            };

            engine.run(command_rx);
        });

    if let Err(e) = spawned {
        error!(error = %e, "could not spawn playback thread");
    }

    (PlaybackController { command_tx }, event_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ready_signal_is_passed_through() {
        let (tx, rx) = oneshot::channel();
        tx.send(LoadOutcome::Ready { duration_ms: 181_000 }).unwrap();

        let outcome = wait_until_ready(rx, Duration::from_secs(1)).await;
        assert_eq!(outcome, LoadOutcome::Ready { duration_ms: 181_000 });
    }

    #[tokio::test]
    async fn engine_failure_is_passed_through() {
        let (tx, rx) = oneshot::channel();
        tx.send(LoadOutcome::Failed("Decode failed".into())).unwrap();

        let outcome = wait_until_ready(rx, Duration::from_secs(1)).await;
        assert_eq!(outcome, LoadOutcome::Failed("Decode failed".into()));
    }

    #[tokio::test]
    async fn dropped_engine_reports_disconnected() {
        let (tx, rx) = oneshot::channel::<LoadOutcome>();
        drop(tx);

        let outcome = wait_until_ready(rx, Duration::from_secs(1)).await;
        assert_eq!(outcome, LoadOutcome::Disconnected);
    }

    #[tokio::test]
    async fn slow_engine_times_out_as_still_loading() {
        let (_tx, rx) = oneshot::channel::<LoadOutcome>();

        let outcome = wait_until_ready(rx, Duration::from_millis(20)).await;
        assert_eq!(outcome, LoadOutcome::StillLoading);
    }

    #[tokio::test]
    async fn controller_load_without_engine_reports_disconnected() {
        let (command_tx, command_rx) = mpsc::channel();
        drop(command_rx);
        let controller = PlaybackController { command_tx };

        let rx = controller.load(PathBuf::from("x.mp3"));
        let outcome = wait_until_ready(rx, Duration::from_secs(1)).await;
        assert_eq!(outcome, LoadOutcome::Disconnected);
    }
}
