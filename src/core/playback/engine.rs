//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per current track)
//! - command loop + periodic position ticks
//!
//! Emits PlayerEvent back via a channel.
//! No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::probe::track_length_ms;
use super::{LoadOutcome, PlayerCommand, PlayerEvent};
use crate::core::error::{PlaybackError, PlaybackResult};

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,
    tick: Duration,

    // Current playback
    sink: Option<Sink>,
    current_path: Option<PathBuf>,
    current_duration_ms: Option<u64>,
    gain: f32,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>, tick: Duration) -> PlaybackResult<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;

        Ok(Self {
            stream,
            tick,
            sink: None,
            current_path: None,
            current_duration_ms: None,
            gain: 1.0,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        loop {
            match command_rx.recv_timeout(self.tick) {
                Ok(cmd) => {
                    self.handle_command(cmd);
                    while let Ok(cmd) = command_rx.try_recv() {
                        self.handle_command(cmd);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                // Every controller dropped: the GUI is gone.
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
        debug!("playback engine shut down");
    }

    fn emit(&self, event: PlayerEvent) {
        // GUI gone means we're shutting down anyway.
        let _ = self.event_tx.send(event);
    }

    fn handle_command(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Load { path, ready } => self.load(path, ready),
            PlayerCommand::Play => {
                if let Some(sink) = &self.sink {
                    sink.play();
                    self.emit(PlayerEvent::Resumed);
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                    self.emit(PlayerEvent::Paused);
                }
            }
            PlayerCommand::Stop => {
                self.stop_internal();
                self.emit(PlayerEvent::Stopped);
            }
            PlayerCommand::Seek(ms) => {
                if let Err(e) = self.seek(ms) {
                    warn!(target_ms = ms, error = %e, "seek failed");
                    self.emit(PlayerEvent::Error(e.to_string()));
                }
            }
            PlayerCommand::SetVolume(v) => {
                self.gain = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.gain);
                }
            }
        }
    }

    fn load(&mut self, path: PathBuf, ready: oneshot::Sender<LoadOutcome>) {
        let outcome = match self.open(&path) {
            Ok(duration_ms) => {
                info!(path = %path.display(), ?duration_ms, "playing");
                self.emit(PlayerEvent::Loaded {
                    path,
                    duration_ms,
                });
                // 0 = unknown; rodio can't report it once the decoder is in the sink.
                LoadOutcome::Ready {
                    duration_ms: duration_ms.unwrap_or(0),
                }
            }
            // Reported through `ready` only; the GUI shows it once.
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed");
                LoadOutcome::Failed(e.to_string())
            }
        };

        // Caller may have timed out and dropped the receiver.
        if ready.send(outcome).is_err() {
            debug!("load finished after the caller stopped waiting");
        }
    }

    fn open(&mut self, path: &Path) -> PlaybackResult<Option<u64>> {
        // The current track keeps playing if the new file can't be decoded.
        let (decoder, duration_ms) = open_decoder(path)?;
        self.stop_internal();

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.gain);
        sink.append(decoder);
        sink.play();

        self.current_duration_ms = duration_ms;
        self.current_path = Some(path.to_path_buf());
        self.sink = Some(sink);

        Ok(duration_ms)
    }

    fn seek(&mut self, ms: u64) -> PlaybackResult<()> {
        let Some(sink) = &self.sink else {
            return Ok(());
        };

        // Seeking to exactly the end tends to produce EOF weirdness.
        let target = match self.current_duration_ms {
            Some(dur) if ms >= dur => dur.saturating_sub(1),
            _ => ms,
        };

        sink.try_seek(Duration::from_millis(target))?;
        self.emit(PlayerEvent::Position {
            position_ms: target,
            duration_ms: self.current_duration_ms,
        });
        Ok(())
    }

    fn tick(&mut self) {
        let Some(sink) = &self.sink else {
            return;
        };

        if sink.empty() && self.current_path.is_some() {
            self.emit(PlayerEvent::TrackEnded);
            self.stop_internal();
            return;
        }

        if !sink.is_paused() {
            let position_ms = sink.get_pos().as_millis() as u64;
            self.emit(PlayerEvent::Position {
                position_ms,
                duration_ms: self.current_duration_ms,
            });
        }
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_path = None;
        self.current_duration_ms = None;
    }
}

/// Open and decode `path`, plus its length when one can be found.
fn open_decoder(path: &Path) -> PlaybackResult<(Decoder<BufReader<File>>, Option<u64>)> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file))?;

    let duration_ms = track_length_ms(path)
        .or_else(|| decoder.total_duration().map(|d| d.as_millis() as u64));

    Ok((decoder, duration_ms))
}
