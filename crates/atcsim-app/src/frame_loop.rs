//! Frame loop thread: runs the simulation engine at the display rate and
//! writes one JSON snapshot per frame.
//!
//! The engine is moved into this thread and owned there. Commands and
//! navigation data arrive via `mpsc` channel and are applied between frames.

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use atcsim_sim::SimulationEngine;

use crate::state::{LatestSnapshot, LoopMessage};

/// How the loop paces and when it stops.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub frame_rate_hz: u32,
    /// Stop after this many frames; `None` runs until shutdown.
    pub max_frames: Option<u64>,
}

impl LoopConfig {
    /// Nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate_hz.max(1)))
    }
}

/// Spawns the frame loop in a new thread.
///
/// Returns the message sender for the bridge and loader to use.
pub fn spawn_frame_loop(
    engine: SimulationEngine,
    config: LoopConfig,
    output: Box<dyn Write + Send>,
    latest: LatestSnapshot,
) -> io::Result<(mpsc::Sender<LoopMessage>, JoinHandle<u64>)> {
    let (tx, rx) = mpsc::channel::<LoopMessage>();

    let handle = std::thread::Builder::new()
        .name("atcsim-frame-loop".into())
        .spawn(move || {
            let mut output = output;
            run_frame_loop(engine, &rx, &mut output, config, &latest)
        })?;

    Ok((tx, handle))
}

/// The frame loop. Runs until `Shutdown`, the frame limit, or a failed
/// write. Returns the number of frames produced.
pub fn run_frame_loop(
    mut engine: SimulationEngine,
    rx: &mpsc::Receiver<LoopMessage>,
    output: &mut dyn Write,
    config: LoopConfig,
    latest: &LatestSnapshot,
) -> u64 {
    let frame_duration = config.frame_duration();
    let start = Instant::now();
    let mut next_frame_time = start;
    let mut frames = 0u64;
    let mut inputs_open = true;

    loop {
        // 1. Drain pending messages
        while inputs_open {
            match rx.try_recv() {
                Ok(LoopMessage::Command(command)) => {
                    // Rejections are logged by the engine.
                    let _ = engine.apply_command(command);
                }
                Ok(LoopMessage::NavigationLoaded(dataset)) => engine.install_navigation(dataset),
                Ok(LoopMessage::Shutdown) => {
                    info!(frames, "frame loop shut down");
                    return frames;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("all message senders gone");
                    inputs_open = false;
                }
            }
        }

        // 2. Advance one frame
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.frame(now_ms);

        // 3. Emit as one JSON line
        let written = serde_json::to_writer(&mut *output, &snapshot)
            .map_err(io::Error::from)
            .and_then(|()| output.write_all(b"\n"))
            .and_then(|()| output.flush());
        if let Err(e) = written {
            warn!("frame output failed, stopping: {e}");
            return frames;
        }

        // 4. Store latest snapshot
        if let Ok(mut lock) = latest.lock() {
            *lock = Some(snapshot);
        }

        frames += 1;
        if config.max_frames.is_some_and(|max| frames >= max) {
            info!(frames, "frame limit reached");
            return frames;
        }

        // 5. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind; reset instead of bursting frames.
            next_frame_time = now;
        }
    }
}
