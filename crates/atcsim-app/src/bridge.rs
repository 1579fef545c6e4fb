//! Stdio bridge: controller commands arrive as JSON lines on stdin.
//!
//! Each non-blank line is one `ControllerCommand`, for example
//! `{"type":"SetHeading","callsign":"UAL123","degrees":270}`.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread::JoinHandle;

use tracing::{debug, warn};

use atcsim_core::commands::ControllerCommand;

use crate::state::LoopMessage;

/// Parse one input line. Blank lines are `Ok(None)`.
pub fn parse_command_line(line: &str) -> Result<Option<ControllerCommand>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

/// Forward every command read from `reader` until EOF or until the loop
/// goes away. Malformed lines are logged and skipped. Returns the number
/// of commands forwarded.
pub fn pump_commands(reader: impl BufRead, tx: &mpsc::Sender<LoopMessage>) -> usize {
    let mut sent = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("command input failed: {e}");
                break;
            }
        };
        match parse_command_line(&line) {
            Ok(Some(command)) => {
                if tx.send(LoopMessage::Command(command)).is_err() {
                    debug!("frame loop gone, stopping command input");
                    break;
                }
                sent += 1;
            }
            Ok(None) => {}
            Err(e) => warn!(line = %line, "malformed command: {e}"),
        }
    }
    sent
}

/// Spawn the stdin reader thread.
pub fn spawn_stdin_bridge(tx: mpsc::Sender<LoopMessage>) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("atcsim-stdin".into())
        .spawn(move || {
            let sent = pump_commands(io::stdin().lock(), &tx);
            debug!(sent, "command input closed");
        })
}
