//! State shared between the bridge, the loader and the frame loop thread.

use std::sync::{Arc, Mutex};

use atcsim_core::commands::ControllerCommand;
use atcsim_core::state::FrameSnapshot;
use atcsim_nav::NavigationDataset;

/// Messages sent to the frame loop thread.
#[derive(Debug)]
pub enum LoopMessage {
    /// A controller command to apply before the next frame.
    Command(ControllerCommand),
    /// Navigation records arrived from the loader thread.
    NavigationLoaded(NavigationDataset),
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Latest frame, updated by the loop thread after each frame.
pub type LatestSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

pub fn latest_snapshot() -> LatestSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_snapshot_starts_empty() {
        let latest = latest_snapshot();
        assert!(latest.lock().unwrap().is_none());
    }
}
