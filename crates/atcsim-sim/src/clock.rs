//! Frame clock: turns display-refresh timestamps into elapsed time.

/// Tracks the previous frame timestamp.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    last_ms: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call.
    ///
    /// The first call yields 0. A timestamp that goes backwards yields 0
    /// and becomes the new reference; a non-finite timestamp is ignored.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let elapsed = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        elapsed
    }

    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }
}
