//! Radar antenna timing.
//!
//! The scope only learns where aircraft are once per revolution. Elapsed
//! time accumulates until a full interval has passed; at most one sweep is
//! reported per frame and the remainder carries into the next revolution.

use atcsim_core::constants::DEFAULT_SWEEP_INTERVAL_MS;

#[derive(Debug, Clone)]
pub struct SweepScheduler {
    interval_ms: f64,
    accumulator_ms: f64,
}

impl Default for SweepScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_INTERVAL_MS)
    }
}

impl SweepScheduler {
    /// Callers validate `interval_ms > 0` (settings validation does).
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulator_ms: 0.0,
        }
    }

    /// Add `dt_ms`; true when a sweep is due this frame.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.accumulator_ms += dt_ms;
        }
        if self.accumulator_ms >= self.interval_ms {
            self.accumulator_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Fraction of the current revolution completed.
    pub fn progress(&self) -> f64 {
        (self.accumulator_ms / self.interval_ms).clamp(0.0, 1.0)
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }
}
