//! Monotonic frame clock feeding `EncounterEngine::tick`.

use std::time::Instant;

use lighthouse_core::types::sanitize_delta;

/// Measures the delta between host frames.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first frame reports 0 and long
    /// stalls are clamped so one tick never integrates a huge step.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        sanitize_delta(dt)
    }

    /// Forget the previous frame, e.g. after a pause.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
