//! Frame clock — converts irregular visual-frame callbacks into
//! bounded, regular simulation steps.
//!
//! Timestamps come from an external monotone clock, in milliseconds.
//! Elapsed real time lands in an accumulator; a step only runs once
//! enough time has built up (the floor avoids churning on
//! sub-resolvable intervals) and a single step's dt is capped (the
//! ceiling bounds one update's physical effect after a long stall).
//! Leftover time is carried to the next frame, never dropped nor
//! double-counted.

/// No update below this much accumulated time (one 240 Hz frame).
pub const MIN_STEP_TIME_MS: f64 = 1000.0 / 240.0;

/// A single update never consumes more than this (one 30 Hz frame).
pub const MAX_STEP_TIME_MS: f64 = 1000.0 / 30.0;

/// Time-stepping state: the previous timestamp and the unconsumed
/// real-time remainder. Lives for the whole session.
#[derive(Debug, Clone)]
pub struct FrameClock {
    prev_time_ms: f64,
    accumulator_ms: f64,
    last_frame_time_ms: f64,
}

impl FrameClock {
    /// Start the clock at the first observed timestamp, with an empty
    /// accumulator.
    pub fn new(now_ms: f64) -> Self {
        Self {
            prev_time_ms: now_ms,
            accumulator_ms: 0.0,
            last_frame_time_ms: 0.0,
        }
    }

    /// Advance to a new visual-frame timestamp.
    ///
    /// Returns `Some(dt)` — the step duration in seconds — when enough
    /// time has accumulated for exactly one simulation step, `None`
    /// otherwise. Exactly one render should follow either way.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let frame_time = now_ms - self.prev_time_ms;
        self.prev_time_ms = now_ms;
        self.last_frame_time_ms = frame_time;
        self.accumulator_ms += frame_time;

        if self.accumulator_ms > MIN_STEP_TIME_MS {
            let dt_ms = self.accumulator_ms.min(MAX_STEP_TIME_MS);
            self.accumulator_ms -= dt_ms;
            Some((dt_ms / 1000.0) as f32)
        } else {
            None
        }
    }

    /// Real time elapsed between the two most recent ticks, in
    /// milliseconds. Diagnostic only.
    pub fn last_frame_time_ms(&self) -> f64 {
        self.last_frame_time_ms
    }

    /// Unconsumed time carried toward the next step, in milliseconds.
    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator_ms
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
