//! Gravity module - the automatic descent scheduler.
//!
//! The frontend drives the engine with a fixed timestep. `GravityTimer`
//! accumulates that elapsed time and reports when the next automatic
//! "move down" is due. The interval is passed in on every call, so a level
//! change takes effect on the very next tick.

/// Accumulates elapsed time until an automatic descent is due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityTimer {
    elapsed_ms: u32,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and return true if a descent is due.
    ///
    /// At most one descent fires per call; the accumulator restarts from zero
    /// when it does.
    pub fn advance(&mut self, elapsed_ms: u32, interval_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= interval_ms.max(1) {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
