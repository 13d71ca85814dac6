//! Two-phase simulation clock.

/// Simulated time and clock level.
///
/// Time starts at 0 with the clock high. Each `advance` moves time forward by one
/// half-period and inverts the level, so the level strictly alternates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimClock {
    time: u64,
    level: bool,
    half_period: u64,
}

impl SimClock {
    /// Creates a clock at time 0, level high.
    pub const fn new(half_period: u64) -> Self {
        Self {
            time: 0,
            level: true,
            half_period,
        }
    }

    /// Current simulation time.
    pub const fn time(&self) -> u64 {
        self.time
    }

    /// Level to apply on the current step.
    pub const fn level(&self) -> bool {
        self.level
    }

    /// Time advanced per step.
    pub const fn half_period(&self) -> u64 {
        self.half_period
    }

    /// Moves to the next half-period. Time saturates at `u64::MAX`.
    pub const fn advance(&mut self) {
        self.time = self.time.saturating_add(self.half_period);
        self.level = !self.level;
    }
}
