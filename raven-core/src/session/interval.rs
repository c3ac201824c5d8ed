//! Tick divider
//!
//! Turns the base timer tick into a per-session period.

/// Fires once every `period` base ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interval {
    period: u16,
    elapsed: u16,
    /// Rearmed since the last base tick
    restarted: bool,
}

impl Interval {
    /// Create an interval; a zero period is treated as one tick
    pub const fn new(period: u16) -> Self {
        Self {
            period: if period == 0 { 1 } else { period },
            elapsed: 0,
            restarted: false,
        }
    }

    /// Period in base ticks
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Restart counting from now
    ///
    /// The base tick in progress is not counted: the first tick after a
    /// rearm only closes it, and a full `period` of ticks follows before
    /// the interval fires.
    pub fn rearm(&mut self) {
        self.elapsed = 0;
        self.restarted = true;
    }

    /// Account for one base tick, returning true when the period elapsed
    pub fn tick(&mut self) -> bool {
        if self.restarted {
            self.restarted = false;
            return false;
        }
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}
