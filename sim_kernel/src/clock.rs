//! # Logical Clock
//!
//! Deterministic clock for the simulation loop.
//!
//! ## Philosophy
//!
//! **Determinism enables thorough testing.**
//!
//! The clock never reads wall time. It only moves when the engine advances
//! it, one tick per loop iteration.

use core_types::Tick;

/// Simulated clock with explicit, one-tick-at-a-time progression
///
/// # Examples
///
/// ```
/// use sim_kernel::clock::SimClock;
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.now(), 0);
///
/// clock.advance();
/// clock.advance();
/// assert_eq!(clock.now(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Tick,
}

impl SimClock {
    /// Creates a clock starting at tick 0
    pub fn new() -> Self {
        Self { now: 0 }
    }

    /// Creates a clock starting at a specific tick
    pub fn with_initial_ticks(now: Tick) -> Self {
        Self { now }
    }

    /// Current tick
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Advances the clock by one tick and returns the new time
    pub fn advance(&mut self) -> Tick {
        self.now += 1;
        self.now
    }

    /// Rewinds the clock to tick 0 for a fresh run
    pub fn reset(&mut self) {
        self.now = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_starts_at_zero() {
        assert_eq!(SimClock::new().now(), 0);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut clock = SimClock::new();
        let t1 = clock.now();
        let t2 = clock.advance();
        let t3 = clock.advance();

        assert_eq!(t2 - t1, 1);
        assert_eq!(t3 - t2, 1);
        assert_eq!(clock.now(), 2);
    }

    #[test]
    fn test_reset() {
        let mut clock = SimClock::with_initial_ticks(40);
        clock.advance();
        clock.reset();
        assert_eq!(clock.now(), 0);
    }
}
