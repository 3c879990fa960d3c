//! Injectable wall clock.

use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Datelike;

/// Source of the current calendar year.
///
/// Read on every render; implementations must not cache.
pub trait Clock: Send + Sync {
    /// Current UTC calendar year.
    fn current_year(&self) -> i32;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Utc::now().year()
    }
}

/// Clock frozen at a settable year.
#[derive(Debug)]
pub struct FixedClock {
    year: AtomicI32,
}

impl FixedClock {
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            year: AtomicI32::new(year),
        }
    }

    pub fn set_year(&self, year: i32) {
        self.year.store(year, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }

    #[test]
    fn test_fixed_clock_can_move() {
        let clock = FixedClock::new(2024);
        assert_eq!(clock.current_year(), 2024);
        clock.set_year(2031);
        assert_eq!(clock.current_year(), 2031);
    }
}
