//! Wall-clock abstraction.
//!
//! Calendar rules ("not in the past", "within the advance booking horizon")
//! read the current date through [`Clock`] so they can be pinned in tests.

use chrono::{Local, NaiveDate};

/// Source of the venue-local calendar date.
pub trait Clock: Send + Sync + std::fmt::Debug + 'static {
    /// Today's date in venue-local wall-clock time.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the operating system; the venue timezone is the host's.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Create a clock that always reports `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
