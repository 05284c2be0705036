//! Controllable clock for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex, PoisonError};

/// Clock pinned to an instant that scenarios can move.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    /// Creates a clock reading 09:30 UTC on the given day.
    ///
    /// # Panics
    ///
    /// Panics when the date does not exist.
    #[must_use]
    pub fn on_day(year: i32, month: u32, day: u32) -> Self {
        Self {
            now: Arc::new(Mutex::new(morning_of(year, month, day))),
        }
    }

    /// Moves the clock to 09:30 UTC on the given day.
    ///
    /// # Panics
    ///
    /// Panics when the date does not exist.
    pub fn set_day(&self, year: i32, month: u32, day: u32) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = morning_of(year, month, day);
    }
}

fn morning_of(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
