//! Clock collaborator
//!
//! "Now" and "today" come from an injected clock so the service can be
//! exercised at fixed instants. All times are wall-clock in the business
//! timezone; the workbook stores naive timestamps.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

/// Time source for classification and suggested defaults
pub trait Clock: Send + Sync {
    /// Current wall-clock time in the business timezone
    fn now(&self) -> NaiveDateTime;

    /// Current business date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// System clock pinned to a business timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Fixed clock for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
