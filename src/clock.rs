//! Source of "now" for date-relative computations.
//!
//! Chart generation and report anchoring depend on the current calendar day.
//! Rather than reading the system clock inside those functions, callers pass a
//! [`Clock`]; the binary uses [`SystemClock`] and tests pin time with
//! [`FixedClock`].

use chrono::{DateTime, Local, NaiveDate};

/// Provides the current local instant.
pub trait Clock {
    /// The current instant in the local timezone.
    fn now(&self) -> DateTime<Local>;

    /// The current local calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
///
/// # Examples
///
/// ```
/// use moodlog::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// assert_eq!(clock.today().to_string(), "2024-03-10");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Pins the clock to `instant`.
    pub fn new(instant: DateTime<Local>) -> Self {
        FixedClock { instant }
    }

    /// Pins the clock to local noon on `date`.
    ///
    /// Noon keeps the local day stable across DST transitions.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        let instant = noon
            .and_local_timezone(Local)
            .earliest()
            .unwrap_or_else(|| DateTime::from_naive_utc_and_offset(noon, *Local::now().offset()));
        FixedClock { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}
