//! Calendar helpers shared by the analytics, chart and report modules.
//!
//! Entry dates are plain `YYYY-MM-DD` strings; these helpers convert between
//! that representation and `chrono::NaiveDate` and compute the week and month
//! windows used by reports.

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_ISO).to_string()
}

/// Parses a stored entry date (`YYYY-MM-DD` only).
pub fn parse_entry_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO).ok()
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format
pub fn parse_date_string(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

/// An inclusive range of calendar days, rendered as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// Whether a `YYYY-MM-DD` date string falls inside the range.
    ///
    /// Comparison is lexicographic, which matches chronological order for
    /// zero-padded ISO dates.
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && date <= self.end.as_str()
    }
}

/// Monday-to-Sunday week containing `anchor`.
///
/// # Examples
///
/// ```
/// use moodlog::dates::week_range;
/// use chrono::NaiveDate;
///
/// // 2024-01-17 is a Wednesday
/// let range = week_range(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
/// assert_eq!(range.start, "2024-01-15");
/// assert_eq!(range.end, "2024-01-21");
/// ```
pub fn week_range(anchor: NaiveDate) -> DateRange {
    let offset = u64::from(anchor.weekday().num_days_from_monday());
    let start = anchor - Days::new(offset);
    let end = start + Days::new(6);
    DateRange {
        start: format_date(start),
        end: format_date(end),
    }
}

/// First-to-last day of the month containing `anchor`.
pub fn month_range(anchor: NaiveDate) -> DateRange {
    let start = anchor.with_day(1).unwrap_or(anchor);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(anchor);
    DateRange {
        start: format_date(start),
        end: format_date(end),
    }
}

/// The `days` calendar days ending at `today`, oldest first.
///
/// Walks backwards one day at a time, so the cost is linear in `days`. The
/// walk stops at `NaiveDate::MIN`; only a window reaching past chrono's
/// earliest representable date comes back shorter than `days`.
pub fn last_n_days(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut cursor = Some(today);
    while dates.len() < days {
        let Some(day) = cursor else {
            break;
        };
        dates.push(day);
        cursor = day.pred_opt();
    }
    dates.reverse();
    dates
}
