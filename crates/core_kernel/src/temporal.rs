//! Calendar-date handling for billing
//!
//! The engine never reads a clock: every age or validity computation takes
//! an explicit as-of date so results are reproducible.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: end {end} precedes start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}

/// An inclusive period of calendar dates
///
/// Used for billing windows such as emission-to-due-date. A period with no
/// end is open-ended. Start and end may coincide (a one-day period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    /// Start of the period (inclusive)
    pub start: NaiveDate,
    /// End of the period (inclusive), None means unbounded
    pub end: Option<NaiveDate>,
}

impl DatePeriod {
    /// Creates a new period, rejecting an end before the start
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if end < start {
                return Err(TemporalError::InvalidPeriod { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Returns true if the date falls within the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }

    /// Returns the period length in days, if bounded
    pub fn duration_days(&self) -> Option<i64> {
        self.end.map(|end| (end - self.start).num_days() + 1)
    }
}

/// Computes a person's age in whole years at the given as-of date
///
/// The year difference is decremented when the birthday has not yet been
/// reached in the as-of year. Dates before the birth date saturate to zero.
pub fn age_in_years(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    if as_of <= birth_date {
        return 0;
    }

    let mut years = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_rejects_end_before_start() {
        let result = DatePeriod::new(date(2024, 3, 10), Some(date(2024, 3, 9)));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_period_allows_same_day() {
        let period = DatePeriod::new(date(2024, 3, 10), Some(date(2024, 3, 10))).unwrap();
        assert!(period.contains(date(2024, 3, 10)));
        assert_eq!(period.duration_days(), Some(1));
    }

    #[test]
    fn test_open_ended_period() {
        let period = DatePeriod::new(date(2024, 1, 1), None).unwrap();
        assert!(period.contains(date(2099, 12, 31)));
        assert!(!period.contains(date(2023, 12, 31)));
        assert_eq!(period.duration_days(), None);
    }

    #[test]
    fn test_age_after_birthday() {
        let age = age_in_years(date(1954, 3, 10), date(2024, 6, 1));
        assert_eq!(age, 70);
    }

    #[test]
    fn test_age_before_birthday_in_year() {
        let age = age_in_years(date(1954, 7, 10), date(2024, 6, 1));
        assert_eq!(age, 69);
    }

    #[test]
    fn test_age_on_birthday() {
        let age = age_in_years(date(1954, 6, 1), date(2024, 6, 1));
        assert_eq!(age, 70);
    }

    #[test]
    fn test_age_saturates_before_birth() {
        let age = age_in_years(date(2030, 1, 1), date(2024, 6, 1));
        assert_eq!(age, 0);
    }

    #[test]
    fn test_age_leap_day_birth() {
        // Born Feb 29: birthday counts as reached on Mar 1 in common years
        let birth = date(1960, 2, 29);
        assert_eq!(age_in_years(birth, date(2023, 2, 28)), 62);
        assert_eq!(age_in_years(birth, date(2023, 3, 1)), 63);
    }
}
