//! Local calendar date value.
//!
//! # Invariants
//! - A `CalendarDate` has no time-of-day and no timezone.
//! - Ordering is by `(year, month, day)`.
//! - Display and serde form is zero-padded `YYYY-MM-DD`.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Timezone-naive year/month/day triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from calendar components.
    ///
    /// Returns `None` when the triple does not exist (e.g. `2015-02-30`).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the recurrence of `self`'s month/day in `year`.
    ///
    /// A day past the end of its month rolls forward into the next month,
    /// so a 29 February anniversary lands on 1 March in common years.
    pub fn anniversary_in(&self, year: i32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, self.month(), 1)?;
        first
            .checked_add_days(Days::new(u64::from(self.day() - 1)))
            .map(Self)
    }

    /// Adds a (possibly negative) number of days.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::CalendarDate;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid test date")
    }

    #[test]
    fn rejects_nonexistent_days() {
        assert!(CalendarDate::from_ymd(2015, 2, 30).is_none());
        assert!(CalendarDate::from_ymd(2015, 13, 1).is_none());
        assert!(CalendarDate::from_ymd(2016, 2, 29).is_some());
    }

    #[test]
    fn anniversary_of_leap_day_rolls_into_march() {
        let birth = date(2000, 2, 29);
        assert_eq!(birth.anniversary_in(2001), Some(date(2001, 3, 1)));
        assert_eq!(birth.anniversary_in(2004), Some(date(2004, 2, 29)));
    }

    #[test]
    fn add_days_crosses_leap_february() {
        assert_eq!(date(2016, 2, 27).add_days(3), Some(date(2016, 3, 1)));
        assert_eq!(date(2015, 2, 27).add_days(3), Some(date(2015, 3, 2)));
    }

    #[test]
    fn add_days_handles_negative_and_extreme_offsets() {
        assert_eq!(date(2016, 3, 1).add_days(-1), Some(date(2016, 2, 29)));
        assert_eq!(date(2016, 3, 1).add_days(i64::MAX), None);
        assert_eq!(date(2016, 3, 1).add_days(i64::MIN), None);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(date(2015, 6, 2).to_string(), "2015-06-02");
    }

    #[test]
    fn ordering_follows_calendar() {
        assert!(date(2015, 6, 20) < date(2015, 6, 21));
        assert!(date(2014, 12, 31) < date(2015, 1, 1));
    }
}
