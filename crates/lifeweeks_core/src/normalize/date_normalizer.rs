//! Heterogeneous date string parsing.
//!
//! Accepted shapes:
//! - `YYYY-M-D` with 1-2 digit month/day (`2015-6-2`, `2015-06-02`).
//! - Spreadsheet literal `Date(Y,M,D)` with a zero-based month. Datetime
//!   literals `Date(Y,M,D,h,m,s)` keep only their calendar part, and text
//!   after the closing parenthesis is ignored.

use crate::model::date::CalendarDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("iso-like date pattern must compile")
});

static SHEET_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Date\((\d+),(\d+),(\d+)(?:,\d+)*\)").expect("sheet date pattern must compile")
});

/// Reason a raw value could not become a `CalendarDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// No value was supplied.
    Missing,
    /// Value matches neither accepted shape.
    UnrecognizedFormat(String),
    /// Shape matched but the triple is not a real calendar day.
    InvalidCalendarDate { year: i64, month: i64, day: i64 },
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "date value is missing"),
            Self::UnrecognizedFormat(value) => write!(f, "unrecognized date format: `{value}`"),
            Self::InvalidCalendarDate { year, month, day } => {
                write!(f, "not a calendar date: {year}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for NormalizeError {}

/// Normalizes an optional raw cell value.
///
/// Absent and blank values yield `NormalizeError::Missing`.
pub fn normalize_cell(raw: Option<&str>) -> Result<CalendarDate, NormalizeError> {
    match raw {
        Some(value) if !value.trim().is_empty() => normalize_date(value),
        _ => Err(NormalizeError::Missing),
    }
}

/// Normalizes one raw date string into a local calendar date.
///
/// # Errors
/// - `UnrecognizedFormat` for shapes other than `YYYY-M-D` / `Date(Y,M,D)`.
/// - `InvalidCalendarDate` for triples such as `2015-02-30`.
pub fn normalize_date(raw: &str) -> Result<CalendarDate, NormalizeError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(NormalizeError::Missing);
    }

    if let Some(caps) = ISO_LIKE.captures(value) {
        let year = parse_component(&caps[1], value)?;
        let month = parse_component(&caps[2], value)?;
        let day = parse_component(&caps[3], value)?;
        return to_calendar_date(year, month, day);
    }

    if value.starts_with("Date(") {
        let caps = SHEET_LITERAL
            .captures(value)
            .ok_or_else(|| NormalizeError::UnrecognizedFormat(value.to_string()))?;
        let year = parse_component(&caps[1], value)?;
        let zero_based_month = parse_component(&caps[2], value)?;
        let day = parse_component(&caps[3], value)?;
        let month = zero_based_month
            .checked_add(1)
            .ok_or(NormalizeError::InvalidCalendarDate {
                year,
                month: zero_based_month,
                day,
            })?;
        return to_calendar_date(year, month, day);
    }

    Err(NormalizeError::UnrecognizedFormat(value.to_string()))
}

fn parse_component(digits: &str, raw: &str) -> Result<i64, NormalizeError> {
    digits
        .parse::<i64>()
        .map_err(|_| NormalizeError::UnrecognizedFormat(raw.to_string()))
}

fn to_calendar_date(year: i64, month: i64, day: i64) -> Result<CalendarDate, NormalizeError> {
    let invalid = NormalizeError::InvalidCalendarDate { year, month, day };
    let (Ok(y), Ok(m), Ok(d)) = (i32::try_from(year), u32::try_from(month), u32::try_from(day))
    else {
        return Err(invalid);
    };
    CalendarDate::from_ymd(y, m, d).ok_or(invalid)
}
