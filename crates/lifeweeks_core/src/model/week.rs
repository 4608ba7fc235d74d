//! Timeline output unit.

use crate::model::date::CalendarDate;
use crate::model::event::EventRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An event placed in a week, tagged with the date it occurs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEvent {
    pub date: CalendarDate,
    pub event: Arc<EventRecord>,
}

/// One 7-day cell of the timeline, anchored to the birth date's weekday.
///
/// # Invariants
/// - `end_date == start_date + 6 days`.
/// - When `is_birthday_week` is set, the first entry of `events` is the
///   synthesized birthday record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub age: i32,
    /// Week position inside its age-year, `0..52`.
    pub index_in_year: u32,
    pub is_decade_start: bool,
    pub phase_key: Option<String>,
    pub phase_color: Option<String>,
    pub is_future: bool,
    pub is_birthday_week: bool,
    pub events: Vec<WeekEvent>,
}

impl WeekRecord {
    /// Returns whether `date` falls inside this week.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Sourced (non-birthday) events in display order.
    pub fn sourced_events(&self) -> impl Iterator<Item = &WeekEvent> {
        self.events.iter().filter(|entry| !entry.event.is_birthday)
    }
}
