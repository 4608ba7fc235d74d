//! Named life-era intervals.

use crate::model::date::CalendarDate;
use serde::{Deserialize, Serialize};

/// Colored date interval. `end == None` means open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseInterval {
    pub key: String,
    pub start: CalendarDate,
    pub end: Option<CalendarDate>,
    /// Display color including its leading `#`.
    pub color: String,
    pub event_color: Option<String>,
}

impl PhaseInterval {
    /// Returns whether `date` lies in `[start, end]` (both inclusive).
    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}
