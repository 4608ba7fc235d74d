//! Ordered week sequence returned by the builder.

use crate::model::date::CalendarDate;
use crate::model::week::WeekRecord;
use serde::{Deserialize, Serialize};

/// Chronological list of week records. Owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    weeks: Vec<WeekRecord>,
}

impl Timeline {
    pub(crate) fn new(weeks: Vec<WeekRecord>) -> Self {
        Self { weeks }
    }

    pub fn weeks(&self) -> &[WeekRecord] {
        &self.weeks
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Weeks split into consecutive runs sharing the same age.
    pub fn years(&self) -> Vec<&[WeekRecord]> {
        let mut runs = Vec::new();
        let mut run_start = 0;
        for index in 1..=self.weeks.len() {
            if index == self.weeks.len() || self.weeks[index].age != self.weeks[run_start].age {
                runs.push(&self.weeks[run_start..index]);
                run_start = index;
            }
        }
        runs
    }

    /// Week whose `[start_date, end_date]` contains `date`, if any.
    pub fn week_containing(&self, date: CalendarDate) -> Option<&WeekRecord> {
        let after = self.weeks.partition_point(|week| week.start_date <= date);
        let candidate = self.weeks.get(after.checked_sub(1)?)?;
        candidate.contains(date).then_some(candidate)
    }
}
