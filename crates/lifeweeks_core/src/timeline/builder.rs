//! Timeline builder.
//!
//! Uses a fixed 52-weeks-per-year grid re-anchored on every birthday rather
//! than ISO weeks. The days between the end of week 51 and the next
//! birthday (one, or two in leap spans) are not covered by any week.

use crate::config::{ConfigError, TimelineConfig};
use crate::index::EventIndex;
use crate::model::date::CalendarDate;
use crate::model::event::EventRecord;
use crate::model::week::{WeekEvent, WeekRecord};
use crate::phase::PhaseResolver;
use crate::timeline::sequence::Timeline;
use log::info;
use std::sync::Arc;
use std::time::Instant;

pub const WEEKS_PER_YEAR: u32 = 52;
pub const DAYS_PER_WEEK: i64 = 7;
/// Marker color for weeks that are in the future and not covered by a phase.
pub const FUTURE_DEFAULT_COLOR: &str = "#ccc";

/// Builds the full week sequence.
///
/// # Errors
/// - `ConfigError::YearOutOfRange` when calendar arithmetic leaves the
///   supported date range. `TimelineConfig` validation makes this
///   unreachable for configs built through its constructors.
pub fn build_timeline(
    config: &TimelineConfig,
    events: &EventIndex,
    phases: &PhaseResolver,
) -> Result<Timeline, ConfigError> {
    let started_at = Instant::now();
    let start = config.start_date();
    let today = config.today();
    let year_span = usize::try_from(config.end_year() - start.year() + 1).unwrap_or(0);
    let mut weeks = Vec::with_capacity(year_span * WEEKS_PER_YEAR as usize);

    for year in start.year()..=config.end_year() {
        let out_of_range = || ConfigError::YearOutOfRange(year);
        let year_start = start.anniversary_in(year).ok_or_else(out_of_range)?;
        let next_birthday = year
            .checked_add(1)
            .and_then(|next| start.anniversary_in(next))
            .ok_or_else(out_of_range)?;
        let age = year - start.year();

        for w in 0..WEEKS_PER_YEAR {
            let week_start = year_start
                .add_days(i64::from(w) * DAYS_PER_WEEK)
                .ok_or_else(out_of_range)?;
            if week_start >= next_birthday {
                break;
            }
            let week_end = week_start
                .add_days(DAYS_PER_WEEK - 1)
                .ok_or_else(out_of_range)?;

            let is_future = week_start > today;
            let (phase_key, phase_color) = match phases.phase_for(week_start) {
                Some(phase) => (Some(phase.key.clone()), Some(phase.color.clone())),
                None if is_future => (None, Some(FUTURE_DEFAULT_COLOR.to_string())),
                None => (None, None),
            };

            let mut week_events =
                collect_week_events(events, week_start).ok_or_else(out_of_range)?;

            let is_birthday_week = year_start >= week_start && year_start <= week_end;
            if is_birthday_week {
                week_events.insert(
                    0,
                    WeekEvent {
                        date: year_start,
                        event: Arc::new(EventRecord::birthday(age, year)),
                    },
                );
            }

            weeks.push(WeekRecord {
                start_date: week_start,
                end_date: week_end,
                age,
                index_in_year: w,
                is_decade_start: w == 0 && age % 10 == 0,
                phase_key,
                phase_color,
                is_future,
                is_birthday_week,
                events: week_events,
            });
        }
    }

    info!(
        "event=timeline_build module=timeline status=ok start={} end_year={} years={} weeks={} duration_ms={}",
        start,
        config.end_year(),
        year_span,
        weeks.len(),
        started_at.elapsed().as_millis()
    );
    Ok(Timeline::new(weeks))
}

/// Gathers events for the 7 days starting at `week_start`, day order first,
/// then per-day input order.
fn collect_week_events(events: &EventIndex, week_start: CalendarDate) -> Option<Vec<WeekEvent>> {
    let mut collected = Vec::new();
    for offset in 0..DAYS_PER_WEEK {
        let day = week_start.add_days(offset)?;
        collected.extend(events.events_on(day).iter().map(|event| WeekEvent {
            date: day,
            event: Arc::clone(event),
        }));
    }
    Some(collected)
}
