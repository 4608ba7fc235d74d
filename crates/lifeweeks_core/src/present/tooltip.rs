//! Per-week tooltip summaries grouped by date.

use crate::model::date::CalendarDate;
use crate::model::event::EventRecord;
use crate::model::week::WeekRecord;
use crate::present::label::display_name;
use serde::Serialize;

/// Events of one week sharing a date, in week order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup<'a> {
    pub date: CalendarDate,
    pub events: Vec<&'a EventRecord>,
}

/// Groups a week's events by date in order of first appearance.
///
/// The birthday entry comes first in a birthday week, so its date group
/// leads even when sourced events share or precede that date.
pub fn group_by_date(week: &WeekRecord) -> Vec<DateGroup<'_>> {
    let mut groups: Vec<DateGroup<'_>> = Vec::new();
    for entry in &week.events {
        match groups.iter_mut().find(|group| group.date == entry.date) {
            Some(group) => group.events.push(&*entry.event),
            None => groups.push(DateGroup {
                date: entry.date,
                events: vec![&*entry.event],
            }),
        }
    }
    groups
}

/// One tooltip entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipEntry {
    pub title: String,
    pub description: Option<String>,
    pub is_birthday: bool,
}

/// Long-form date heading plus the entries under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipBlock {
    pub date_label: String,
    pub entries: Vec<TooltipEntry>,
}

/// Tooltip content; a week without events shows only its start date.
pub fn tooltip_blocks(week: &WeekRecord) -> Vec<TooltipBlock> {
    if week.events.is_empty() {
        return vec![TooltipBlock {
            date_label: long_date(week.start_date),
            entries: Vec::new(),
        }];
    }

    group_by_date(week)
        .into_iter()
        .map(|group| TooltipBlock {
            date_label: long_date(group.date),
            entries: group
                .events
                .into_iter()
                .map(|event| TooltipEntry {
                    title: display_name(&event.name),
                    description: event.description.clone(),
                    is_birthday: event.is_birthday,
                })
                .collect(),
        })
        .collect()
}

/// Plain-text tooltip: blocks separated by a blank line.
pub fn render_tooltip(week: &WeekRecord) -> String {
    tooltip_blocks(week)
        .iter()
        .map(|block| {
            let mut lines = vec![block.date_label.clone()];
            for entry in &block.entries {
                lines.push(format!("  {}", entry.title));
                if let Some(description) = &entry.description {
                    lines.push(format!("    {description}"));
                }
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn long_date(date: CalendarDate) -> String {
    date.as_naive().format("%B %-d, %Y").to_string()
}
