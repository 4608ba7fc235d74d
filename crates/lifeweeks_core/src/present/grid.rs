//! Plain-text week grid.

use crate::model::week::WeekRecord;
use crate::present::label::decade_label;
use crate::timeline::Timeline;
use std::fmt::Write;

const GLYPH_EVENT: char = '●';
const GLYPH_BIRTHDAY: char = '*';
const GLYPH_PHASE: char = '▓';
const GLYPH_FUTURE: char = '░';
const GLYPH_PAST: char = '·';

/// Cell glyph for one week. Sourced events take precedence over the
/// birthday marker, which takes precedence over phase/future shading.
pub fn week_glyph(week: &WeekRecord) -> char {
    if week.sourced_events().next().is_some() {
        GLYPH_EVENT
    } else if week.is_birthday_week {
        GLYPH_BIRTHDAY
    } else if week.phase_key.is_some() {
        GLYPH_PHASE
    } else if week.is_future {
        GLYPH_FUTURE
    } else {
        GLYPH_PAST
    }
}

/// One line per age-year, with a heading line before each decade.
pub fn render_grid(timeline: &Timeline) -> String {
    let mut out = String::new();
    for year in timeline.years() {
        let first = &year[0];
        if first.is_decade_start {
            let (heading, _) = decade_label(first.age);
            let _ = writeln!(out, "{heading}");
        }
        let cells: String = year.iter().map(week_glyph).collect();
        let _ = writeln!(out, "{:>3} {}", first.age, cells);
    }
    out
}
