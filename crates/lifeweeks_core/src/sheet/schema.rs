//! Header-label schema mapping and typed row accessors.

use crate::sheet::table::{SheetColumn, SheetRow};
use std::collections::HashMap;

pub const LABEL_DATE: &str = "date";
pub const LABEL_NAME: &str = "name";
pub const LABEL_DESC: &str = "desc";
pub const LABEL_CATEGORY: &str = "category";
pub const LABEL_LINK: &str = "link";

pub const LABEL_KEY: &str = "key";
pub const LABEL_START: &str = "start";
pub const LABEL_END: &str = "end";
pub const LABEL_COLOR: &str = "color";
pub const LABEL_EVENT_COLOR: &str = "eventColor";

/// Trimmed header label -> column position.
///
/// Unlabeled columns are skipped; a repeated label resolves to its last
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: HashMap<String, usize>,
}

impl ColumnMap {
    pub fn from_columns(cols: &[SheetColumn]) -> Self {
        let mut positions = HashMap::new();
        for (index, col) in cols.iter().enumerate() {
            let Some(label) = col.label.as_deref() else {
                continue;
            };
            let label = label.trim();
            if label.is_empty() {
                continue;
            }
            positions.insert(label.to_string(), index);
        }
        Self { positions }
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }
}

/// Event sheet row with text fields extracted but not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEventRow {
    pub date: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
}

/// Resolved column positions for the event sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventRowSchema {
    date: Option<usize>,
    name: Option<usize>,
    desc: Option<usize>,
    category: Option<usize>,
    link: Option<usize>,
}

impl EventRowSchema {
    pub fn resolve(columns: &ColumnMap) -> Self {
        Self {
            date: columns.position(LABEL_DATE),
            name: columns.position(LABEL_NAME),
            desc: columns.position(LABEL_DESC),
            category: columns.position(LABEL_CATEGORY),
            link: columns.position(LABEL_LINK),
        }
    }

    pub fn read(&self, row: &SheetRow) -> RawEventRow {
        RawEventRow {
            date: row.cell_text(self.date),
            name: row.cell_text(self.name),
            desc: row.cell_text(self.desc),
            category: row.cell_text(self.category),
            link: row.cell_text(self.link),
        }
    }
}

/// Phase sheet row with text fields extracted but not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPhaseRow {
    pub key: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub color: Option<String>,
    pub event_color: Option<String>,
}

/// Resolved column positions for the phase sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseRowSchema {
    key: Option<usize>,
    start: Option<usize>,
    end: Option<usize>,
    color: Option<usize>,
    event_color: Option<usize>,
}

impl PhaseRowSchema {
    pub fn resolve(columns: &ColumnMap) -> Self {
        Self {
            key: columns.position(LABEL_KEY),
            start: columns.position(LABEL_START),
            end: columns.position(LABEL_END),
            color: columns.position(LABEL_COLOR),
            event_color: columns.position(LABEL_EVENT_COLOR),
        }
    }

    pub fn read(&self, row: &SheetRow) -> RawPhaseRow {
        RawPhaseRow {
            key: row.cell_text(self.key),
            start: row.cell_text(self.start),
            end: row.cell_text(self.end),
            color: row.cell_text(self.color),
            event_color: row.cell_text(self.event_color),
        }
    }
}
