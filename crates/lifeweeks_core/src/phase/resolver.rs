//! Phase list storage and first-match lookup.

use crate::model::date::CalendarDate;
use crate::model::phase::PhaseInterval;
use crate::normalize::normalize_cell;
use crate::sheet::schema::{LABEL_COLOR, LABEL_END, LABEL_KEY, LABEL_START};
use crate::sheet::{ColumnMap, PhaseRowSchema, RawPhaseRow, RowError, SheetTable};
use log::{debug, info};

/// Ordered, immutable phase list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseResolver {
    phases: Vec<PhaseInterval>,
    skipped: usize,
}

impl PhaseResolver {
    /// Stores `intervals` as given; their order is the precedence order.
    pub fn resolve_all(intervals: Vec<PhaseInterval>) -> Self {
        Self {
            phases: intervals,
            skipped: 0,
        }
    }

    /// Builds intervals from extracted rows, skipping invalid ones.
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawPhaseRow>,
    {
        let mut phases = Vec::new();
        let mut skipped = 0;

        for (row_number, row) in rows.into_iter().enumerate() {
            match phase_from_row(row) {
                Ok(phase) => phases.push(phase),
                Err(err) => {
                    skipped += 1;
                    debug!(
                        "event=phase_row_skip module=phase status=skip row={} reason={}",
                        row_number, err
                    );
                }
            }
        }

        info!(
            "event=phase_load module=phase status=ok phases={} skipped={}",
            phases.len(),
            skipped
        );
        Self { phases, skipped }
    }

    /// Maps the table header once, then builds from every row.
    pub fn from_table(table: &SheetTable) -> Self {
        let schema = PhaseRowSchema::resolve(&ColumnMap::from_columns(&table.cols));
        Self::build(table.rows.iter().map(|row| schema.read(row)))
    }

    /// Returns the first phase in list order containing `date`.
    pub fn phase_for(&self, date: CalendarDate) -> Option<&PhaseInterval> {
        self.phases.iter().find(|phase| phase.contains(date))
    }

    pub fn phases(&self) -> &[PhaseInterval] {
        &self.phases
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped
    }
}

/// Validates one phase row.
///
/// # Errors
/// - `MissingField` when `key` or `color` is absent or blank.
/// - `InvalidDate` when `start` is absent/unparseable, or when `end` is
///   present but unparseable.
pub fn phase_from_row(row: RawPhaseRow) -> Result<PhaseInterval, RowError> {
    let key = row
        .key
        .filter(|key| !key.trim().is_empty())
        .ok_or(RowError::MissingField(LABEL_KEY))?;
    let start = normalize_cell(row.start.as_deref()).map_err(|source| RowError::InvalidDate {
        field: LABEL_START,
        source,
    })?;
    let end = match row.end.as_deref() {
        Some(raw) => Some(
            normalize_cell(Some(raw)).map_err(|source| RowError::InvalidDate {
                field: LABEL_END,
                source,
            })?,
        ),
        None => None,
    };
    let color = row
        .color
        .as_deref()
        .map(|raw| raw.trim().trim_start_matches('#'))
        .filter(|hex| !hex.is_empty())
        .map(|hex| format!("#{hex}"))
        .ok_or(RowError::MissingField(LABEL_COLOR))?;

    Ok(PhaseInterval {
        key,
        start,
        end,
        color,
        event_color: row.event_color,
    })
}
