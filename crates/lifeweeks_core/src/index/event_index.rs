//! Event index construction and lookup.

use crate::model::date::CalendarDate;
use crate::model::event::EventRecord;
use crate::normalize::normalize_cell;
use crate::sheet::schema::{LABEL_DATE, LABEL_NAME};
use crate::sheet::{ColumnMap, EventRowSchema, RawEventRow, RowError, SheetTable};
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable mapping from calendar date to its events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex {
    by_date: BTreeMap<CalendarDate, Vec<Arc<EventRecord>>>,
    total: usize,
    skipped: usize,
}

impl EventIndex {
    /// Builds the index from already-extracted rows.
    ///
    /// Rows whose date fails normalization or whose name is absent are
    /// skipped; everything else is appended under its date in input order.
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawEventRow>,
    {
        let mut index = Self::default();

        for (row_number, row) in rows.into_iter().enumerate() {
            match event_from_row(row) {
                Ok((date, event)) => {
                    index.by_date.entry(date).or_default().push(Arc::new(event));
                    index.total += 1;
                }
                Err(err) => {
                    index.skipped += 1;
                    debug!(
                        "event=event_row_skip module=index status=skip row={} reason={}",
                        row_number, err
                    );
                }
            }
        }

        info!(
            "event=event_index_build module=index status=ok events={} dates={} skipped={}",
            index.total,
            index.by_date.len(),
            index.skipped
        );
        index
    }

    /// Maps the table header once, then builds from every row.
    pub fn from_table(table: &SheetTable) -> Self {
        let schema = EventRowSchema::resolve(&ColumnMap::from_columns(&table.cols));
        Self::build(table.rows.iter().map(|row| schema.read(row)))
    }

    /// Events on exactly `date`, in input order.
    pub fn events_on(&self, date: CalendarDate) -> &[Arc<EventRecord>] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of indexed events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    /// Number of input rows dropped during the build.
    pub fn skipped_rows(&self) -> usize {
        self.skipped
    }

    /// Dates in ascending order with their events.
    pub fn iter(&self) -> impl Iterator<Item = (CalendarDate, &[Arc<EventRecord>])> {
        self.by_date
            .iter()
            .map(|(date, events)| (*date, events.as_slice()))
    }
}

/// Validates one event row.
///
/// # Errors
/// - `RowError::InvalidDate` when `date` is absent or not normalizable.
/// - `RowError::MissingField("name")` when the name is absent or blank.
pub fn event_from_row(row: RawEventRow) -> Result<(CalendarDate, EventRecord), RowError> {
    let date = normalize_cell(row.date.as_deref()).map_err(|source| RowError::InvalidDate {
        field: LABEL_DATE,
        source,
    })?;
    let name = row
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or(RowError::MissingField(LABEL_NAME))?;

    Ok((
        date,
        EventRecord {
            name,
            description: row.desc,
            category: row.category,
            link: row.link,
            is_birthday: false,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::{event_from_row, EventIndex};
    use crate::model::date::CalendarDate;
    use crate::sheet::{RawEventRow, RowError, SheetTable};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).expect("valid test date")
    }

    fn row(date: Option<&str>, name: Option<&str>) -> RawEventRow {
        RawEventRow {
            date: date.map(str::to_string),
            name: name.map(str::to_string),
            ..RawEventRow::default()
        }
    }

    #[test]
    fn keeps_input_order_per_date() {
        let index = EventIndex::build(vec![
            row(Some("2015-06-20"), Some("A")),
            row(Some("2015-06-21"), Some("C")),
            row(Some("Date(2015,5,20)"), Some("B")),
        ]);
        let names: Vec<_> = index
            .events_on(date(2015, 6, 20))
            .iter()
            .map(|event| event.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.date_count(), 2);
    }

    #[test]
    fn skips_rows_without_valid_date_or_name() {
        let index = EventIndex::build(vec![
            row(None, Some("no date")),
            row(Some("garbage"), Some("bad date")),
            row(Some("2015-02-30"), Some("impossible")),
            row(Some("2015-06-20"), None),
            row(Some("2015-06-20"), Some("kept")),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped_rows(), 4);
    }

    #[test]
    fn blank_names_are_skipped() {
        let index = EventIndex::build(vec![
            row(Some("2015-06-20"), Some("")),
            row(Some("2015-06-20"), Some("   ")),
        ]);
        assert!(index.is_empty());
        assert_eq!(index.skipped_rows(), 2);
        assert_eq!(
            event_from_row(row(Some("2015-06-20"), Some(" "))).unwrap_err(),
            RowError::MissingField("name")
        );
    }

    #[test]
    fn duplicate_rows_are_not_merged() {
        let index = EventIndex::build(vec![
            row(Some("2015-06-20"), Some("same")),
            row(Some("2015-06-20"), Some("same")),
        ]);
        assert_eq!(index.events_on(date(2015, 6, 20)).len(), 2);
    }

    #[test]
    fn from_table_maps_optional_columns() {
        let table = SheetTable::from_text_rows(
            &["category", "desc", "name", "date", "link"],
            &[vec![
                Some("work"),
                Some("first day"),
                Some("New <job>"),
                Some("2012-9-3"),
                Some("https://example.com"),
            ]],
        );
        let index = EventIndex::from_table(&table);
        let events = index.events_on(date(2012, 9, 3));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category.as_deref(), Some("work"));
        assert_eq!(events[0].description.as_deref(), Some("first day"));
        assert_eq!(events[0].link.as_deref(), Some("https://example.com"));
        assert!(!events[0].is_birthday);
    }

    #[test]
    fn iter_walks_dates_in_calendar_order() {
        let index = EventIndex::build(vec![
            row(Some("2016-01-01"), Some("later")),
            row(Some("2015-12-31"), Some("earlier")),
        ]);
        let dates: Vec<_> = index.iter().map(|(date, _)| date).collect();
        assert_eq!(dates, vec![date(2015, 12, 31), date(2016, 1, 1)]);
    }

    #[test]
    fn lookup_of_unknown_date_is_empty() {
        let index = EventIndex::default();
        assert!(index.events_on(date(2000, 1, 1)).is_empty());
        assert!(index.is_empty());
    }
}
