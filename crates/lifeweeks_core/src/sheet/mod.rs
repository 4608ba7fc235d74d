//! Tabular input boundary.
//!
//! # Responsibility
//! - Model the spreadsheet table shape (`cols` + `rows` of cells).
//! - Resolve header labels to positions once per load and expose typed row
//!   accessors, so downstream code never touches positional cells.
//!
//! # Invariants
//! - Column identity is by trimmed header label, never by position.
//! - Blank text cells read as absent.

pub mod row_error;
pub mod schema;
pub mod table;

pub use row_error::RowError;
pub use schema::{ColumnMap, EventRowSchema, PhaseRowSchema, RawEventRow, RawPhaseRow};
pub use table::{SheetCell, SheetColumn, SheetParseError, SheetRow, SheetTable};
