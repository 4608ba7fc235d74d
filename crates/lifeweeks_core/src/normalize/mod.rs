//! Date normalization boundary.
//!
//! # Responsibility
//! - Convert every external date representation into `CalendarDate`.
//!
//! # Invariants
//! - No raw date string flows past this module.
//! - Dates are local calendar dates, never UTC instants.

pub mod date_normalizer;

pub use date_normalizer::{normalize_cell, normalize_date, NormalizeError};
