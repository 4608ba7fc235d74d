//! Week-grid timeline construction.
//!
//! # Responsibility
//! - Walk every age-year from the start date to the configured end year and
//!   emit one `WeekRecord` per 7-day cell.
//!
//! # Invariants
//! - Each age-year emits at most 52 weeks and never a week starting on or
//!   after the next birthday.
//! - Weeks are emitted in chronological order.
//! - The builder reads its inputs only; it never mutates the index or the
//!   phase list.

pub mod builder;
pub mod sequence;

pub use builder::{build_timeline, DAYS_PER_WEEK, FUTURE_DEFAULT_COLOR, WEEKS_PER_YEAR};
pub use sequence::Timeline;
