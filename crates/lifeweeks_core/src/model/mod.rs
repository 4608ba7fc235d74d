//! Timeline domain model.
//!
//! # Responsibility
//! - Define the canonical records shared by indexing, phase resolution and
//!   timeline construction.
//! - Keep raw external representations out of the core (dates are always
//!   `CalendarDate`).
//!
//! # Invariants
//! - Records are immutable once produced.
//! - Event records are shared (`Arc`) between the index and week records.

pub mod date;
pub mod event;
pub mod phase;
pub mod week;
