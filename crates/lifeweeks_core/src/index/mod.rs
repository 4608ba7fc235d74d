//! Date-keyed event lookup.
//!
//! # Responsibility
//! - Turn validated event rows into an immutable date -> events map.
//!
//! # Invariants
//! - Per-date order equals input row order; no deduplication.
//! - The index is built once per load and never mutated afterwards.

pub mod event_index;

pub use event_index::{event_from_row, EventIndex};
