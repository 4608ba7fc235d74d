//! Life-phase resolution.
//!
//! # Responsibility
//! - Hold the ordered phase list and answer "which phase is active on D".
//!
//! # Invariants
//! - List order is precedence order: the first containing interval wins,
//!   regardless of interval length or start date.

pub mod resolver;

pub use resolver::{phase_from_row, PhaseResolver};
