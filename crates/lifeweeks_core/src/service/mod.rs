//! Load-and-build orchestration.
//!
//! # Responsibility
//! - Define the sheet acquisition seam (`SheetSource`).
//! - Load events and phases into an immutable snapshot, then build.
//!
//! # Invariants
//! - Acquisition failures are fatal for the build; nothing is retried.
//! - A reload produces a fresh snapshot; snapshots are never mutated.

pub mod source;
pub mod timeline_service;

pub use source::{AcquisitionError, DirectorySheetSource, SheetSource, StaticSheetSource};
pub use timeline_service::{ServiceError, TimelineService, TimelineSnapshot};
