//! Core domain logic for the life-in-weeks timeline.
//! Raw sheet rows go in; an ordered sequence of week records comes out.

pub mod config;
pub mod index;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod phase;
pub mod present;
pub mod service;
pub mod sheet;
pub mod timeline;

pub use config::{ConfigError, TimelineConfig, TimelineSettings};
pub use index::EventIndex;
pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use model::date::CalendarDate;
pub use model::event::EventRecord;
pub use model::phase::PhaseInterval;
pub use model::week::{WeekEvent, WeekRecord};
pub use normalize::{normalize_cell, normalize_date, NormalizeError};
pub use phase::PhaseResolver;
pub use service::{
    AcquisitionError, DirectorySheetSource, ServiceError, SheetSource, StaticSheetSource,
    TimelineService, TimelineSnapshot,
};
pub use sheet::{RawEventRow, RawPhaseRow, RowError, SheetTable};
pub use timeline::{build_timeline, Timeline};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
