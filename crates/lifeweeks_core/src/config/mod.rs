//! Timeline configuration.
//!
//! # Responsibility
//! - Accept raw settings (config file, CLI flags) and validate them into a
//!   `TimelineConfig` the builder can trust.
//!
//! # Invariants
//! - A `TimelineConfig` always has a start date and `end_year >= start year`.
//! - Every anniversary through `end_year + 1` is representable.
//! - `today` is injected, never read from the clock inside the core.

pub mod settings;

pub use settings::{ConfigError, TimelineConfig, TimelineSettings, DEFAULT_SHEET_NAME};
