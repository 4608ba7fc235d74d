//! Timeline use-case service.

use crate::config::{ConfigError, TimelineConfig};
use crate::index::EventIndex;
use crate::phase::PhaseResolver;
use crate::service::source::{AcquisitionError, SheetSource};
use crate::timeline::{build_timeline, Timeline};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fatal error from a load or build.
#[derive(Debug)]
pub enum ServiceError {
    Config(ConfigError),
    Acquisition(AcquisitionError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Acquisition(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Acquisition(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ServiceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<AcquisitionError> for ServiceError {
    fn from(value: AcquisitionError) -> Self {
        Self::Acquisition(value)
    }
}

/// Both builder inputs, fully loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineSnapshot {
    pub events: EventIndex,
    pub phases: PhaseResolver,
}

impl TimelineSnapshot {
    pub fn build(&self, config: &TimelineConfig) -> Result<Timeline, ConfigError> {
        build_timeline(config, &self.events, &self.phases)
    }
}

/// Loads sheets from a `SheetSource` and builds timelines.
pub struct TimelineService<S: SheetSource> {
    source: S,
}

impl<S: SheetSource> TimelineService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches the event sheet and `<sheet>Phases`, returning a fresh
    /// snapshot. Call again to reload.
    ///
    /// # Errors
    /// - Any acquisition failure of either sheet; no partial snapshot is
    ///   returned.
    pub fn load(&self, config: &TimelineConfig) -> Result<TimelineSnapshot, AcquisitionError> {
        let event_table = self.source.fetch_table(config.sheet_name())?;
        let phase_table = self.source.fetch_table(&config.phase_sheet_name())?;

        Ok(TimelineSnapshot {
            events: EventIndex::from_table(&event_table),
            phases: PhaseResolver::from_table(&phase_table),
        })
    }

    /// Loads a snapshot and builds the timeline from it.
    pub fn build(&self, config: &TimelineConfig) -> Result<Timeline, ServiceError> {
        let snapshot = self.load(config)?;
        Ok(snapshot.build(config)?)
    }
}
