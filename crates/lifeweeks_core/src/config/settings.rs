//! Raw settings and validated timeline configuration.

use crate::model::date::CalendarDate;
use crate::normalize::{normalize_date, NormalizeError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sheet holding events; phases live in `<name>Phases`.
pub const DEFAULT_SHEET_NAME: &str = "Life";
const PHASE_SHEET_SUFFIX: &str = "Phases";

/// Fatal configuration problems. No timeline can be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingStartDate,
    InvalidStartDate(NormalizeError),
    MissingEndYear,
    EndYearBeforeStart { start_year: i32, end_year: i32 },
    InvalidToday(NormalizeError),
    YearOutOfRange(i32),
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStartDate => write!(f, "start date is required"),
            Self::InvalidStartDate(err) => write!(f, "invalid start date: {err}"),
            Self::MissingEndYear => write!(f, "end year is required"),
            Self::EndYearBeforeStart {
                start_year,
                end_year,
            } => write!(
                f,
                "end year {end_year} is before start year {start_year}"
            ),
            Self::InvalidToday(err) => write!(f, "invalid today date: {err}"),
            Self::YearOutOfRange(year) => write!(f, "year {year} is outside the supported range"),
            Self::Parse(message) => write!(f, "invalid settings: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStartDate(err) | Self::InvalidToday(err) => Some(err),
            _ => None,
        }
    }
}

/// Unvalidated settings as they appear in a config file or on the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSettings {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default)]
    pub sheet_name: Option<String>,
}

impl TimelineSettings {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Returns `self` with every value set in `overrides` replaced.
    pub fn overlay(self, overrides: TimelineSettings) -> Self {
        Self {
            start_date: overrides.start_date.or(self.start_date),
            end_year: overrides.end_year.or(self.end_year),
            today: overrides.today.or(self.today),
            sheet_name: overrides.sheet_name.or(self.sheet_name),
        }
    }
}

/// Validated builder input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineConfig {
    start_date: CalendarDate,
    end_year: i32,
    today: CalendarDate,
    sheet_name: String,
}

impl TimelineConfig {
    /// Validates programmatic input.
    ///
    /// # Errors
    /// - `EndYearBeforeStart` when `end_year < start_date.year()`.
    /// - `YearOutOfRange` when the last anniversary is not representable.
    pub fn new(
        start_date: CalendarDate,
        end_year: i32,
        today: CalendarDate,
    ) -> Result<Self, ConfigError> {
        let start_year = start_date.year();
        if end_year < start_year {
            return Err(ConfigError::EndYearBeforeStart {
                start_year,
                end_year,
            });
        }
        end_year
            .checked_add(1)
            .and_then(|year| start_date.anniversary_in(year))
            .and_then(|last| last.add_days(7))
            .ok_or(ConfigError::YearOutOfRange(end_year))?;

        Ok(Self {
            start_date,
            end_year,
            today,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        })
    }

    /// Validates raw settings. `fallback_today` is used when `today` is unset.
    pub fn from_settings(
        settings: &TimelineSettings,
        fallback_today: CalendarDate,
    ) -> Result<Self, ConfigError> {
        let raw_start = settings
            .start_date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .ok_or(ConfigError::MissingStartDate)?;
        let start_date = normalize_date(raw_start).map_err(ConfigError::InvalidStartDate)?;
        let end_year = settings.end_year.ok_or(ConfigError::MissingEndYear)?;
        let today = match settings.today.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                normalize_date(raw).map_err(ConfigError::InvalidToday)?
            }
            _ => fallback_today,
        };

        let mut config = Self::new(start_date, end_year, today)?;
        if let Some(name) = settings.sheet_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                config.sheet_name = name.to_string();
            }
        }
        Ok(config)
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn phase_sheet_name(&self) -> String {
        format!("{}{PHASE_SHEET_SUFFIX}", self.sheet_name)
    }
}
