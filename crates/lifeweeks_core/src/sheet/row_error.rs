//! Per-row rejection reasons.

use crate::normalize::NormalizeError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a single input row was dropped.
///
/// Row errors never abort a load: the row is skipped and counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    InvalidDate {
        field: &'static str,
        source: NormalizeError,
    },
    MissingField(&'static str),
}

impl Display for RowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { field, source } => write!(f, "invalid `{field}`: {source}"),
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
        }
    }
}

impl Error for RowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::MissingField(_) => None,
        }
    }
}
