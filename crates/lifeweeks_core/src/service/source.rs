//! Sheet acquisition contracts and local implementations.

use crate::sheet::SheetTable;
use log::{error, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const SHEET_FILE_EXTENSION: &str = "json";

/// Failure to obtain a sheet table.
#[derive(Debug)]
pub enum AcquisitionError {
    InvalidSheetName(String),
    SheetNotFound(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        sheet: String,
        message: String,
    },
}

impl Display for AcquisitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSheetName(name) => write!(f, "sheet name is invalid: `{name}`"),
            Self::SheetNotFound(name) => write!(f, "sheet not found: `{name}`"),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { sheet, message } => write!(f, "sheet `{sheet}` is malformed: {message}"),
        }
    }
}

impl Error for AcquisitionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Anything that can hand over a sheet table by name.
pub trait SheetSource {
    fn fetch_table(&self, sheet: &str) -> Result<SheetTable, AcquisitionError>;
}

impl<S: SheetSource + ?Sized> SheetSource for &S {
    fn fetch_table(&self, sheet: &str) -> Result<SheetTable, AcquisitionError> {
        (**self).fetch_table(sheet)
    }
}

/// Reads `<root>/<sheet>.json` files holding sheet payloads.
#[derive(Debug, Clone)]
pub struct DirectorySheetSource {
    root: PathBuf,
}

impl DirectorySheetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn sheet_path(&self, sheet: &str) -> Result<PathBuf, AcquisitionError> {
        let name = sheet.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(AcquisitionError::InvalidSheetName(sheet.to_string()));
        }
        Ok(self
            .root
            .join(format!("{name}.{SHEET_FILE_EXTENSION}")))
    }
}

impl SheetSource for DirectorySheetSource {
    fn fetch_table(&self, sheet: &str) -> Result<SheetTable, AcquisitionError> {
        let path = self.sheet_path(sheet)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                error!(
                    "event=sheet_fetch module=service status=error sheet={} error={}",
                    sheet, err
                );
                if err.kind() == std::io::ErrorKind::NotFound {
                    return Err(AcquisitionError::SheetNotFound(sheet.to_string()));
                }
                return Err(AcquisitionError::Io { path, source: err });
            }
        };

        let table = SheetTable::parse(&text).map_err(|err| AcquisitionError::Parse {
            sheet: sheet.to_string(),
            message: err.message,
        })?;
        info!(
            "event=sheet_fetch module=service status=ok sheet={} rows={}",
            sheet,
            table.rows.len()
        );
        Ok(table)
    }
}

/// In-memory tables keyed by sheet name.
#[derive(Debug, Clone, Default)]
pub struct StaticSheetSource {
    tables: BTreeMap<String, SheetTable>,
}

impl StaticSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, sheet: impl Into<String>, table: SheetTable) -> Self {
        self.tables.insert(sheet.into(), table);
        self
    }
}

impl SheetSource for StaticSheetSource {
    fn fetch_table(&self, sheet: &str) -> Result<SheetTable, AcquisitionError> {
        self.tables
            .get(sheet)
            .cloned()
            .ok_or_else(|| AcquisitionError::SheetNotFound(sheet.to_string()))
    }
}
