//! Spreadsheet table wire shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Header metadata for one column. Only the label is meaningful here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetColumn {
    #[serde(default)]
    pub label: Option<String>,
}

/// One cell; `v` carries the raw typed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetCell {
    #[serde(default)]
    pub v: Value,
}

impl SheetCell {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            v: Value::String(value.into()),
        }
    }

    /// Renders the cell as text.
    ///
    /// Strings pass through (blank ones read as `None`), whole numbers drop
    /// their fractional part, booleans and nulls read as `None`.
    pub fn as_text(&self) -> Option<String> {
        match &self.v {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            }),
            _ => None,
        }
    }
}

/// One table row. Missing trailing cells and `null` cells are both absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    #[serde(default)]
    pub c: Vec<Option<SheetCell>>,
}

impl SheetRow {
    pub fn cell_text(&self, position: Option<usize>) -> Option<String> {
        self.c
            .get(position?)
            .and_then(Option::as_ref)
            .and_then(SheetCell::as_text)
    }
}

/// Header plus rows, as delivered by the spreadsheet service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    #[serde(default)]
    pub cols: Vec<SheetColumn>,
    #[serde(default)]
    pub rows: Vec<SheetRow>,
}

/// Sheet payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetParseError {
    pub message: String,
}

impl Display for SheetParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid sheet payload: {}", self.message)
    }
}

impl Error for SheetParseError {}

impl SheetTable {
    /// Builds a text-only table. Handy for fixtures and programmatic input.
    pub fn from_text_rows(labels: &[&str], rows: &[Vec<Option<&str>>]) -> Self {
        Self {
            cols: labels
                .iter()
                .map(|label| SheetColumn {
                    label: Some((*label).to_string()),
                })
                .collect(),
            rows: rows
                .iter()
                .map(|row| SheetRow {
                    c: row.iter().map(|cell| cell.map(SheetCell::text)).collect(),
                })
                .collect(),
        }
    }

    /// Decodes a sheet payload.
    ///
    /// Accepts a bare table object, a `{ "table": {...} }` envelope, or a
    /// callback-wrapped response; anything outside the outermost braces is
    /// discarded.
    pub fn parse(text: &str) -> Result<Self, SheetParseError> {
        let (Some(open), Some(close)) = (text.find('{'), text.rfind('}')) else {
            return Err(SheetParseError {
                message: "no JSON object found".to_string(),
            });
        };
        if close < open {
            return Err(SheetParseError {
                message: "unbalanced JSON object".to_string(),
            });
        }

        let mut value: Value =
            serde_json::from_str(&text[open..=close]).map_err(|err| SheetParseError {
                message: err.to_string(),
            })?;
        if let Some(table) = value.get_mut("table") {
            value = table.take();
        }

        serde_json::from_value(value).map_err(|err| SheetParseError {
            message: err.to_string(),
        })
    }
}
