//! Tabular input for the loader.
//!
//! The loader never talks to a spreadsheet library directly. It asks a
//! [`TableSource`] for a [`RawTable`]: one header row plus loosely typed
//! cells. [`XlsxSource`] is the production reader (calamine); tests and
//! alternative front-ends can hand in any other implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::core::error::LoadError;

/// A single cell as read from the source, before any column-specific coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Numeric view of the cell. Text is trimmed and parsed; non-finite values count as missing.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Empty => return None,
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
        };
        value.is_finite().then_some(value)
    }

    /// Integral view of the cell; `600000.0` is accepted, `1.5` is not.
    pub fn as_integer(&self) -> Option<i64> {
        let value = self.as_f64()?;
        (value.fract() == 0.0 && value.abs() < i64::MAX as f64).then_some(value as i64)
    }

    /// Trimmed, non-empty text. Whole numbers render without a trailing `.0`.
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            Cell::Empty => return None,
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        };
        (!text.is_empty()).then_some(text)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            // Serial number; the workbook has no date columns we care about.
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Empty,
        }
    }
}

/// Header row plus data rows. Rows may be shorter than the header; absent cells read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Pluggable reader turning a file on disk into a [`RawTable`].
pub trait TableSource {
    fn read_table(&self, path: &Path) -> Result<RawTable, LoadError>;
}

/// Reads the first worksheet of an `.xlsx` workbook; its first row is the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSource;

impl TableSource for XlsxSource {
    fn read_table(&self, path: &Path) -> Result<RawTable, LoadError> {
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(LoadError::NoWorksheet)??;

        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|header| {
                header
                    .iter()
                    .map(|data| Cell::from(data).as_text().unwrap_or_default())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let mut table = RawTable::new(headers);
        for row in rows {
            table.push_row(row.iter().map(Cell::from).collect());
        }

        tracing::debug!(
            path = %path.display(),
            rows = table.rows.len(),
            columns = table.headers.len(),
            "read worksheet"
        );
        Ok(table)
    }
}
