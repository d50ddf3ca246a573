//! Error types for loading the workbook and building charts.

use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failures while turning the source workbook into a [`CompanyTable`].
///
/// Every variant is surfaced to the user as a message; the session then
/// continues with an empty table.
///
/// [`CompanyTable`]: crate::core::table::CompanyTable
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("unable to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("workbook contains no worksheets")]
    NoWorksheet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("no rows for security code {0}")]
    UnknownCompany(i64),
}
