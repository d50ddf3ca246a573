//! Data layer: workbook reading, the prepared table, caching and session state.

pub mod cache;
pub mod columns;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod session;
pub mod source;
pub mod table;
pub mod theme;
