//! Runtime configuration assembled by the platform entry point.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::cache::DEFAULT_CACHE_TTL;
use crate::core::theme::Palette;

/// File name of the source workbook inside the data directory.
pub const DATA_FILE_NAME: &str = "中国上市企业数字化转型指数（2007-2020）.xlsx";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub cache_ttl: Duration,
    pub palette: Palette,
}

impl DashboardConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            cache_ttl: DEFAULT_CACHE_TTL,
            palette: Palette::default(),
        }
    }

    /// Expect the workbook under its canonical name inside `dir`.
    pub fn in_data_dir(dir: &Path) -> Self {
        Self::new(dir.join(DATA_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_uses_canonical_file_name() {
        let config = DashboardConfig::in_data_dir(Path::new("/opt/digiscore/data"));
        assert!(config.data_path.ends_with(DATA_FILE_NAME));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.palette, Palette::BRICK_RED);
    }
}
