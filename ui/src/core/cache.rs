//! Get-or-load cache for the prepared table.
//!
//! The UI re-renders top to bottom on every interaction, so views ask the
//! cache instead of the loader. An entry is reused while the file's path and
//! modification time are unchanged and the entry is younger than the TTL.
//! Failed loads are cached as well: the session keeps its empty table and
//! error message until the window elapses or the file changes.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime};

use crate::core::error::LoadError;
use crate::core::loader::load_table_with;
use crate::core::source::{TableSource, XlsxSource};
use crate::core::table::CompanyTable;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Outcome of one load: either a prepared table, or an empty one plus the reason.
#[derive(Debug, Default)]
pub struct Dataset {
    pub table: CompanyTable,
    pub error: Option<LoadError>,
}

impl Dataset {
    pub fn from_result(result: Result<CompanyTable, LoadError>) -> Self {
        match result {
            Ok(table) => Self { table, error: None },
            Err(error) => Self {
                table: CompanyTable::empty(),
                error: Some(error),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    path: PathBuf,
    modified: Option<SystemTime>,
}

impl CacheKey {
    fn probe(path: &Path) -> Self {
        let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok();
        Self {
            path: path.to_path_buf(),
            modified,
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    key: CacheKey,
    loaded_at: Instant,
    dataset: Rc<Dataset>,
}

/// Single-slot cache; one dashboard reads one workbook.
#[derive(Debug)]
pub struct DataCache<S = XlsxSource> {
    source: S,
    ttl: Duration,
    entry: RefCell<Option<CacheEntry>>,
}

impl DataCache<XlsxSource> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_source(XlsxSource, ttl)
    }
}

impl Default for DataCache<XlsxSource> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl<S: TableSource> DataCache<S> {
    pub fn with_source(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: RefCell::new(None),
        }
    }

    pub fn get_or_load(&self, path: &Path) -> Rc<Dataset> {
        self.get_or_load_at(path, Instant::now())
    }

    /// Same as [`get_or_load`](Self::get_or_load) with an explicit clock reading.
    pub fn get_or_load_at(&self, path: &Path, now: Instant) -> Rc<Dataset> {
        let key = CacheKey::probe(path);

        if let Some(entry) = self.entry.borrow().as_ref() {
            let fresh = now.saturating_duration_since(entry.loaded_at) < self.ttl;
            if fresh && entry.key == key {
                tracing::trace!(path = %path.display(), "company table cache hit");
                return Rc::clone(&entry.dataset);
            }
            if !fresh {
                tracing::debug!(path = %path.display(), "company table cache expired");
            } else {
                tracing::debug!(path = %path.display(), "data file changed; reloading");
            }
        }

        let dataset = Rc::new(Dataset::from_result(load_table_with(&self.source, path)));
        *self.entry.borrow_mut() = Some(CacheEntry {
            key,
            loaded_at: now,
            dataset: Rc::clone(&dataset),
        });
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::tests::{header, row};
    use crate::core::source::RawTable;
    use std::cell::Cell as Counter;
    use std::fs::File;

    struct CountingSource {
        reads: Counter<usize>,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                reads: Counter::new(0),
            }
        }
    }

    impl TableSource for CountingSource {
        fn read_table(&self, _path: &Path) -> Result<RawTable, LoadError> {
            self.reads.set(self.reads.get() + 1);
            let mut raw = header();
            raw.push_row(row(1, "A", 2019, [1.0, 1.0, 1.0, 1.0], 5.0));
            Ok(raw)
        }
    }

    fn touch(path: &Path, modified: SystemTime) {
        let file = File::options()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .unwrap();
        file.set_modified(modified).unwrap();
    }

    #[test]
    fn reuses_entry_within_ttl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        touch(&path, SystemTime::now());

        let cache = DataCache::with_source(CountingSource::new(), DEFAULT_CACHE_TTL);
        let start = Instant::now();
        let first = cache.get_or_load_at(&path, start);
        let second = cache.get_or_load_at(&path, start + Duration::from_secs(60));

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.source.reads.get(), 1);
        assert_eq!(first.table.len(), 1);
    }

    #[test]
    fn reloads_after_ttl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        touch(&path, SystemTime::now());

        let cache = DataCache::with_source(CountingSource::new(), Duration::from_secs(10));
        let start = Instant::now();
        cache.get_or_load_at(&path, start);
        cache.get_or_load_at(&path, start + Duration::from_secs(11));

        assert_eq!(cache.source.reads.get(), 2);
    }

    #[test]
    fn reloads_when_file_is_modified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        let base = SystemTime::now() - Duration::from_secs(3600);
        touch(&path, base);

        let cache = DataCache::with_source(CountingSource::new(), DEFAULT_CACHE_TTL);
        let start = Instant::now();
        cache.get_or_load_at(&path, start);
        touch(&path, base + Duration::from_secs(120));
        cache.get_or_load_at(&path, start + Duration::from_secs(1));

        assert_eq!(cache.source.reads.get(), 2);
    }

    #[test]
    fn missing_file_is_cached_as_empty_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xlsx");

        let cache = DataCache::with_source(CountingSource::new(), DEFAULT_CACHE_TTL);
        let start = Instant::now();
        let first = cache.get_or_load_at(&path, start);
        let second = cache.get_or_load_at(&path, start + Duration::from_secs(5));

        assert!(first.is_empty());
        assert!(matches!(first.error, Some(LoadError::MissingFile(_))));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.source.reads.get(), 0);

        // The file showing up changes the key, so the next access loads it.
        touch(&path, SystemTime::now());
        let third = cache.get_or_load_at(&path, start + Duration::from_secs(6));
        assert!(!third.is_empty());
    }
}
