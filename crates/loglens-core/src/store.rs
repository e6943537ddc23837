//! Directory-backed log store with a process-wide cache.
//!
//! This module provides:
//! - [`load_dir`] — One full scan-and-parse pass over a log directory
//! - [`LogStore`] — Cached access to the parsed log set with explicit
//!   invalidation

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{LogError, Result};
use crate::parser::parse_line;
use crate::types::LogRecord;

/// Loads and parses every regular file in `dir`.
///
/// Files are read line by line in directory enumeration order; lines that
/// fail to parse are dropped. Non-regular entries (subdirectories, special
/// files) are skipped.
///
/// # Errors
///
/// Returns [`LogError::SourceUnavailable`] if the directory cannot be
/// enumerated or a file cannot be opened or read. Unlike parse failures,
/// I/O failures are fatal for the scan.
pub fn load_dir(dir: &Path) -> Result<Vec<LogRecord>> {
    let entries = fs::read_dir(dir).map_err(|source| LogError::SourceUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LogError::SourceUnavailable {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|source| LogError::SourceUnavailable {
            path: path.clone(),
            source,
        })?;
        if !file_type.is_file() {
            debug!(path = %path.display(), "skipping non-regular entry");
            continue;
        }

        read_file_into(&path, &mut records)?;
    }

    info!(dir = %dir.display(), records = records.len(), "log directory scanned");
    Ok(records)
}

/// Appends every parseable line of one file to `records`, preserving line
/// order.
fn read_file_into(path: &Path, records: &mut Vec<LogRecord>) -> Result<()> {
    let file = fs::File::open(path).map_err(|source| LogError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| LogError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(record) = parse_line(&line) {
            records.push(record);
        }
    }

    Ok(())
}

/// Directory-backed log store with an in-memory cache of the parsed set.
///
/// The cache holds one immutable generation of records behind an `Arc`;
/// readers receive a snapshot that stays consistent even if the store is
/// invalidated and repopulated underneath them. Population and invalidation
/// are mutually exclusive critical sections on a single lock, so concurrent
/// callers against an empty cache trigger exactly one directory scan.
#[derive(Debug)]
pub struct LogStore {
    /// Directory the store scans on population.
    dir: PathBuf,
    /// Current cache generation, if populated.
    cache: Mutex<Option<Arc<Vec<LogRecord>>>>,
}

impl LogStore {
    /// Creates a store over the given log directory. No I/O happens until
    /// the first [`snapshot`](Self::snapshot) call.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(None),
        }
    }

    /// Returns the current log set, scanning the directory if the cache is
    /// empty.
    ///
    /// The check-and-populate sequence holds the cache lock for the duration
    /// of the scan: a caller either sees the prior complete set, blocks until
    /// the in-flight scan finishes, or performs the scan itself. No caller
    /// ever observes a partially populated set.
    ///
    /// # Errors
    ///
    /// Propagates [`LogError::SourceUnavailable`] from the scan. A failed
    /// scan leaves the cache empty, so a later call retries.
    pub fn snapshot(&self) -> Result<Arc<Vec<LogRecord>>> {
        let mut cache = self.cache.lock();

        if let Some(records) = cache.as_ref() {
            return Ok(Arc::clone(records));
        }

        let records = Arc::new(load_dir(&self.dir)?);
        *cache = Some(Arc::clone(&records));
        Ok(records)
    }

    /// Clears the cache unconditionally.
    ///
    /// Idempotent: invalidating an empty cache is a no-op. The next
    /// [`snapshot`](Self::snapshot) call performs a fresh scan. Takes the
    /// same lock as population, so an invalidation never interleaves with an
    /// in-flight reload.
    pub fn invalidate(&self) {
        let mut cache = self.cache.lock();
        if cache.take().is_some() {
            info!(dir = %self.dir.display(), "log cache invalidated");
        }
    }

    /// Returns true if a cache generation is currently populated.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache.lock().is_some()
    }

    /// The directory this store scans.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
