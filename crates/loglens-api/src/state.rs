//! Shared state for the API server.

use std::sync::Arc;
use std::time::Instant;

use loglens_core::{LogRecord, LogStore};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Shared state for the API server.
///
/// Owns the log store explicitly rather than relying on ambient globals, so
/// tests can construct an isolated state over a fixture directory.
#[derive(Debug)]
pub struct ApiState {
    /// Server configuration.
    config: Arc<ApiConfig>,
    /// Directory-backed log store with the process-wide cache.
    store: Arc<LogStore>,
    /// Server start time.
    start_time: Instant,
}

impl ApiState {
    /// Create a new state, building the store from the configured log
    /// directory.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let store = Arc::new(LogStore::new(config.log_dir.clone()));
        Self {
            config: Arc::new(config),
            store,
            start_time: Instant::now(),
        }
    }

    /// Create a new state around an existing store.
    #[must_use]
    pub fn with_store(config: ApiConfig, store: Arc<LogStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            start_time: Instant::now(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Get a reference to the log store.
    #[must_use]
    pub fn store(&self) -> Arc<LogStore> {
        Arc::clone(&self.store)
    }

    /// Get server uptime in seconds.
    #[must_use]
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Returns the current log set, scanning the directory on a cache miss.
    ///
    /// The scan is synchronous disk I/O and may hold the store lock for its
    /// duration, so it runs on the blocking thread pool rather than a
    /// runtime worker.
    pub async fn snapshot(&self) -> ApiResult<Arc<Vec<LogRecord>>> {
        let store = Arc::clone(&self.store);
        let records = tokio::task::spawn_blocking(move || store.snapshot())
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;
        Ok(records)
    }

    /// Clears the log cache. The next snapshot performs a fresh scan.
    ///
    /// Runs on the blocking pool because it contends on the same lock as an
    /// in-flight scan.
    pub async fn invalidate(&self) -> ApiResult<()> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.invalidate())
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        let mut file =
            std::fs::File::create(dir.path().join("app.log")).expect("create fixture file");
        writeln!(file, "2024-06-01 10:00:00\tINFO\tauth\tuser logged in").expect("write");
        writeln!(file, "malformed").expect("write");
        dir
    }

    #[tokio::test]
    async fn test_snapshot_reads_fixture() {
        let dir = fixture_dir();
        let state = ApiState::new(ApiConfig::default().with_log_dir(dir.path()));

        let records = state.snapshot().await.expect("snapshot");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].component, "auth");
    }

    #[tokio::test]
    async fn test_snapshot_missing_dir_maps_to_source_unavailable() {
        let dir = TempDir::new().expect("create temp dir");
        let missing = dir.path().join("nope");
        let state = ApiState::new(ApiConfig::default().with_log_dir(missing));

        let err = state.snapshot().await.expect_err("missing dir");
        assert!(matches!(err, ApiError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_invalidate_forces_rescan() {
        let dir = fixture_dir();
        let state = ApiState::new(ApiConfig::default().with_log_dir(dir.path()));

        let before = state.snapshot().await.expect("populate");
        assert_eq!(before.len(), 1);

        let mut file =
            std::fs::File::create(dir.path().join("more.log")).expect("create fixture file");
        writeln!(file, "2024-06-01 11:00:00\tERROR\tdb\tquery failed").expect("write");

        state.invalidate().await.expect("invalidate");
        let after = state.snapshot().await.expect("rescan");
        assert_eq!(after.len(), 2);
    }

    #[tokio::test]
    async fn test_with_store_shares_cache() {
        let dir = fixture_dir();
        let store = Arc::new(LogStore::new(dir.path()));
        let state = ApiState::with_store(ApiConfig::default(), Arc::clone(&store));

        let via_state = state.snapshot().await.expect("snapshot");
        let via_store = store.snapshot().expect("snapshot");
        assert!(Arc::ptr_eq(&via_state, &via_store));
    }

    #[test]
    fn test_uptime_starts_at_zero() {
        let state = ApiState::new(ApiConfig::default());
        assert_eq!(state.uptime_secs(), 0);
    }
}
