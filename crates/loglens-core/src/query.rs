//! Pure query operations over an already-obtained log set.
//!
//! Every function here works on an immutable snapshot and performs no I/O
//! and no locking; the store hands out `Arc` snapshots precisely so these
//! can run concurrently without coordination.

use std::collections::HashMap;

use crate::error::{LogError, Result};
use crate::types::{FilterCriteria, LogRecord, LogStats};

/// Returns the records matching every set constraint, preserving the set's
/// order. Empty criteria return the input unchanged.
#[must_use]
pub fn filter(records: &[LogRecord], criteria: &FilterCriteria) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|record| record.matches(criteria))
        .cloned()
        .collect()
}

/// Returns the contiguous window of up to `limit` records starting at
/// offset `skip`, in the set's existing order.
///
/// A `skip` past the end of the set yields an empty window, not an error.
///
/// # Errors
///
/// Returns [`LogError::InvalidPagination`] if `skip < 0` or `limit < 1`;
/// out-of-range parameters are reported to the caller, never clamped.
pub fn paginate(records: &[LogRecord], skip: i64, limit: i64) -> Result<Vec<LogRecord>> {
    if skip < 0 {
        return Err(LogError::InvalidPagination(format!(
            "skip must be non-negative, got {skip}"
        )));
    }
    if limit < 1 {
        return Err(LogError::InvalidPagination(format!(
            "limit must be at least 1, got {limit}"
        )));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let window = records
        .iter()
        .skip(skip as usize)
        .take(limit as usize)
        .cloned()
        .collect();
    Ok(window)
}

/// Finds the record with the given content-addressed identifier.
///
/// # Errors
///
/// Returns [`LogError::NotFound`] if no record in the set carries `id`.
pub fn find_by_id<'a>(records: &'a [LogRecord], id: &str) -> Result<&'a LogRecord> {
    records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| LogError::NotFound(id.to_string()))
}

/// Computes aggregate counts over the set.
///
/// Every record contributes exactly once to the total and to the per-level
/// and per-component mappings; the mapping keys are whatever tokens appear
/// in the data.
#[must_use]
pub fn aggregate(records: &[LogRecord]) -> LogStats {
    let mut by_level: HashMap<String, usize> = HashMap::new();
    let mut by_component: HashMap<String, usize> = HashMap::new();

    for record in records {
        *by_level.entry(record.level.clone()).or_default() += 1;
        *by_component.entry(record.component.clone()).or_default() += 1;
    }

    LogStats {
        total_count: records.len(),
        by_level,
        by_component,
    }
}
