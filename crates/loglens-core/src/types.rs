//! Core types for the log query system.
//!
//! This module provides:
//! - [`LogRecord`] — One structured entry parsed from a raw log line
//! - [`FilterCriteria`] — Optional filter constraints over a log set
//! - [`LogStats`] — Aggregate counts per level and component

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by the on-disk log files (second resolution, no
/// timezone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A structured log entry parsed from a single raw line.
///
/// Records are immutable once constructed; a reload of the source directory
/// produces an entirely new set rather than mutating records in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Content-addressed identifier: SHA-1 of the normalized raw line,
    /// lowercase hex. Stable for identical input lines across reloads.
    pub id: String,
    /// When the entry was emitted, per the source line.
    pub timestamp: NaiveDateTime,
    /// Severity token, opaque to the core (no fixed enumeration).
    pub level: String,
    /// Emitting subsystem token, opaque to the core.
    pub component: String,
    /// Free-text remainder of the line.
    pub message: String,
}

/// Optional filter constraints applied to a log set.
///
/// Unset criteria impose no constraint; set criteria compose conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact, case-sensitive level match.
    pub level: Option<String>,
    /// Exact component match.
    pub component: Option<String>,
    /// Inclusive lower bound on the timestamp.
    pub start: Option<NaiveDateTime>,
    /// Inclusive upper bound on the timestamp.
    pub end: Option<NaiveDateTime>,
}

/// Aggregate counts over a log set.
///
/// Serialized field names follow the external API contract
/// (`totalCount`, `byLevel`, `byComponent`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStats {
    /// Number of records in the set.
    pub total_count: usize,
    /// Count per distinct level token.
    pub by_level: HashMap<String, usize>,
    /// Count per distinct component token.
    pub by_component: HashMap<String, usize>,
}

impl LogRecord {
    /// Checks whether this record satisfies every set constraint in the
    /// criteria.
    #[must_use]
    pub fn matches(&self, criteria: &FilterCriteria) -> bool {
        if let Some(ref level) = criteria.level {
            if &self.level != level {
                return false;
            }
        }

        if let Some(ref component) = criteria.component {
            if &self.component != component {
                return false;
            }
        }

        if let Some(start) = criteria.start {
            if self.timestamp < start {
                return false;
            }
        }
        if let Some(end) = criteria.end {
            if self.timestamp > end {
                return false;
            }
        }

        true
    }
}

impl FilterCriteria {
    /// Creates an empty criteria set that matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains to an exact level token.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Constrains to an exact component token.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Sets the inclusive lower timestamp bound.
    #[must_use]
    pub const fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the inclusive upper timestamp bound.
    #[must_use]
    pub const fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns true if no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.level.is_none() && self.component.is_none() && self.start.is_none() && self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).expect("valid test timestamp")
    }

    fn make_record(level: &str, component: &str, when: &str) -> LogRecord {
        LogRecord {
            id: "0".repeat(40),
            timestamp: ts(when),
            level: level.to_string(),
            component: component.to_string(),
            message: "something happened".to_string(),
        }
    }

    #[test]
    fn empty_criteria_matches_everything() {
        let record = make_record("INFO", "auth", "2024-06-01 10:00:00");
        assert!(record.matches(&FilterCriteria::new()));
        assert!(FilterCriteria::new().is_empty());
    }

    #[test]
    fn level_match_is_case_sensitive() {
        let record = make_record("ERROR", "auth", "2024-06-01 10:00:00");
        assert!(record.matches(&FilterCriteria::new().with_level("ERROR")));
        assert!(!record.matches(&FilterCriteria::new().with_level("error")));
    }

    #[test]
    fn component_match_is_exact() {
        let record = make_record("INFO", "auth", "2024-06-01 10:00:00");
        assert!(record.matches(&FilterCriteria::new().with_component("auth")));
        assert!(!record.matches(&FilterCriteria::new().with_component("db")));
    }

    #[test]
    fn time_bounds_are_inclusive() {
        let record = make_record("INFO", "auth", "2024-06-01 10:00:00");

        let exact = FilterCriteria::new()
            .with_start(ts("2024-06-01 10:00:00"))
            .with_end(ts("2024-06-01 10:00:00"));
        assert!(record.matches(&exact));

        let before = FilterCriteria::new().with_start(ts("2024-06-01 10:00:01"));
        assert!(!record.matches(&before));

        let after = FilterCriteria::new().with_end(ts("2024-06-01 09:59:59"));
        assert!(!record.matches(&after));
    }

    #[test]
    fn criteria_compose_conjunctively() {
        let record = make_record("ERROR", "auth", "2024-06-01 10:00:00");

        let both = FilterCriteria::new().with_level("ERROR").with_component("auth");
        assert!(record.matches(&both));

        let one_off = FilterCriteria::new().with_level("ERROR").with_component("db");
        assert!(!record.matches(&one_off));
    }

    #[test]
    fn record_serialization_roundtrip() {
        let record = make_record("WARN", "db", "2024-06-01 10:00:00");
        let json = serde_json::to_string(&record).expect("serialize");
        let parsed: LogRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, parsed);
    }

    #[test]
    fn stats_use_external_field_names() {
        let stats = LogStats {
            total_count: 2,
            by_level: HashMap::from([("ERROR".to_string(), 2)]),
            by_component: HashMap::from([("auth".to_string(), 2)]),
        };
        let json = serde_json::to_string(&stats).expect("serialize");
        assert!(json.contains("\"totalCount\":2"));
        assert!(json.contains("\"byLevel\""));
        assert!(json.contains("\"byComponent\""));
    }

    #[test]
    fn criteria_serialization_roundtrip() {
        let criteria = FilterCriteria::new()
            .with_level("INFO")
            .with_start(ts("2024-06-01 00:00:00"));
        let json = serde_json::to_string(&criteria).expect("serialize");
        let parsed: FilterCriteria = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(criteria, parsed);
    }
}
