//! # loglens-core
//!
//! Log file parsing, caching, and querying for the loglens API.
//!
//! This crate provides:
//!
//! - [`LogRecord`] — One structured entry parsed from a raw log line
//! - [`FilterCriteria`] — Optional filter constraints over a log set
//! - [`LogStats`] — Aggregate counts per level and component
//! - [`LogStore`] — Directory-backed store with a process-wide cache
//! - [`query`] — Pure filter/paginate/lookup/aggregate operations
//!
//! Log files are plain text, one candidate entry per line in the shape
//! `timestamp\tlevel\tcomponent\tmessage` (tab-separated, timestamp format
//! `YYYY-MM-DD HH:MM:SS`). Lines stored with literal `\t` escape sequences
//! are accepted as equivalent to real tabs. Malformed lines are dropped,
//! never surfaced as errors.
//!
//! ## Example
//!
//! ```rust
//! use loglens_core::{parse_line, FilterCriteria, query};
//!
//! let record = parse_line("2024-06-01 12:00:00\tERROR\tauth\tlogin failed")
//!     .expect("well-formed line");
//! assert_eq!(record.level, "ERROR");
//! assert_eq!(record.id.len(), 40);
//!
//! let criteria = FilterCriteria::new().with_level("ERROR");
//! let errors = query::filter(std::slice::from_ref(&record), &criteria);
//! assert_eq!(errors.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod ident;
pub mod parser;
pub mod query;
pub mod store;
pub mod types;

// Re-export main types
pub use error::{LogError, Result};
pub use ident::record_id;
pub use parser::parse_line;
pub use store::{LogStore, load_dir};
pub use types::{FilterCriteria, LogRecord, LogStats, TIMESTAMP_FORMAT};
