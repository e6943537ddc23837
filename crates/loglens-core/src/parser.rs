//! Parsing of raw log lines into structured records.

use chrono::NaiveDateTime;

use crate::ident::record_id;
use crate::types::{LogRecord, TIMESTAMP_FORMAT};

/// Parses one raw log line into a [`LogRecord`].
///
/// The expected shape is `timestamp\tlevel\tcomponent\tmessage` with the
/// timestamp in `YYYY-MM-DD HH:MM:SS` form. Literal `\t` two-character
/// escape sequences are normalized to real tabs before splitting, so logs
/// stored with escaped tabs parse identically.
///
/// Returns `None` for any malformed line (wrong field count, unparseable
/// timestamp). Malformed lines are dropped by callers, never reported as
/// errors. Pure function of its input.
#[must_use]
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let normalized = line.replace("\\t", "\t");
    let parts: Vec<&str> = normalized.split('\t').collect();

    let [timestamp_str, level, component, message] = parts.as_slice() else {
        return None;
    };

    let timestamp = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT).ok()?;

    // The id covers the whole normalized line, not the individual fields.
    let id = record_id(&normalized);

    Some(LogRecord {
        id,
        timestamp,
        level: (*level).to_string(),
        component: (*component).to_string(),
        message: (*message).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parses_well_formed_line() {
        let record = parse_line("2024-06-01 12:30:45\tERROR\tauth\tlogin failed for user")
            .expect("should parse");

        assert_eq!(record.level, "ERROR");
        assert_eq!(record.component, "auth");
        assert_eq!(record.message, "login failed for user");
        assert_eq!(
            record.timestamp,
            NaiveDateTime::parse_from_str("2024-06-01 12:30:45", TIMESTAMP_FORMAT)
                .expect("valid timestamp")
        );
    }

    #[test]
    fn accepts_escaped_tabs() {
        let escaped = parse_line(r"2024-06-01 12:30:45\tERROR\tauth\tlogin failed")
            .expect("escaped form should parse");
        let real = parse_line("2024-06-01 12:30:45\tERROR\tauth\tlogin failed")
            .expect("real-tab form should parse");

        // Both forms normalize to the same line, so fields and id agree.
        assert_eq!(escaped, real);
    }

    #[test_case("" ; "empty line")]
    #[test_case("2024-06-01 12:30:45\tERROR\tauth" ; "three fields")]
    #[test_case("2024-06-01 12:30:45\tERROR\tauth\tmsg\textra" ; "five fields")]
    #[test_case("just some text without tabs" ; "one field")]
    fn rejects_wrong_field_count(line: &str) {
        assert!(parse_line(line).is_none());
    }

    #[test_case("not-a-date\tERROR\tauth\tmsg" ; "garbage timestamp")]
    #[test_case("2024-13-01 12:30:45\tERROR\tauth\tmsg" ; "month out of range")]
    #[test_case("2024-06-01\tERROR\tauth\tmsg" ; "date without time")]
    #[test_case("2024-06-01T12:30:45\tERROR\tauth\tmsg" ; "iso t separator")]
    fn rejects_bad_timestamp(line: &str) {
        assert!(parse_line(line).is_none());
    }

    #[test]
    fn id_is_stable_for_identical_lines() {
        let line = "2024-06-01 12:30:45\tINFO\tdb\tconnection established";
        let first = parse_line(line).expect("should parse");
        let second = parse_line(line).expect("should parse");
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn id_covers_the_whole_line() {
        let a = parse_line("2024-06-01 12:30:45\tINFO\tdb\tquery ran").expect("should parse");
        let b = parse_line("2024-06-01 12:30:45\tINFO\tdb\tquery failed").expect("should parse");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_message_field_is_allowed() {
        let record = parse_line("2024-06-01 12:30:45\tINFO\tdb\t").expect("should parse");
        assert_eq!(record.message, "");
    }

    #[test]
    fn level_and_component_are_opaque_tokens() {
        // No validation beyond the field count; unusual tokens pass through.
        let record = parse_line("2024-06-01 12:30:45\tWHATEVER\tsub.sys-2\tok")
            .expect("should parse");
        assert_eq!(record.level, "WHATEVER");
        assert_eq!(record.component, "sub.sys-2");
    }
}
