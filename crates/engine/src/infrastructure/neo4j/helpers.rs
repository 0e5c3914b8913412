//! Neo4j deserialization helpers for row conversion functions.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (microseconds, `Z`
//! suffix) so that ordering by the raw property is chronological.

use chrono::{DateTime, SecondsFormat, Utc};
use myfun_domain::common::{parse_datetime, StringExt};
use neo4rs::Row;

use crate::infrastructure::ports::RepoError;

/// Format a timestamp the way it is stored on nodes.
pub fn to_stored_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a stored timestamp, naming the column when it is unreadable.
pub fn parse_stored_timestamp(column: &str, raw: &str) -> Result<DateTime<Utc>, RepoError> {
    parse_datetime(raw).map_err(|e| {
        RepoError::serialization(format!("Invalid timestamp in '{column}' ({raw}): {e}"))
    })
}

/// Extension trait for Neo4j Row to simplify common deserialization patterns.
pub trait RowExt {
    /// Get an optional string column, returning None if null, blank or missing.
    fn get_optional_string(&self, column: &str) -> Option<String>;

    /// Get a string column with a default value if missing.
    fn get_string_or(&self, column: &str, default: &str) -> String;

    /// Get a timestamp column, `None` when missing or unparseable.
    fn get_optional_datetime(&self, column: &str) -> Option<DateTime<Utc>>;

    /// Get a required timestamp column. Missing or unparseable values are errors.
    fn get_datetime_strict(&self, column: &str) -> Result<DateTime<Utc>, RepoError>;

    /// Get a required string column with strict error handling (fail-fast).
    fn get_string_strict(&self, column: &str) -> Result<String, RepoError>;

    /// Get an i64 column with a default value if missing.
    fn get_i64_or(&self, column: &str, default: i64) -> i64;
}

impl RowExt for Row {
    fn get_optional_string(&self, column: &str) -> Option<String> {
        self.get::<String>(column).ok().into_option()
    }

    fn get_string_or(&self, column: &str, default: &str) -> String {
        self.get_optional_string(column)
            .unwrap_or_else(|| default.to_string())
    }

    fn get_optional_datetime(&self, column: &str) -> Option<DateTime<Utc>> {
        self.get::<String>(column)
            .ok()
            .and_then(|s| parse_datetime(&s).ok())
    }

    fn get_datetime_strict(&self, column: &str) -> Result<DateTime<Utc>, RepoError> {
        parse_stored_timestamp(column, &self.get_string_strict(column)?)
    }

    fn get_string_strict(&self, column: &str) -> Result<String, RepoError> {
        self.get(column).map_err(|e| {
            RepoError::database(
                "query",
                format!("Missing required column '{}': {}", column, e),
            )
        })
    }

    fn get_i64_or(&self, column: &str, default: i64) -> i64 {
        self.get(column).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stored_timestamps_have_fixed_width() {
        let whole = Utc
            .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
            .single()
            .expect("valid date");
        let fractional = whole + chrono::Duration::milliseconds(5);

        let a = to_stored_timestamp(whole);
        let b = to_stored_timestamp(fractional);
        assert_eq!(a, "2024-01-15T10:30:00.000000Z");
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn stored_timestamps_parse_back() {
        let at = Utc
            .with_ymd_and_hms(2023, 11, 14, 22, 13, 20)
            .single()
            .expect("valid date");
        assert_eq!(
            parse_stored_timestamp("created_at", &to_stored_timestamp(at)).expect("parseable"),
            at
        );
    }

    #[test]
    fn unreadable_timestamp_is_a_serialization_error() {
        let err = parse_stored_timestamp("created_at", "yesterday").expect_err("must fail");
        assert!(matches!(err, RepoError::Serialization(_)));
        assert!(err.to_string().contains("created_at"));
        assert!(err.to_string().contains("yesterday"));
    }
}
