//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and the storage format of
//! instants.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::DatabaseError;

/// Format an instant the way every timestamp column stores it.
///
/// Fixed-width (`2025-10-10T08:30:00.000000Z`), so comparing the text compares
/// the instants. Sub-microsecond digits are dropped.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time at storage precision.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Only the storage layout written by [`format_datetime`] is accepted. Any
/// other spelling of an instant would compare wrongly as text in SQL filters.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not in storage layout.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    let dt = DateTime::parse_from_rfc3339(s)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))?
        .with_timezone(&Utc);
    if format_datetime(&dt) != s {
        return Err(DatabaseError::Query(format!(
            "Datetime '{s}' is not in storage layout (expected e.g. '{}')",
            format_datetime(&dt)
        )));
    }
    Ok(dt)
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all warden-core enums; the stored text must equal the serde name.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}
