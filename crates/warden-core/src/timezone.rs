//! Calendar-date to UTC boundary conversion.
//!
//! Clients filter by local calendar dates ("tasks created on 2025-11-01") while
//! tasks store UTC instants. These functions resolve a `YYYY-MM-DD` date in an
//! IANA timezone to the UTC instants where that local day starts and ends.
//!
//! All functions are pure. A missing timezone means UTC. The timezone is
//! validated before the date, so input that is wrong in both ways reports
//! [`CoreError::InvalidTimezone`].
//!
//! # Examples
//!
//! ```
//! use warden_core::timezone::{end_of_day_utc, start_of_day_utc};
//!
//! let start = start_of_day_utc("2025-11-01", Some("Asia/Ho_Chi_Minh")).unwrap();
//! assert_eq!(start.to_rfc3339(), "2025-10-31T17:00:00+00:00");
//!
//! let end = end_of_day_utc("2025-11-01", Some("Asia/Ho_Chi_Minh")).unwrap();
//! assert_eq!(end.format("%Y-%m-%dT%H:%M:%S").to_string(), "2025-11-01T16:59:59");
//! ```

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::CoreError;

/// Zone applied when the caller does not supply one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// The only accepted calendar date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest DST gap searched when local midnight does not exist. Covers whole
/// skipped days (Pacific/Apia, 2011-12-30).
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// The UTC instants bounding one local calendar day, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBoundary {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateBoundary {
    /// Whether `instant` falls inside the day.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Resolve an IANA zone name. `None` resolves to UTC.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimezone`] if `name` is not in the IANA database.
pub fn parse_timezone(name: Option<&str>) -> Result<Tz, CoreError> {
    let Some(name) = name else {
        return Ok(Tz::UTC);
    };
    name.parse::<Tz>().map_err(|_| CoreError::InvalidTimezone {
        timezone: name.to_string(),
    })
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] for any other layout (`2025/10/01`,
/// `2025-1-1`, trailing time components) or an impossible date (`2025-02-30`).
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, CoreError> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(CoreError::InvalidDate {
            date: s.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        });
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| CoreError::InvalidDate {
        date: s.to_string(),
        reason: e.to_string(),
    })
}

/// First instant of `date` in `timezone`, expressed in UTC.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimezone`] or [`CoreError::InvalidDate`].
pub fn start_of_day_utc(date: &str, timezone: Option<&str>) -> Result<DateTime<Utc>, CoreError> {
    let tz = parse_timezone(timezone)?;
    let day = parse_calendar_date(date)?;
    local_day_start(tz, day)
}

/// Last instant of `date` in `timezone`, expressed in UTC.
///
/// This is one microsecond before the next local day starts, so on ordinary
/// days it is `23:59:59.999999` local time.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimezone`] or [`CoreError::InvalidDate`].
pub fn end_of_day_utc(date: &str, timezone: Option<&str>) -> Result<DateTime<Utc>, CoreError> {
    let tz = parse_timezone(timezone)?;
    let day = parse_calendar_date(date)?;
    local_day_end(tz, day)
}

/// Both boundaries of `date` in `timezone`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimezone`] or [`CoreError::InvalidDate`].
pub fn day_boundary(date: &str, timezone: Option<&str>) -> Result<DateBoundary, CoreError> {
    let tz = parse_timezone(timezone)?;
    let day = parse_calendar_date(date)?;
    Ok(DateBoundary {
        start: local_day_start(tz, day)?,
        end: local_day_end(tz, day)?,
    })
}

fn local_day_start(tz: Tz, day: NaiveDate) -> Result<DateTime<Utc>, CoreError> {
    resolve_local(tz, day.and_time(NaiveTime::MIN)).ok_or_else(|| CoreError::InvalidDate {
        date: day.to_string(),
        reason: format!("day has no valid local time in {tz}"),
    })
}

fn local_day_end(tz: Tz, day: NaiveDate) -> Result<DateTime<Utc>, CoreError> {
    let next = day.succ_opt().ok_or_else(|| CoreError::InvalidDate {
        date: day.to_string(),
        reason: "date is out of range".to_string(),
    })?;
    Ok(local_day_start(tz, next)? - TimeDelta::microseconds(1))
}

/// Map a wall-clock time to UTC.
///
/// Ambiguous times (DST fall-back) take the earlier instant. Times inside a
/// DST gap move forward to the first wall-clock minute that exists.
fn resolve_local(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => (1..=MAX_GAP_MINUTES).find_map(|minutes| {
            tz.from_local_datetime(&(naive + TimeDelta::minutes(minutes)))
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[rstest]
    #[case("2025-11-01")]
    #[case("2024-02-29")]
    #[case("1999-12-31")]
    fn utc_start_is_plain_midnight(#[case] date: &str) {
        let expected = parse_calendar_date(date).unwrap().and_time(NaiveTime::MIN).and_utc();
        assert_eq!(start_of_day_utc(date, Some("UTC")).unwrap(), expected);
        assert_eq!(start_of_day_utc(date, None).unwrap(), expected);
    }

    #[rstest]
    #[case("2025-11-01")]
    #[case("2025-12-31")]
    fn utc_day_spans_one_day_minus_one_microsecond(#[case] date: &str) {
        let start = start_of_day_utc(date, Some("UTC")).unwrap();
        let end = end_of_day_utc(date, Some("UTC")).unwrap();
        assert_eq!(end - start, TimeDelta::days(1) - TimeDelta::microseconds(1));
    }

    #[test]
    fn ho_chi_minh_shifts_back_seven_hours() {
        let start = start_of_day_utc("2025-11-01", Some("Asia/Ho_Chi_Minh")).unwrap();
        let end = end_of_day_utc("2025-11-01", Some("Asia/Ho_Chi_Minh")).unwrap();
        assert_eq!(start, utc("2025-10-31T17:00:00Z"));
        assert_eq!(end, utc("2025-11-01T16:59:59.999999Z"));
        assert_eq!(
            end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2025-11-01T16:59:59"
        );
    }

    #[test]
    fn negative_offsets_shift_forward() {
        let boundary = day_boundary("2025-01-15", Some("America/New_York")).unwrap();
        assert_eq!(boundary.start, utc("2025-01-15T05:00:00Z"));
        assert_eq!(boundary.end, utc("2025-01-16T04:59:59.999999Z"));
    }

    #[test]
    fn spring_forward_day_is_23_hours() {
        let boundary = day_boundary("2025-03-09", Some("America/New_York")).unwrap();
        assert_eq!(boundary.start, utc("2025-03-09T05:00:00Z"));
        assert_eq!(boundary.end, utc("2025-03-10T03:59:59.999999Z"));
    }

    #[test]
    fn fall_back_day_is_25_hours() {
        let boundary = day_boundary("2025-11-02", Some("America/New_York")).unwrap();
        assert_eq!(boundary.start, utc("2025-11-02T04:00:00Z"));
        assert_eq!(boundary.end, utc("2025-11-03T04:59:59.999999Z"));
    }

    #[test]
    fn missing_midnight_moves_to_first_valid_instant() {
        // Brazil started DST at local midnight on 2018-11-04 (00:00 -> 01:00).
        let start = start_of_day_utc("2018-11-04", Some("America/Sao_Paulo")).unwrap();
        assert_eq!(start, utc("2018-11-04T03:00:00Z"));
        let previous_end = end_of_day_utc("2018-11-03", Some("America/Sao_Paulo")).unwrap();
        assert_eq!(previous_end, utc("2018-11-04T02:59:59.999999Z"));
    }

    #[test]
    fn boundary_contains_is_inclusive() {
        let boundary = day_boundary("2025-11-01", None).unwrap();
        assert!(boundary.contains(boundary.start));
        assert!(boundary.contains(boundary.end));
        assert!(!boundary.contains(boundary.end + TimeDelta::microseconds(1)));
        assert!(!boundary.contains(boundary.start - TimeDelta::microseconds(1)));
    }

    #[rstest]
    #[case("Invalid/Zone")]
    #[case("")]
    #[case("utc+7")]
    fn unknown_timezone_is_rejected(#[case] zone: &str) {
        let err = start_of_day_utc("2025-11-01", Some(zone)).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidTimezone { ref timezone } if timezone == zone),
            "unexpected error: {err}"
        );
        assert!(matches!(
            end_of_day_utc("2025-11-01", Some(zone)),
            Err(CoreError::InvalidTimezone { .. })
        ));
    }

    #[rstest]
    #[case("2025/10/01")]
    #[case("2025-1-1")]
    #[case("2025-02-30")]
    #[case("2025-10-01T00:00:00")]
    #[case("01-10-2025")]
    #[case("")]
    #[case("yesterday")]
    fn malformed_date_is_rejected(#[case] date: &str) {
        let err = start_of_day_utc(date, None).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidDate { date: ref d, .. } if d == date),
            "unexpected error: {err}"
        );
        assert!(matches!(
            end_of_day_utc(date, Some("Europe/Berlin")),
            Err(CoreError::InvalidDate { .. })
        ));
    }

    #[test]
    fn timezone_is_validated_before_date() {
        let err = day_boundary("2025/10/01", Some("Invalid/Zone")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTimezone { .. }));
    }
}
