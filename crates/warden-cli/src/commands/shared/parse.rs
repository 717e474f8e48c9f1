use chrono::{DateTime, Utc};
use warden_core::enums::TaskStatus;
use warden_core::timezone::start_of_day_utc;

/// Parse a status for storage. Any case and `_`/`-` separators are accepted.
pub fn parse_status(raw: &str) -> anyhow::Result<TaskStatus> {
    raw.parse::<TaskStatus>()
        .map_err(|error| anyhow::anyhow!("invalid status '{raw}': {error}"))
}

/// Parse an RFC 3339 instant, or a `YYYY-MM-DD` date as local midnight in
/// `timezone`.
pub fn parse_instant(raw: &str, timezone: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    start_of_day_utc(raw, Some(timezone))
        .map_err(|error| anyhow::anyhow!("invalid instant '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use warden_core::enums::TaskStatus;

    use super::{parse_instant, parse_status};

    #[test]
    fn parses_status_in_any_case() {
        assert_eq!(parse_status("in-progress").expect("status"), TaskStatus::InProgress);
        assert_eq!(parse_status("COMPLETED").expect("status"), TaskStatus::Completed);
    }

    #[test]
    fn errors_on_invalid_status() {
        let err = parse_status("done").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn parses_rfc3339_instant() {
        let instant = parse_instant("2025-12-01T09:30:00+07:00", "UTC").expect("instant");
        assert_eq!(instant, chrono::Utc.with_ymd_and_hms(2025, 12, 1, 2, 30, 0).unwrap());
    }

    #[test]
    fn date_means_local_midnight() {
        let instant = parse_instant("2025-11-01", "Asia/Ho_Chi_Minh").expect("instant");
        assert_eq!(instant, chrono::Utc.with_ymd_and_hms(2025, 10, 31, 17, 0, 0).unwrap());
    }

    #[test]
    fn errors_on_garbage_instant() {
        assert!(parse_instant("next tuesday", "UTC").is_err());
    }
}
