//! ISO 8601 date-time validation and duration arithmetic.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::error::TogglError;

/// Naive (offset-less) layouts accepted in addition to RFC 3339. Read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO 8601 date-time into an instant.
///
/// The value must contain a literal `T` separator: a bare date such as
/// `2024-04-08` is rejected even though it names a calendar day.
pub fn parse_iso_datetime(value: &str) -> Option<DateTime<Utc>> {
    if !value.contains('T') {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Check whether a string is an acceptable ISO 8601 date-time.
pub fn is_valid_iso_datetime(value: &str) -> bool {
    parse_iso_datetime(value).is_some()
}

/// Validate the named field, returning the parsed instant.
pub fn require_iso_datetime(field: &str, value: &str) -> Result<DateTime<Utc>, TogglError> {
    parse_iso_datetime(value).ok_or_else(|| {
        TogglError::validation(format!(
            "{} is not a valid ISO 8601 date-time (e.g. 2024-04-08T09:00:00Z): {}",
            field, value
        ))
    })
}

/// Validate an optional field, passing `None` through.
pub fn validate_optional_iso(field: &str, value: Option<&str>) -> Result<(), TogglError> {
    match value {
        Some(v) => require_iso_datetime(field, v).map(|_| ()),
        None => Ok(()),
    }
}

/// Whole seconds between two instants, rounded toward negative infinity.
///
/// A stop before the start yields a negative value; callers pass it through.
pub fn elapsed_seconds(start: DateTime<Utc>, stop: DateTime<Utc>) -> i64 {
    (stop - start).num_milliseconds().div_euclid(1000)
}

/// Pick the duration of a new entry: explicit value, else stop - start, else zero.
pub fn derive_duration(
    explicit: Option<i64>,
    start: DateTime<Utc>,
    stop: Option<DateTime<Utc>>,
) -> i64 {
    match (explicit, stop) {
        (Some(duration), _) => duration,
        (None, Some(stop)) => elapsed_seconds(start, stop),
        (None, None) => 0,
    }
}

/// Convert seconds to hours rounded to two decimals.
pub fn seconds_to_hours(seconds: i64) -> f64 {
    (seconds as f64 / 3600.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> DateTime<Utc> {
        parse_iso_datetime(value).unwrap()
    }

    #[test]
    fn test_accepts_full_datetimes() {
        assert!(is_valid_iso_datetime("2024-04-08T00:00:00Z"));
        assert!(is_valid_iso_datetime("2024-04-14T23:59:59.123+09:00"));
        assert!(is_valid_iso_datetime("2024-04-08T09:30:00"));
        assert!(is_valid_iso_datetime("2024-04-08T09:30"));
    }

    #[test]
    fn test_rejects_bare_dates_and_garbage() {
        assert!(!is_valid_iso_datetime("2024-04-08"));
        assert!(!is_valid_iso_datetime("yesterday"));
        assert!(!is_valid_iso_datetime("2024-13-40T00:00:00Z"));
        assert!(!is_valid_iso_datetime("T"));
        assert!(!is_valid_iso_datetime(""));
    }

    #[test]
    fn test_require_names_field() {
        let err = require_iso_datetime("startDate", "2024-04-08").unwrap_err();
        assert!(matches!(err, TogglError::Validation(_)));
        assert!(err.to_string().contains("startDate"));
    }

    #[test]
    fn test_offsets_normalize_to_utc() {
        assert_eq!(at("2024-01-01T18:00:00+09:00"), at("2024-01-01T09:00:00Z"));
    }

    #[test]
    fn test_elapsed_seconds_floors() {
        let start = at("2024-01-01T09:00:00Z");
        assert_eq!(elapsed_seconds(start, at("2024-01-01T10:00:00Z")), 3600);
        assert_eq!(elapsed_seconds(start, at("2024-01-01T09:00:01.999Z")), 1);
        assert_eq!(elapsed_seconds(start, at("2024-01-01T08:59:58.500Z")), -2);
    }

    #[test]
    fn test_derive_duration_precedence() {
        let start = at("2024-01-01T09:00:00Z");
        let stop = Some(at("2024-01-01T09:30:00Z"));
        assert_eq!(derive_duration(Some(42), start, stop), 42);
        assert_eq!(derive_duration(None, start, stop), 1800);
        assert_eq!(derive_duration(None, start, None), 0);
    }

    #[test]
    fn test_seconds_to_hours() {
        assert_eq!(seconds_to_hours(3600), 1.0);
        assert_eq!(seconds_to_hours(5400), 1.5);
        assert_eq!(seconds_to_hours(1000), 0.28);
        assert_eq!(seconds_to_hours(-3600), -1.0);
    }
}
