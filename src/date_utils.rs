use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;
use thiserror::Error;

/// Shown in place of the updated line when the catalog date cannot be parsed.
pub const UNKNOWN_DATE_LABEL: &str = "Updated date unknown";

// `%#z` also takes `Z` and offsets with or without a colon.
const OFFSET_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
];

const NAIVE_DATE_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    #[error("Empty date string")]
    Empty,

    #[error("Unrecognized date: {0:?}")]
    Unrecognized(String),
}

/// Parses an ISO 8601 date or timestamp into its calendar date.
/// Timestamps carrying an offset are converted to UTC first.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, DateError> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(date_time.naive_utc().date());
    }

    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(date_time) = DateTime::parse_from_str(date_str, format) {
            return Ok(date_time.naive_utc().date());
        }
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(date_time.date());
        }
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| DateError::Unrecognized(date_str.to_string()))
}

/// "Updated May 1, 2023"
pub fn format_date(date: NaiveDate) -> String {
    format!("Updated {}", date.format("%B %-d, %Y"))
}

pub fn format_updated(date_str: &str) -> String {
    match parse_date(date_str) {
        Ok(date) => format_date(date),
        Err(err) => {
            warn!("Could not format updated date: {}", err);
            UNKNOWN_DATE_LABEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_updated("2023-05-01"), "Updated May 1, 2023");
    }

    #[test]
    fn test_format_utc_timestamp() {
        assert_eq!(
            format_updated("2022-11-03T07:00:00.000Z"),
            "Updated November 3, 2022"
        );
    }

    #[test]
    fn test_format_offset_timestamp_uses_utc_date() {
        assert_eq!(
            format_updated("2023-01-01T01:30:00+05:00"),
            "Updated December 31, 2022"
        );
    }

    #[test]
    fn test_format_naive_timestamp() {
        assert_eq!(
            format_updated("2021-02-28T23:59:59"),
            "Updated February 28, 2021"
        );
        assert_eq!(
            format_updated("2021-02-28T23:59:59.250"),
            "Updated February 28, 2021"
        );
    }

    #[test]
    fn test_format_minute_precision_timestamps() {
        assert_eq!(format_updated("2023-05-01T10:00Z"), "Updated May 1, 2023");
        assert_eq!(format_updated("2023-05-01T10:00"), "Updated May 1, 2023");
        assert_eq!(format_updated("2023-05-01T10:00+02:00"), "Updated May 1, 2023");
    }

    #[test]
    fn test_format_space_separated_timestamp() {
        assert_eq!(format_updated("2023-05-01 10:00:00"), "Updated May 1, 2023");
        assert_eq!(format_updated("2023-05-01 10:00:00.5"), "Updated May 1, 2023");
        assert_eq!(format_updated("2023-05-01 10:00:00Z"), "Updated May 1, 2023");
    }

    #[test]
    fn test_format_offset_without_colon() {
        assert_eq!(
            format_updated("2023-05-01T10:00:00.000+0200"),
            "Updated May 1, 2023"
        );
        assert_eq!(
            format_updated("2023-05-01T01:00:00+0200"),
            "Updated April 30, 2023"
        );
    }

    #[test]
    fn test_format_day_is_not_padded() {
        assert_eq!(format_updated("2020-09-09"), "Updated September 9, 2020");
    }

    #[test]
    fn test_format_surrounding_whitespace() {
        assert_eq!(format_updated("  2023-05-01\n"), "Updated May 1, 2023");
    }

    #[test]
    fn test_format_malformed_uses_placeholder() {
        assert_eq!(format_updated("yesterday"), UNKNOWN_DATE_LABEL);
        assert_eq!(format_updated("2023-02-30"), UNKNOWN_DATE_LABEL);
        assert_eq!(format_updated(""), UNKNOWN_DATE_LABEL);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_date("   "), Err(DateError::Empty));
        assert_eq!(
            parse_date("05/01/2023"),
            Err(DateError::Unrecognized("05/01/2023".to_string()))
        );
    }

    #[test]
    fn test_parse_date_value() {
        assert_eq!(
            parse_date("2023-05-01"),
            Ok(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap())
        );
    }
}
