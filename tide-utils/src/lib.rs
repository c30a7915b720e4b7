//! Shared utility functions for the tide crates.

/// Calendar and timestamp utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

    /// Canonical timestamp format used for observation files and CSV output.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Timestamp layouts accepted by [`parse_timestamp`], tried in order.
    const ACCEPTED_FORMATS: [&str; 5] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
    ];

    /// Gregorian leap year rule.
    pub fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Number of days in a calendar year (365 or 366).
    pub fn days_in_year(year: i32) -> u32 {
        if is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// Number of hours in a calendar year (8760 or 8784).
    pub fn hours_in_year(year: i32) -> u32 {
        days_in_year(year) * 24
    }

    /// Midnight on January 1st of `year`.
    ///
    /// Returns `None` only for years outside chrono's representable range.
    pub fn start_of_year(year: i32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// Hours (fractional) elapsed from `from` to `to`. Negative when `to` precedes `from`.
    pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
        let delta: TimeDelta = to - from;
        delta.num_milliseconds() as f64 / 3_600_000.0
    }

    /// Format a timestamp as "YYYY-MM-DD HH:MM:SS"
    pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
        timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse a timestamp in any of the accepted layouts, or RFC 3339.
    ///
    /// RFC 3339 values keep their wall-clock time; the offset is dropped
    /// since every timestamp is read in the same local reference frame.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        for format in ACCEPTED_FORMATS {
            if let Ok(timestamp) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(timestamp);
            }
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
            return Ok(timestamp.naive_local());
        }
        Err(DateError(format!("unrecognized timestamp {s:?}")).into())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_is_leap_year() {
            assert!(is_leap_year(2020));
            assert!(is_leap_year(2000));
            assert!(!is_leap_year(1900));
            assert!(!is_leap_year(2023));
            assert!(!is_leap_year(2100));
        }

        #[test]
        fn test_days_and_hours_in_year() {
            assert_eq!(days_in_year(2024), 366);
            assert_eq!(days_in_year(2023), 365);
            assert_eq!(hours_in_year(2024), 8784);
            assert_eq!(hours_in_year(2023), 8760);
        }

        #[test]
        fn test_hours_between() {
            let start = start_of_year(2020).unwrap();
            let later = NaiveDate::from_ymd_opt(2020, 1, 2)
                .unwrap()
                .and_hms_opt(6, 30, 0)
                .unwrap();
            assert_eq!(hours_between(start, later), 30.5);
            assert_eq!(hours_between(later, start), -30.5);
        }

        #[test]
        fn test_parse_timestamp_layouts() {
            let expected = NaiveDate::from_ymd_opt(2013, 5, 4)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap();
            assert_eq!(parse_timestamp("2013-05-04 13:00:00").unwrap(), expected);
            assert_eq!(parse_timestamp("2013-05-04T13:00:00").unwrap(), expected);
            assert_eq!(parse_timestamp("2013/05/04 13:00:00").unwrap(), expected);
            assert_eq!(parse_timestamp("2013-05-04 13:00").unwrap(), expected);
            assert_eq!(parse_timestamp(" 2013-05-04 13:00:00 ").unwrap(), expected);
            assert_eq!(parse_timestamp("2013-05-04T13:00:00+08:00").unwrap(), expected);
        }

        #[test]
        fn test_parse_timestamp_rejects_garbage() {
            assert!(parse_timestamp("not a date").is_err());
            assert!(parse_timestamp("2013-13-40 00:00:00").is_err());
            assert!(parse_timestamp("").is_err());
        }

        #[test]
        fn test_format_and_parse() {
            let timestamp = NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(7, 5, 9)
                .unwrap();
            let formatted = format_timestamp(&timestamp);
            assert_eq!(formatted, "2023-06-15 07:05:09");
            let parsed = parse_timestamp(&formatted).unwrap();
            assert_eq!(parsed, timestamp);
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
