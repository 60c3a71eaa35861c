//! Timestamp and snapshot date parsing.
//!
//! Subset start times must be ISO-8601 UTC with a literal `Z` zone
//! designator. Numeric offsets such as `+00:00` are rejected so that
//! instant comparison between subsets stays unambiguous.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{ValidationError, ValidationResult};

/// Wire format for subset start times.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Wire format for MaxMind DB snapshot dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a subset start time.
pub fn parse_timestamp(field: &str, raw: &str) -> ValidationResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| ValidationError::MalformedTimestamp {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Parse a `db_snapshots` calendar date.
pub fn parse_snapshot_date(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::MalformedDate {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::Timelike;

    #[test]
    fn test_parse_valid_timestamp() {
        let ts = parse_timestamp("start_time", "2014-07-01T00:00:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2014-07-01T00:00:00+00:00");

        let ts = parse_timestamp("start_time", "2015-04-02T10:27:34Z").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.second(), 34);
    }

    #[test]
    fn test_parse_rejects_offset_and_date_only() {
        for raw in [
            "2014-07-01T00:00:00+00:00",
            "2014-07-01",
            "2014-07-01T00:00:00",
            "2014-07-01 00:00:00Z",
            "",
        ] {
            let err = parse_timestamp("subsets[0].start_time", raw)
                .expect_err(&format!("{:?} should be rejected", raw));
            assert_eq!(err.kind(), ErrorKind::MalformedTimestamp);
            assert_eq!(err.field(), Some("subsets[0].start_time"));
        }
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(parse_timestamp("start_time", "2014-07-01T00:00:00Zabc").is_err());
    }

    #[test]
    fn test_parse_valid_snapshot_date() {
        let date = parse_snapshot_date("db_snapshots[0]", "2014-08-04").unwrap();
        assert_eq!(date.to_string(), "2014-08-04");
    }

    #[test]
    fn test_parse_rejects_invalid_snapshot_dates() {
        for raw in ["2014-08-04T00:00:00Z", "08-04-2014", "2014-13-01", "not a date"] {
            let err = parse_snapshot_date("db_snapshots[0]", raw)
                .expect_err(&format!("{:?} should be rejected", raw));
            assert_eq!(err.kind(), ErrorKind::MalformedDate);
        }
    }
}
