use crate::error::{date_format_error, range_format_error, ScrapeResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Date-only `YYYYMMDD`
pub const ICAL_DATE_FORMAT: &str = "%Y%m%d";
/// UTC timestamp `YYYYMMDDTHHMMSSZ`
pub const ICAL_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";
/// Floating timestamp `YYYYMMDDTHHMMSS`
pub const ICAL_LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
/// Range bound `YYYY-MM-DD`
pub const RANGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an iCalendar date or date-time token.
///
/// Tried in order: date-only, UTC timestamp, floating timestamp. Date-only
/// values become midnight. Both timestamp forms are compared as the same
/// absolute clock, the `Z` suffix is not converted.
pub fn parse_ical_date(token: &str) -> ScrapeResult<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(token, ICAL_DATE_FORMAT) {
        return date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| date_format_error(token));
    }

    [ICAL_UTC_FORMAT, ICAL_LOCAL_FORMAT]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(token, format).ok())
        .ok_or_else(|| date_format_error(token))
}

/// Parse a `YYYY-MM-DD` range bound
pub fn parse_range_date(value: &str) -> ScrapeResult<NaiveDate> {
    NaiveDate::parse_from_str(value, RANGE_DATE_FORMAT).map_err(|_| range_format_error(value))
}

/// Format a date-time as a UTC iCalendar stamp
pub fn format_utc_stamp(instant: &NaiveDateTime) -> String {
    instant.format(ICAL_UTC_FORMAT).to_string()
}

/// Format a date as an iCalendar date-only value
pub fn format_ical_date(date: &NaiveDate) -> String {
    date.format(ICAL_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn test_parse_ical_date() {
        // Valid cases
        assert_eq!(parse_ical_date("20240615").unwrap(), at(2024, 6, 15, 0, 0, 0));
        assert_eq!(
            parse_ical_date("20240615T100000Z").unwrap(),
            at(2024, 6, 15, 10, 0, 0)
        );
        assert_eq!(
            parse_ical_date("20240615T235959").unwrap(),
            at(2024, 6, 15, 23, 59, 59)
        );

        // Invalid cases
        assert!(parse_ical_date("").is_err());
        assert!(parse_ical_date("2024-06-15").is_err());
        assert!(parse_ical_date("20241315").is_err()); // Month out of range
        assert!(parse_ical_date("20240615T1000Z").is_err()); // Missing seconds
        assert!(parse_ical_date("20240615T100000+0200").is_err());
        assert!(parse_ical_date("tomorrow").is_err());
    }

    #[test]
    fn test_parse_ical_date_error_kind() {
        match parse_ical_date("garbage") {
            Err(Error::DateFormat(token)) => assert_eq!(token, "garbage"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_range_date() {
        assert_eq!(
            parse_range_date("2024-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert!(matches!(
            parse_range_date("not-a-date"),
            Err(Error::RangeFormat(_))
        ));
        assert!(parse_range_date("").is_err());
        assert!(parse_range_date("20240615").is_err());
    }

    #[test]
    fn test_format_helpers() {
        let instant = at(2024, 6, 10, 9, 30, 5);
        assert_eq!(format_utc_stamp(&instant), "20240610T093005Z");
        assert_eq!(format_ical_date(&instant.date()), "20240610");
    }
}
