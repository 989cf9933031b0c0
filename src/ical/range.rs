use crate::config::DateRange;
use crate::utils::time::{parse_ical_date, parse_range_date};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

/// Length of a bare `YYYYMMDD` token
const DATE_TOKEN_LEN: usize = 8;

/// Outcome of matching an event against a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMatch {
    Matched,
    NotMatched,
    /// A date could not be parsed, the event is kept
    Unknown,
}

impl RangeMatch {
    /// Fail open: only a definite miss excludes the event
    pub fn includes(self) -> bool {
        !matches!(self, RangeMatch::NotMatched)
    }

    fn from_bool(hit: bool) -> Self {
        if hit {
            RangeMatch::Matched
        } else {
            RangeMatch::NotMatched
        }
    }
}

impl DateRange {
    /// Match raw DTSTART/DTEND tokens against this range.
    ///
    /// All-day is decided by the start token being exactly `YYYYMMDD`, not by
    /// the event's `allDay` flag.
    pub fn check(&self, event_start: &str, event_end: &str) -> RangeMatch {
        let (range_start, range_end) =
            match (parse_range_date(&self.start), parse_range_date(&self.end)) {
                (Ok(start), Ok(end)) => (start, end),
                (Err(e), _) | (_, Err(e)) => {
                    warn!("Not filtering on range: {}", e);
                    return RangeMatch::Unknown;
                }
            };

        let start = match parse_ical_date(event_start) {
            Ok(start) => start,
            Err(e) => {
                warn!("Including event without a usable start: {}", e);
                return RangeMatch::Unknown;
            }
        };

        let hit = if event_start.len() == DATE_TOKEN_LEN {
            all_day_hit(start, range_start, range_end)
        } else {
            let end = if event_end.is_empty() {
                start
            } else {
                parse_ical_date(event_end).unwrap_or(start)
            };
            timed_hit(start, end, range_start, range_end)
        };

        RangeMatch::from_bool(hit)
    }
}

/// Day after `date` at midnight, the exclusive upper bound of an inclusive range
fn day_after(date: NaiveDate) -> NaiveDateTime {
    match date.checked_add_signed(Duration::days(1)) {
        Some(next) => midnight(next),
        None => NaiveDateTime::MAX,
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn all_day_hit(start: NaiveDateTime, range_start: NaiveDate, range_end: NaiveDate) -> bool {
    start >= midnight(range_start) && start < day_after(range_end)
}

fn timed_hit(
    start: NaiveDateTime,
    end: NaiveDateTime,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> bool {
    !(start >= day_after(range_end) || end < midnight(range_start))
}

/// Boolean form of [`DateRange::check`] over raw strings
pub fn overlaps(event_start: &str, event_end: &str, range_start: &str, range_end: &str) -> bool {
    DateRange::new(range_start, range_end)
        .check(event_start, event_end)
        .includes()
}
