use crate::utils::time::{format_ical_date, format_utc_stamp};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Line separator expected by the bus, already escaped
pub const ESCAPED_CRLF: &str = "\\r\\n";

/// Event to be written back as a VEVENT payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub dtstamp: Option<String>,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Render a draft as a bus-escaped VEVENT block.
///
/// All-day events span the UTC date of `start` to the following day. Timed
/// events without an end last one hour.
pub fn compose_vevent(draft: &EventDraft, now: DateTime<Utc>) -> String {
    let uid = if draft.uid.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        draft.uid.clone()
    };
    let dtstamp = draft
        .dtstamp
        .clone()
        .unwrap_or_else(|| format_utc_stamp(&now.naive_utc()));

    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", uid),
        format!("DTSTAMP:{}", dtstamp),
    ];

    if draft.all_day {
        let day = draft.start.date_naive();
        let next = day + Duration::days(1);
        lines.push(format!("DTSTART;VALUE=DATE:{}", format_ical_date(&day)));
        lines.push(format!("DTEND;VALUE=DATE:{}", format_ical_date(&next)));
    } else {
        let end = draft.end.unwrap_or(draft.start + Duration::hours(1));
        lines.push(format!("DTSTART:{}", format_utc_stamp(&draft.start.naive_utc())));
        lines.push(format!("DTEND:{}", format_utc_stamp(&end.naive_utc())));
    }

    lines.push(format!("SUMMARY:{}", draft.summary));
    if let Some(description) = draft.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("DESCRIPTION:{}", description.replace('\n', "\\n")));
    }
    if let Some(location) = draft.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("LOCATION:{}", location));
    }
    lines.push("END:VEVENT".to_string());

    lines.join(ESCAPED_CRLF)
}
