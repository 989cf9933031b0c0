use calscrape::config::DateRange;
use calscrape::ical::{compose_vevent, EventDraft};
use calscrape::pipeline::Pipeline;
use chrono::{TimeZone, Utc};

fn draft_from_json(json: &str) -> EventDraft {
    serde_json::from_str(json).unwrap()
}

/// Test that a composed timed event reads back through the pipeline
#[test]
fn test_composed_timed_event_reads_back() {
    let draft = draft_from_json(
        r#"{"uid":"abc","start":"2024-06-15T10:00:00Z","end":"2024-06-15T11:30:00Z",
            "summary":"Planning","location":"Room 2"}"#,
    );
    let block = compose_vevent(&draft, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    let dump = format!("(['{}'],)", block);

    let events = Pipeline::new(DateRange::new("2024-06-15", "2024-06-15")).run(&dump);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "abc");
    assert_eq!(events[0].title, "Planning");
    assert_eq!(events[0].location, "Room 2");
    assert_eq!(events[0].start, "20240615T100000Z");
    assert_eq!(events[0].end, "20240615T113000Z");
    assert!(!events[0].all_day);
}

/// Test that a composed all-day event keeps its flag and day
#[test]
fn test_composed_all_day_event_reads_back() {
    let draft = draft_from_json(
        r#"{"uid":"day","start":"2024-06-15T00:00:00Z","allDay":true,"summary":"Holiday"}"#,
    );
    let block = compose_vevent(&draft, Utc::now());
    let dump = format!("'{}'", block);

    let pipeline = Pipeline::new(DateRange::new("2024-06-15", "2024-06-15"));
    let events = pipeline.run(&dump);
    assert_eq!(events.len(), 1);
    assert!(events[0].all_day);
    assert_eq!(events[0].start, "20240615");
    assert_eq!(events[0].end, "20240616");

    assert!(Pipeline::new(DateRange::new("2024-06-16", "2024-06-16"))
        .run(&dump)
        .is_empty());
}
