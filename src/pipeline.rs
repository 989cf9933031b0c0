use crate::config::{Config, DateRange, EventDefaults};
use crate::error::ScrapeResult;
use crate::ical::{BlockExtractor, Event};
use tracing::{debug, info};

/// Extract, build and filter events in one pass
#[derive(Debug, Clone)]
pub struct Pipeline {
    range: DateRange,
    defaults: EventDefaults,
}

impl Pipeline {
    /// Create a pipeline for the given range with default event fields
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            defaults: EventDefaults::default(),
        }
    }

    /// Create a pipeline from a resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            range: config.range.clone(),
            defaults: config.defaults.clone(),
        }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Titled events inside the range, in extraction order
    pub fn run(&self, input: &str) -> Vec<Event> {
        let mut events = Vec::new();
        let mut scanned = 0usize;

        for block in BlockExtractor::new(input) {
            scanned += 1;
            let event = Event::from_block(&block, &self.defaults);

            if !event.has_title() {
                debug!("Skipping block without SUMMARY (uid {:?})", event.id);
                continue;
            }

            let outcome = self.range.check(&event.start, &event.end);
            if outcome.includes() {
                events.push(event);
            } else {
                debug!("Skipping {:?}, outside range", event.title);
            }
        }

        info!("Kept {} of {} VEVENT blocks", events.len(), scanned);
        events
    }
}

/// Serialize events as a JSON array
pub fn render_json(events: &[Event], pretty: bool) -> ScrapeResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(events)?
    } else {
        serde_json::to_string(events)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDUP: &str = "'BEGIN:VEVENT\\nUID:1\\nSUMMARY:Standup\\nDTSTART:20240610T090000Z\\nDTEND:20240610T093000Z\\nEND:VEVENT'";

    #[test]
    fn test_end_to_end_json() {
        let pipeline = Pipeline::new(DateRange::new("2024-06-01", "2024-06-30"));
        let events = pipeline.run(STANDUP);
        assert_eq!(
            render_json(&events, false).unwrap(),
            r##"[{"id":"1","title":"Standup","description":"","location":"","start":"20240610T090000Z","end":"20240610T093000Z","allDay":false,"calendar":"Personal","color":"#1976d2"}]"##
        );
    }

    #[test]
    fn test_empty_input_renders_empty_array() {
        let pipeline = Pipeline::new(DateRange::new("2024-06-01", "2024-06-30"));
        let events = pipeline.run("");
        assert_eq!(render_json(&events, false).unwrap(), "[]");
    }

    #[test]
    fn test_untitled_block_dropped() {
        let pipeline = Pipeline::new(DateRange::default());
        assert!(pipeline
            .run("'BEGIN:VEVENT\\nUID:1\\nEND:VEVENT'")
            .is_empty());
    }

    #[test]
    fn test_from_config_applies_defaults() {
        let config = Config {
            defaults: EventDefaults {
                calendar: "Work".to_string(),
                color: "#000000".to_string(),
            },
            ..Default::default()
        };
        let events = Pipeline::from_config(&config).run(STANDUP);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].calendar, "Work");
        assert_eq!(events[0].color, "#000000");
    }
}
