use crate::config::EventDefaults;
use serde::{Deserialize, Serialize};

/// Marker on a DTSTART line that declares a date-only value
pub const DATE_VALUE_MARKER: &str = ";VALUE=DATE:";

/// Normalized calendar event, serialized in this field order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Raw DTSTART token
    pub start: String,
    /// Raw DTEND token
    pub end: String,
    pub all_day: bool,
    pub calendar: String,
    pub color: String,
}

impl Event {
    /// Create an empty event carrying the given defaults
    pub fn with_defaults(defaults: &EventDefaults) -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            location: String::new(),
            start: String::new(),
            end: String::new(),
            all_day: false,
            calendar: defaults.calendar.clone(),
            color: defaults.color.clone(),
        }
    }

    /// Only titled events are reported
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Parse the property lines of one unescaped VEVENT block.
    ///
    /// Lines without a `:` are skipped. Keys compare case-insensitively,
    /// values are kept verbatim. Later properties overwrite earlier ones.
    pub fn from_block(block: &str, defaults: &EventDefaults) -> Self {
        let mut event = Self::with_defaults(defaults);

        for line in block.split('\n') {
            let line = line.trim();
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            event.apply_property(line, &key.to_uppercase(), value);
        }

        event
    }

    fn apply_property(&mut self, line: &str, key: &str, value: &str) {
        match key {
            "UID" => self.id = value.to_string(),
            "SUMMARY" => self.title = value.to_string(),
            "DESCRIPTION" => self.description = value.to_string(),
            "LOCATION" => self.location = value.to_string(),
            _ if key.starts_with("DTSTART") => {
                self.start = value.to_string();
                self.all_day = line.contains(DATE_VALUE_MARKER);
            }
            _ if key.starts_with("DTEND") => self.end = value.to_string(),
            _ => {}
        }
    }
}
