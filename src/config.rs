use crate::error::{config_error, ScrapeResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Calendar name given to every extracted event
pub const DEFAULT_CALENDAR: &str = "Personal";

/// Color given to every extracted event
pub const DEFAULT_COLOR: &str = "#1976d2";

/// Config file read when `CALSCRAPE_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config/calscrape.toml";

/// Inclusive date range, kept as the raw `YYYY-MM-DD` strings the caller gave.
///
/// The strings are only parsed when matching, so an unparseable bound turns
/// into permissive inclusion instead of a startup failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Constant field values stamped onto each event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefaults {
    pub calendar: String,
    pub color: String,
}

impl Default for EventDefaults {
    fn default() -> Self {
        Self {
            calendar: DEFAULT_CALENDAR.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Main configuration structure for a single run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Range the events are filtered against
    pub range: DateRange,
    /// Defaults applied to every event
    pub defaults: EventDefaults,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

/// Optional overrides read from the TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    calendar: Option<String>,
    color: Option<String>,
    pretty: Option<bool>,
}

impl Config {
    /// Load configuration from `.env`, the process environment, arguments and config file
    pub fn load() -> ScrapeResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let args: Vec<String> = env::args().collect();
        Self::resolve(|key| env::var(key).ok(), &args)
    }

    /// Resolve configuration from an environment lookup and the process arguments.
    ///
    /// `args[0]` is the program name. `START_DATE` and `END_DATE` win over the
    /// first and second positional argument when they are set and non-empty.
    pub fn resolve<F>(lookup: F, args: &[String]) -> ScrapeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let start = env_or_arg(&lookup, "START_DATE", args, 1);
        let end = env_or_arg(&lookup, "END_DATE", args, 2);

        let mut config = Config {
            range: DateRange::new(start, end),
            ..Default::default()
        };

        let file = match lookup("CALSCRAPE_CONFIG").filter(|path| !path.is_empty()) {
            Some(path) => Some(read_file_config(&PathBuf::from(path))?),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Some(read_file_config(path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file) = file {
            config.apply(file);
        }

        Ok(config)
    }

    /// Load only the config file at `path`, with an empty date range
    pub fn from_file(path: &Path) -> ScrapeResult<Self> {
        let mut config = Config::default();
        config.apply(read_file_config(path)?);
        Ok(config)
    }

    fn apply(&mut self, file: FileConfig) {
        if let Some(calendar) = file.calendar {
            self.defaults.calendar = calendar;
        }
        if let Some(color) = file.color {
            self.defaults.color = color;
        }
        if let Some(pretty) = file.pretty {
            self.pretty = pretty;
        }
    }
}

fn env_or_arg<F>(lookup: &F, key: &str, args: &[String], index: usize) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .or_else(|| args.get(index).cloned())
        .unwrap_or_default()
}

fn read_file_config(path: &Path) -> ScrapeResult<FileConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        config_error(&format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(toml::from_str::<FileConfig>(&content)?)
}
