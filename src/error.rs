use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Unparseable date: {0}")]
    #[diagnostic(code(calscrape::date_format))]
    DateFormat(String),

    #[error("Unparseable range date: {0}")]
    #[diagnostic(code(calscrape::range_format))]
    RangeFormat(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calscrape::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(calscrape::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(calscrape::serialization))]
    Serialization(String),
}

// Implement From for JSON errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type ScrapeResult<T> = Result<T, Error>;

/// Helper to create date format errors
pub fn date_format_error(token: &str) -> Error {
    Error::DateFormat(token.to_string())
}

/// Helper to create range format errors
pub fn range_format_error(value: &str) -> Error {
    Error::RangeFormat(value.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
