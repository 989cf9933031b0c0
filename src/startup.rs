use crate::config::Config;
use crate::error::Error;
use crate::pipeline::{render_json, Pipeline};
use std::io::{self, Read, Write};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Output written when the events cannot be serialized
pub const EMPTY_OUTPUT: &str = "[]";

/// Initialize logging with environment-based configuration.
///
/// Logs go to stderr, stdout is reserved for the JSON array.
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the run configuration
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Read all of `input`, replacing invalid UTF-8 instead of failing
pub fn read_input<R: Read>(mut input: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Run one extraction pass from `input` to `output`.
///
/// A serialization failure is logged and `[]` is written in place of the events.
pub fn run<R: Read, W: Write>(config: &Config, input: R, mut output: W) -> miette::Result<()> {
    let text = read_input(input).map_err(Error::from)?;
    let pipeline = Pipeline::from_config(config);
    info!(
        "Filtering events between {:?} and {:?}",
        pipeline.range().start,
        pipeline.range().end
    );

    let events = pipeline.run(&text);
    let json = render_json(&events, config.pretty).unwrap_or_else(|e| {
        error!("JSON marshal error: {}", e);
        EMPTY_OUTPUT.to_string()
    });

    writeln!(output, "{}", json).map_err(Error::from)?;
    Ok(())
}
