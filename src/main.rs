use calscrape::startup;
use std::io;
use tracing::info;

fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting calscrape");

    // Load configuration
    let config = startup::load_config()?;

    // Extract, filter and print
    startup::run(&config, io::stdin().lock(), io::stdout().lock())
}
