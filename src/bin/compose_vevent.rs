use calscrape::error::Error;
use calscrape::ical::{compose_vevent, EventDraft};
use calscrape::startup;
use chrono::Utc;
use std::io;
use tracing::info;

fn main() -> miette::Result<()> {
    startup::init_logging()?;

    // Read one JSON draft from stdin
    let text = startup::read_input(io::stdin().lock()).map_err(Error::from)?;
    let draft: EventDraft = serde_json::from_str(&text).map_err(Error::from)?;
    info!("Composing VEVENT for {:?}", draft.summary);

    println!("{}", compose_vevent(&draft, Utc::now()));
    Ok(())
}
