pub mod config;
pub mod error;
pub mod ical;
pub mod pipeline;
pub mod startup;
pub mod utils;
