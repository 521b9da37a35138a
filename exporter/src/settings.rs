use std::{collections::HashSet, path::PathBuf};

use config::{Config, ConfigError, File};
use flightboard_rs::{AirlineCode, IataCode};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde_as(as = "DisplayFromStr")]
    pub log_level: tracing::Level,
    pub dump_path: PathBuf,
    pub output_dir: PathBuf,
    /// Date headers in a dump carry no year.
    pub schedule_year: i32,
    pub start_of_day: String,
    pub end_of_day: String,
    pub label_start: u32,
    #[serde_as(as = "HashSet<DisplayFromStr>")]
    pub allowed_airlines: HashSet<AirlineCode>,
    #[serde_as(as = "HashSet<DisplayFromStr>")]
    pub excluded_destinations: HashSet<IataCode>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(true))
            .add_source(config::Environment::with_prefix("FLIGHTLIST").separator("__"))
            .build()?
            .try_deserialize()
    }
}
