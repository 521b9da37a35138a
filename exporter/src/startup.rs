use std::{fs::File, path::PathBuf};

use flightboard_rs::{FlightRecord, ScheduleDump};
use flightlist_core::{DayBounds, SelectionPolicy, select_flights};
use snafu::ResultExt;
use tracing::{info, warn};

use crate::{
    Result,
    error::error::{DayBoundsSnafu, DumpSnafu, IoSnafu},
    export,
    settings::Settings,
};

#[derive(Debug)]
pub struct App {
    dump_path: PathBuf,
    output_dir: PathBuf,
    schedule_year: i32,
    label_start: u32,
    bounds: DayBounds,
    policy: SelectionPolicy,
}

/// Per-stage counts of one export run, reported so a parsing problem can be
/// told apart from a filtering one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records_parsed: usize,
    pub flights_selected: usize,
}

impl App {
    pub fn build(settings: &Settings) -> Result<App> {
        let bounds = DayBounds::parse(&settings.start_of_day, &settings.end_of_day)
            .context(DayBoundsSnafu)?;

        Ok(App {
            dump_path: settings.dump_path.clone(),
            output_dir: settings.output_dir.clone(),
            schedule_year: settings.schedule_year,
            label_start: settings.label_start,
            bounds,
            policy: SelectionPolicy {
                allowed_airlines: settings.allowed_airlines.clone(),
                excluded_destinations: settings.excluded_destinations.clone(),
            },
        })
    }

    pub fn run(&self) -> Result<RunSummary> {
        let dump = ScheduleDump::from_path(&self.dump_path).context(DumpSnafu)?;
        let records: Vec<FlightRecord> = dump.records(self.schedule_year).collect();
        info!(
            "parsed {} flight records from {} dump lines",
            records.len(),
            dump.line_count()
        );

        let selection = select_flights(&records, &self.bounds, &self.policy);

        let summary = RunSummary {
            lines_read: dump.line_count(),
            records_parsed: records.len(),
            flights_selected: selection.flights.len(),
        };

        if records.is_empty() {
            warn!("no record blocks recognized in the dump, nothing to export");
            return Ok(summary);
        }
        let Some(window) = &selection.window else {
            warn!("no record carried a usable departure time, nothing to export");
            return Ok(summary);
        };
        if selection.flights.is_empty() {
            warn!("records parsed but none matched the operating window and selection policy");
            return Ok(summary);
        }

        std::fs::create_dir_all(&self.output_dir).context(IoSnafu)?;
        let tag = window.start().format("%d-%m");

        let list = File::create(self.output_dir.join(format!("List_{tag}.csv")))
            .context(IoSnafu)?;
        export::write_list(list, &selection)?;

        let labels = File::create(self.output_dir.join(format!("Labels_{tag}.txt")))
            .context(IoSnafu)?;
        export::write_labels(labels, &selection.flights, self.label_start)?;

        let codes = File::create(self.output_dir.join(format!("Codes_{tag}.txt")))
            .context(IoSnafu)?;
        export::write_codes(codes, &selection.flights)?;

        info!(
            "exported {} flights covering {}",
            selection.flights.len(),
            export::window_caption(window)
        );

        Ok(summary)
    }
}
