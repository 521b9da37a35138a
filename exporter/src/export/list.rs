use std::io::Write;

use flightlist_core::FlightSelection;
use serde::Serialize;
use snafu::ResultExt;

use crate::{
    Result,
    error::error::{CsvSnafu, IoSnafu},
};

#[derive(Debug, Serialize)]
struct ListRow<'a> {
    flight: &'a str,
    time: String,
    destination: &'a str,
    aircraft: &'a str,
    registration: &'a str,
}

/// Writes the printable flight list: a caption row naming the covered days,
/// then one row per selected flight in departure order.
pub fn write_list<W: Write>(writer: W, selection: &FlightSelection<'_>) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    if let Some(window) = &selection.window {
        csv_writer
            .write_record([format!("# {}", super::window_caption(window))])
            .context(CsvSnafu)?;
    }

    for flight in &selection.flights {
        csv_writer
            .serialize(ListRow {
                flight: flight.flight_number.as_ref(),
                time: super::departure_hhmm(flight),
                destination: flight.destination.as_ref().map(AsRef::as_ref).unwrap_or(""),
                aircraft: flight
                    .aircraft_type
                    .as_ref()
                    .map(AsRef::as_ref)
                    .unwrap_or(""),
                registration: flight
                    .registration
                    .as_ref()
                    .map(AsRef::as_ref)
                    .unwrap_or(""),
            })
            .context(CsvSnafu)?;
    }

    csv_writer.flush().context(IoSnafu)
}
