use std::io::Write;

use flightboard_rs::FlightRecord;
use snafu::ResultExt;

use crate::{Result, error::error::IoSnafu};

// The printed sheet holds two columns of five labels.
const LABELS_PER_SHEET: usize = 10;

/// Writes the label data: running number, flight code and departure time,
/// one label per line with a blank line between sheets.
pub fn write_labels<W: Write>(
    mut writer: W,
    flights: &[&FlightRecord],
    start_number: u32,
) -> Result<()> {
    for (i, flight) in flights.iter().enumerate() {
        if i > 0 && i % LABELS_PER_SHEET == 0 {
            writeln!(writer).context(IoSnafu)?;
        }
        writeln!(
            writer,
            "{}\t{}\t{}",
            start_number + i as u32,
            flight.flight_number,
            super::departure_hhmm(flight)
        )
        .context(IoSnafu)?;
    }
    Ok(())
}
