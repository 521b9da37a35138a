use std::io::Write;

use flightboard_rs::FlightRecord;
use snafu::ResultExt;

use crate::{Result, error::error::IoSnafu};

/// Writes the filtered flight-code export, one code per line.
pub fn write_codes<W: Write>(mut writer: W, flights: &[&FlightRecord]) -> Result<()> {
    for flight in flights {
        writeln!(writer, "{}", flight.flight_number).context(IoSnafu)?;
    }
    Ok(())
}
