use flightboard_rs::FlightRecord;
use flightlist_core::OperatingWindow;

mod codes;
mod labels;
mod list;

pub use codes::*;
pub use labels::*;
pub use list::*;

/// The day span a document covers, e.g. `26-27 Jan`.
pub fn window_caption(window: &OperatingWindow) -> String {
    format!(
        "{}-{} {}",
        window.start().format("%d"),
        window.end().format("%d"),
        window.start().format("%b")
    )
}

// Documents show 24-hour clock times; the raw scraped text is the fallback
// for a record whose time never parsed.
fn departure_hhmm(record: &FlightRecord) -> String {
    record
        .timestamp
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| record.raw_time.clone())
}
