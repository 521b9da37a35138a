use strum::{AsRefStr, Display, EnumString};

/// Status words a flight-tracking site appends below a departure entry.
///
/// Dumps from some views carry one of these (optionally followed by an
/// updated time) as a fourth line of the record block; the scanner consumes
/// it so the next block starts clean.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FlightStatus {
    Scheduled,
    Estimated,
    Delayed,
    Cancelled,
}
