use chrono::NaiveTime;
use snafu::ResultExt;

use crate::error::{TimeOfDayError, time_of_day_error::InvalidSnafu};

/// Start and end of the operating day as wall-clock times.
///
/// The end anchors to the day after the window start, so an end at or
/// before the start is a valid overnight span, not an inverted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub start_of_day: NaiveTime,
    pub end_of_day: NaiveTime,
}

impl DayBounds {
    /// Parses a 24-hour `HH:MM` pair. Malformed input here is a caller
    /// mistake, not dump noise, and fails the call instead of defaulting.
    pub fn parse(start_of_day: &str, end_of_day: &str) -> Result<DayBounds, TimeOfDayError> {
        Ok(DayBounds {
            start_of_day: parse_time_of_day(start_of_day)?,
            end_of_day: parse_time_of_day(end_of_day)?,
        })
    }
}

pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, TimeOfDayError> {
    NaiveTime::parse_from_str(value, "%H:%M").context(InvalidSnafu { value })
}
