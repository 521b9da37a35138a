use chrono::NaiveDateTime;
use snafu::{Location, Snafu};

#[derive(Snafu, Debug)]
#[snafu(module, visibility(pub))]
pub enum TimeOfDayError {
    #[snafu(display("Time of day was not a valid 24-hour 'HH:MM' value '{value}'"))]
    Invalid {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: chrono::ParseError,
    },
}

#[derive(Snafu, Debug)]
#[snafu(module, visibility(pub))]
pub enum OperatingWindowError {
    #[snafu(display("Window start '{start}' was after its end '{end}'"))]
    Ordering {
        #[snafu(implicit)]
        location: Location,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}
