use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, Debug)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("IO error"))]
    Io {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("CSV error"))]
    Csv {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: csv::Error,
    },
    #[snafu(display("Operating day bounds in the settings were invalid"))]
    DayBounds {
        #[snafu(implicit)]
        location: Location,
        source: flightlist_core::TimeOfDayError,
    },
    #[snafu(display("Failed to read the schedule dump"))]
    Dump {
        #[snafu(implicit)]
        location: Location,
        source: flightboard_rs::Error,
    },
}
