use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, Debug)]
#[snafu(module, visibility(pub))]
pub enum FlightNumberError {
    #[snafu(display("Flight number did not match the designator pattern '{value}'"))]
    Invalid {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

#[derive(Snafu, Debug)]
#[snafu(module, visibility(pub))]
pub enum AirlineCodeError {
    #[snafu(display("Airline code must be exactly two letters/digits '{value}'"))]
    Invalid {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

#[derive(Snafu, Debug)]
#[snafu(module, visibility(pub))]
pub enum ParseStringError {
    #[snafu(display("String was unexpectedly empty"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
}

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
}
