use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::error::{
    AirlineCodeError, FlightNumberError, airline_code_error, flight_number_error::InvalidSnafu,
};

// Designator of 2-4 letters/digits, flight number, optional suffix letter.
static FLIGHT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2,4}\d+[A-Z]?$").unwrap());

/// NewType wrapper for flight numbers as they appear on a departure board,
/// e.g. `NZ123` or `QF140A`. Enforces the designator pattern and uppercases
/// on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct FlightNumber(String);

impl FlightNumber {
    /// Creates a new FlightNumber and panics if its invalid
    pub fn new_unchecked<T: ToString>(val: T) -> FlightNumber {
        let val = val.to_string();
        FlightNumber::try_from(val).unwrap()
    }

    /// The two leading characters identifying the operating airline.
    pub fn airline(&self) -> AirlineCode {
        // The designator pattern guarantees at least two leading characters.
        AirlineCode(self.0[0..2].into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for FlightNumber {
    type Err = FlightNumberError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_uppercase();
        if FLIGHT_CODE.is_match(&value) {
            Ok(FlightNumber(value))
        } else {
            InvalidSnafu { value }.fail()
        }
    }
}

impl TryFrom<String> for FlightNumber {
    type Error = FlightNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<str> for FlightNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Two-letter/digit airline designator, the prefix of a flight number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct AirlineCode(String);

impl FromStr for AirlineCode {
    type Err = AirlineCodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.len() == 2 && value.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(AirlineCode(value.to_uppercase()))
        } else {
            airline_code_error::InvalidSnafu { value }.fail()
        }
    }
}

impl TryFrom<String> for AirlineCode {
    type Error = AirlineCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<str> for AirlineCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
