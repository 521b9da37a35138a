use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::{ParseStringError, parse_string_error::EmptySnafu};

/// IATA airport identifier as scraped from a destination line, uppercased on
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct IataCode(String);

impl IataCode {
    /// Creates a new IataCode and panics if its invalid
    pub fn new_unchecked<T: ToString>(val: T) -> IataCode {
        let val = val.to_string();
        IataCode::try_from(val).unwrap()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for IataCode {
    type Err = ParseStringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            EmptySnafu.fail()
        } else {
            Ok(IataCode(value.to_uppercase()))
        }
    }
}

impl TryFrom<String> for IataCode {
    type Error = ParseStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<str> for IataCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
