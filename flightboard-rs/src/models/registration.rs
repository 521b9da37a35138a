use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::{ParseStringError, parse_string_error::EmptySnafu};

/// Tail registration as printed on the aircraft line, e.g. `ZK-NNF`. Stored
/// verbatim apart from trimming; registrations are matched case-sensitively
/// by downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct Registration(String);

impl Registration {
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the registration carries the hyphenated country prefix form.
    pub fn is_hyphenated(&self) -> bool {
        self.0.contains('-')
    }
}

impl FromStr for Registration {
    type Err = ParseStringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            EmptySnafu.fail()
        } else {
            Ok(Registration(value.into()))
        }
    }
}

impl TryFrom<String> for Registration {
    type Error = ParseStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<str> for Registration {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
