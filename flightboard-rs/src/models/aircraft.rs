use std::{fmt, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;
use serde::Serialize;

/// Raw tokens observed on flight-tracking aircraft lines mapped to the
/// canonical type codes used on the printed list.
const TYPE_ALIASES: &[(&str, &str)] = &[
    ("32q", "A320"),
    ("320", "A320"),
    ("32x", "A320"),
    ("789", "B789"),
    ("772", "B772"),
    ("77w", "B77W"),
    ("332", "A332"),
    ("333", "A333"),
    ("330", "A330"),
    ("359", "A359"),
    ("388", "A388"),
    ("737", "B737"),
    ("73h", "B737"),
    ("at7", "AT76"),
];

// Longer tokens must come first in the alternation so that e.g. "320" wins
// over a "32" embedded in it; ties are broken alphabetically to keep the
// pattern deterministic.
static TYPE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = TYPE_ALIASES
        .iter()
        .flat_map(|(raw, canonical)| [*raw, *canonical])
        .unique()
        .sorted_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)))
        .join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap()
});

/// Normalized aircraft type code, e.g. `A320` or `B789`.
///
/// Construction goes through [`AircraftType::normalize`], which is total: a
/// token outside the alias table becomes its uppercase self rather than
/// being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct AircraftType(String);

impl AircraftType {
    pub fn normalize(raw: &str) -> AircraftType {
        let lower = raw.to_lowercase();
        let canonical = TYPE_ALIASES
            .iter()
            .find(|(alias, _)| **alias == lower)
            .map(|(_, canonical)| (*canonical).into())
            .unwrap_or_else(|| raw.to_uppercase());
        AircraftType(canonical)
    }

    /// Searches free text for the first known type token and normalizes it.
    pub fn search(text: &str) -> Option<AircraftType> {
        TYPE_TOKEN
            .captures(text)
            .map(|c| AircraftType::normalize(&c[1]))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for AircraftType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
