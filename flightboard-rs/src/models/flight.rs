use chrono::NaiveDateTime;

use super::{AircraftType, FlightNumber, IataCode, Registration};

/// One observed departure, recovered from a three-line record block.
///
/// Every field other than the flight number is best-effort: a miss on the
/// destination, aircraft or registration line leaves the field `None`
/// without dropping the record, and a time that fails to parse leaves
/// `timestamp` unset while `raw_time` keeps the original text for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub timestamp: Option<NaiveDateTime>,
    pub raw_time: String,
    pub flight_number: FlightNumber,
    pub destination: Option<IataCode>,
    pub aircraft_type: Option<AircraftType>,
    pub registration: Option<Registration>,
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl FlightRecord {
        pub fn test_default(flight_number: &str, timestamp: Option<NaiveDateTime>) -> Self {
            Self {
                timestamp,
                raw_time: timestamp
                    .map(|t| t.format("%-I:%M %p").to_string())
                    .unwrap_or_else(|| "12:00 AM".into()),
                flight_number: FlightNumber::new_unchecked(flight_number),
                destination: Some(IataCode::new_unchecked("SYD")),
                aircraft_type: Some(AircraftType::normalize("320")),
                registration: "ZK-OXA".parse().ok(),
            }
        }
    }
}
