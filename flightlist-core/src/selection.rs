use std::collections::HashSet;

use chrono::NaiveDate;
use flightboard_rs::{AirlineCode, FlightRecord, IataCode};
use itertools::Itertools;

use crate::{DayBounds, OperatingWindow};

/// Which flights belong on the printed list: an airline allow-list combined
/// with a destination exclusion set.
#[derive(Debug, Clone, Default)]
pub struct SelectionPolicy {
    pub allowed_airlines: HashSet<AirlineCode>,
    pub excluded_destinations: HashSet<IataCode>,
}

impl SelectionPolicy {
    pub fn allows(&self, record: &FlightRecord) -> bool {
        if !self
            .allowed_airlines
            .contains(&record.flight_number.airline())
        {
            return false;
        }
        // A record whose destination was never recovered cannot match an
        // exclusion.
        record
            .destination
            .as_ref()
            .is_none_or(|dest| !self.excluded_destinations.contains(dest))
    }
}

/// Flights that passed the window and policy checks, ordered by departure
/// time, together with the window they were tested against.
///
/// `window` is `None` only when no record carried a timestamp; selection
/// borrows the records and never mutates them.
#[derive(Debug)]
pub struct FlightSelection<'a> {
    pub flights: Vec<&'a FlightRecord>,
    pub window: Option<OperatingWindow>,
}

pub fn select_flights<'a>(
    records: &'a [FlightRecord],
    bounds: &DayBounds,
    policy: &SelectionPolicy,
) -> FlightSelection<'a> {
    let observed_dates: Vec<NaiveDate> = records
        .iter()
        .filter_map(|r| r.timestamp)
        .map(|t| t.date())
        .unique()
        .sorted()
        .collect();

    let Some(window) = OperatingWindow::from_observed_dates(&observed_dates, bounds) else {
        return FlightSelection {
            flights: Vec::new(),
            window: None,
        };
    };

    let flights = records
        .iter()
        .filter(|r| policy.allows(r))
        .filter(|r| r.timestamp.is_some_and(|t| window.contains(t)))
        .sorted_by_key(|r| r.timestamp)
        .collect();

    FlightSelection {
        flights,
        window: Some(window),
    }
}
