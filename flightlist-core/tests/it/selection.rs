use chrono::{NaiveDate, NaiveDateTime};
use flightboard_rs::{FlightRecord, IataCode, ScheduleDump};
use flightlist_core::{DayBounds, SelectionPolicy, select_flights};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn overnight_bounds() -> DayBounds {
    DayBounds::parse("05:00", "04:55").unwrap()
}

fn policy(allowed: &[&str], excluded: &[&str]) -> SelectionPolicy {
    SelectionPolicy {
        allowed_airlines: allowed.iter().map(|a| a.parse().unwrap()).collect(),
        excluded_destinations: excluded.iter().map(|d| d.parse().unwrap()).collect(),
    }
}

#[test]
fn overnight_window_includes_up_to_its_inclusive_ends() {
    let records = vec![
        FlightRecord::test_default("NZ101", Some(at(26, 23, 59))),
        FlightRecord::test_default("NZ102", Some(at(27, 4, 55))),
        FlightRecord::test_default("NZ103", Some(at(27, 5, 1))),
        FlightRecord::test_default("NZ104", Some(at(26, 4, 59))),
    ];

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ"], &[]));

    let flights: Vec<&str> = selection
        .flights
        .iter()
        .map(|f| f.flight_number.as_ref())
        .collect();
    // NZ103 departs after the window closes, NZ104 before it opens.
    assert_eq!(flights, ["NZ101", "NZ102"]);
}

#[test]
fn window_closes_on_the_second_observed_date() {
    let records = vec![
        FlightRecord::test_default("NZ101", Some(at(26, 12, 0))),
        FlightRecord::test_default("NZ102", Some(at(28, 3, 0))),
    ];

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ"], &[]));

    let window = selection.window.unwrap();
    assert_eq!(window.start(), at(26, 5, 0));
    assert_eq!(window.end(), at(28, 4, 55));
}

#[test]
fn airline_outside_the_allow_list_is_excluded_even_in_window() {
    let records = vec![
        FlightRecord::test_default("NZ101", Some(at(26, 12, 0))),
        FlightRecord::test_default("EK407", Some(at(26, 13, 0))),
    ];

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ", "QF"], &[]));

    assert_eq!(selection.flights.len(), 1);
    assert_eq!(selection.flights[0].flight_number.as_ref(), "NZ101");
}

#[test]
fn excluded_destination_removes_an_allowed_airline() {
    let mut domestic = FlightRecord::test_default("NZ418", Some(at(26, 12, 0)));
    domestic.destination = Some(IataCode::new_unchecked("WLG"));
    let mut unknown_destination = FlightRecord::test_default("NZ5", Some(at(26, 13, 0)));
    unknown_destination.destination = None;
    let records = vec![domestic, unknown_destination];

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ"], &["WLG"]));

    // The record with no recovered destination cannot match an exclusion.
    assert_eq!(selection.flights.len(), 1);
    assert_eq!(selection.flights[0].flight_number.as_ref(), "NZ5");
}

#[test]
fn records_without_timestamps_never_reach_the_output() {
    let records = vec![
        FlightRecord::test_default("NZ101", None),
        FlightRecord::test_default("NZ102", Some(at(26, 12, 0))),
    ];

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ"], &[]));

    assert_eq!(selection.flights.len(), 1);
    assert_eq!(selection.flights[0].flight_number.as_ref(), "NZ102");
}

#[test]
fn all_untimestamped_input_yields_no_window_and_no_flights() {
    let records = vec![
        FlightRecord::test_default("NZ101", None),
        FlightRecord::test_default("NZ102", None),
    ];

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ"], &[]));

    assert!(selection.flights.is_empty());
    assert!(selection.window.is_none());
}

#[test]
fn empty_input_yields_no_window_and_no_flights() {
    let selection = select_flights(&[], &overnight_bounds(), &policy(&["NZ"], &[]));

    assert!(selection.flights.is_empty());
    assert!(selection.window.is_none());
}

#[test]
fn output_is_ordered_by_departure_time() {
    let records = vec![
        FlightRecord::test_default("NZ103", Some(at(26, 23, 0))),
        FlightRecord::test_default("NZ101", Some(at(26, 6, 0))),
        FlightRecord::test_default("NZ102", Some(at(26, 14, 0))),
    ];

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ"], &[]));

    let flights: Vec<&str> = selection
        .flights
        .iter()
        .map(|f| f.flight_number.as_ref())
        .collect();
    assert_eq!(flights, ["NZ101", "NZ102", "NZ103"]);
}

// The two-record dump from the original operating profile: the early NZ
// departure falls before the window opens and the Qantas one is bound for
// an excluded destination, so a parseable dump can still select nothing.
#[test]
fn dump_with_records_can_still_select_nothing() {
    let dump = ScheduleDump::from_text(
        "Monday, Jan 26\n\
         4:55 AM\tNZ1\n\
         Sydney (SYD)\n\
         Air New Zealand\tA320 (ZK-OXA)\n\
         Monday, Jan 26\n\
         11:00 PM\tQF2\n\
         Auckland (AKL)\n\
         Qantas\tB789 (VH-ZNJ)\n",
    );
    let records: Vec<FlightRecord> = dump.records(2026).collect();
    assert_eq!(records.len(), 2);

    let selection = select_flights(&records, &overnight_bounds(), &policy(&["NZ", "QF"], &["AKL"]));

    let window = selection.window.unwrap();
    assert_eq!(window.start(), at(26, 5, 0));
    assert_eq!(window.end(), at(27, 4, 55));
    // NZ1 departs 04:55, five minutes before the 05:00 open; QF2 is in
    // window but Auckland-bound.
    assert!(selection.flights.is_empty());
}
