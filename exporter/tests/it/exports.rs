use chrono::{NaiveDate, NaiveDateTime};
use exporter::export::{window_caption, write_codes, write_labels, write_list};
use flightboard_rs::FlightRecord;
use flightlist_core::{FlightSelection, OperatingWindow};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn departures(count: usize) -> Vec<FlightRecord> {
    (0..count)
        .map(|i| FlightRecord::test_default(&format!("NZ1{i:02}"), Some(at(26, 10, i as u32))))
        .collect()
}

#[test]
fn labels_carry_a_running_number_and_break_between_sheets() {
    let records = departures(11);
    let flights: Vec<&FlightRecord> = records.iter().collect();

    let mut buf = Vec::new();
    write_labels(&mut buf, &flights, 5).unwrap();

    let output = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "5\tNZ100\t10:00");
    assert_eq!(lines[9], "14\tNZ109\t10:09");
    // The eleventh label starts a new sheet.
    assert_eq!(lines[10], "");
    assert_eq!(lines[11], "15\tNZ110\t10:10");
}

#[test]
fn codes_export_lists_one_flight_per_line() {
    let records = departures(2);
    let flights: Vec<&FlightRecord> = records.iter().collect();

    let mut buf = Vec::new();
    write_codes(&mut buf, &flights).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "NZ100\nNZ101\n");
}

#[test]
fn list_export_starts_with_the_window_caption() {
    let mut records = departures(2);
    records[1].destination = None;
    let window = OperatingWindow::new(at(26, 5, 0), at(27, 4, 55)).unwrap();
    assert_eq!(window_caption(&window), "26-27 Jan");

    let selection = FlightSelection {
        flights: records.iter().collect(),
        window: Some(window),
    };

    let mut buf = Vec::new();
    write_list(&mut buf, &selection).unwrap();

    let output = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "# 26-27 Jan");
    assert_eq!(lines[1], "flight,time,destination,aircraft,registration");
    assert_eq!(lines[2], "NZ100,10:00,SYD,A320,ZK-OXA");
    // A destination that was never recovered renders as an empty cell.
    assert_eq!(lines[3], "NZ101,10:01,,A320,ZK-OXA");
}
