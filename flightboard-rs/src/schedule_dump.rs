use std::{path::Path, sync::LazyLock};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use snafu::ResultExt;
use tracing::warn;

use crate::{
    AircraftType, FlightNumber, FlightRecord, FlightStatus, IataCode, Registration, Result,
    error::error::IoSnafu,
};

static DATE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+,\s+\w+\s+\d{1,2}$").unwrap());

static TIME_FLIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}:\d{2} [AP]M)\s+([A-Z0-9]{2,4}\d+[A-Z]?)$").unwrap());

static TIME_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2} [AP]M$").unwrap());

static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// A departure-board dump as copied from a flight-tracking site, split into
/// trimmed lines.
#[derive(Debug, Clone)]
pub struct ScheduleDump {
    lines: Vec<String>,
}

impl ScheduleDump {
    pub fn from_path(path: &Path) -> Result<ScheduleDump> {
        let text = std::fs::read_to_string(path).context(IoSnafu)?;
        Ok(ScheduleDump::from_text(&text))
    }

    pub fn from_text(text: &str) -> ScheduleDump {
        ScheduleDump {
            lines: text.lines().map(|l| l.trim().to_string()).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Scans the dump for record blocks. Date headers carry no year, so the
    /// caller supplies the one the dump was taken in.
    pub fn records(&self, year: i32) -> Records<'_> {
        Records {
            lines: &self.lines,
            pos: 0,
            year,
            current_date: None,
        }
    }
}

// Line shapes in recognition priority order; a date header wins over a
// record header, and anything unrecognized is inert.
enum LineKind<'a> {
    DateHeader,
    RecordStart { raw_time: &'a str, flight: &'a str },
    Other,
}

fn classify(line: &str) -> LineKind<'_> {
    if DATE_HEADER.is_match(line) {
        LineKind::DateHeader
    } else if let Some((_, [raw_time, flight])) = TIME_FLIGHT.captures(line).map(|c| c.extract()) {
        LineKind::RecordStart { raw_time, flight }
    } else {
        LineKind::Other
    }
}

fn parse_date_header(line: &str, year: i32) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{line} {year}"), "%A, %B %d %Y").ok()
}

fn first_parenthesized(line: &str) -> Option<&str> {
    PARENTHESIZED.captures(line).map(|c| {
        let (_, [inner]) = c.extract();
        inner
    })
}

// Registrations are parenthesized like IATA codes; the hyphenated candidate
// is the tail number. The last occurrence wins when a line carries several,
// falling back to the last parenthesized group of any shape.
fn extract_registration(line: &str) -> Option<Registration> {
    let candidates: Vec<&str> = PARENTHESIZED
        .captures_iter(line)
        .map(|c| {
            let (_, [inner]) = c.extract();
            inner
        })
        .collect();

    candidates
        .iter()
        .rev()
        .find(|c| c.contains('-'))
        .or_else(|| candidates.last())
        .and_then(|c| c.parse().ok())
}

fn is_status_line(line: &str) -> bool {
    if TIME_ONLY.is_match(line) {
        return true;
    }
    line.split_whitespace()
        .next()
        .is_some_and(|word| word.parse::<FlightStatus>().is_ok())
}

/// Iterator over the record blocks of a dump.
///
/// Carries the scan state explicitly: the calendar date announced by the
/// most recent parseable date header scopes every record until the next
/// header, and record headers seen before any date header are skipped.
pub struct Records<'a> {
    lines: &'a [String],
    pos: usize,
    year: i32,
    current_date: Option<NaiveDate>,
}

impl Records<'_> {
    fn take_block(
        &mut self,
        date: NaiveDate,
        raw_time: String,
        flight_number: FlightNumber,
    ) -> FlightRecord {
        let destination: Option<IataCode> = self
            .lines
            .get(self.pos + 1)
            .and_then(|l| first_parenthesized(l))
            .and_then(|code| code.parse().ok());

        let (aircraft_type, registration) = self
            .lines
            .get(self.pos + 2)
            .map(|l| (AircraftType::search(l), extract_registration(l)))
            .unwrap_or((None, None));

        let timestamp = match NaiveTime::parse_from_str(&raw_time, "%I:%M %p") {
            Ok(time) => Some(NaiveDateTime::new(date, time)),
            Err(_) => {
                warn!("could not parse departure time '{raw_time}' for {flight_number}");
                None
            }
        };

        self.pos += 3;
        if self.lines.get(self.pos).is_some_and(|l| is_status_line(l)) {
            self.pos += 1;
        }

        FlightRecord {
            timestamp,
            raw_time,
            flight_number,
            destination,
            aircraft_type,
            registration,
        }
    }
}

impl Iterator for Records<'_> {
    type Item = FlightRecord;

    fn next(&mut self) -> Option<FlightRecord> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].as_str();
            match classify(line) {
                LineKind::DateHeader => {
                    // A header with an unknown month name or a weekday that
                    // contradicts the date keeps the previous scope.
                    if let Some(date) = parse_date_header(line, self.year) {
                        self.current_date = Some(date);
                    }
                    self.pos += 1;
                }
                LineKind::RecordStart { raw_time, flight } => {
                    let Some(date) = self.current_date else {
                        self.pos += 1;
                        continue;
                    };
                    let Ok(flight_number) = flight.parse::<FlightNumber>() else {
                        self.pos += 1;
                        continue;
                    };
                    return Some(self.take_block(date, raw_time.to_string(), flight_number));
                }
                LineKind::Other => self.pos += 1,
            }
        }
        None
    }
}
