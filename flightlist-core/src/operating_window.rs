use chrono::{Days, Duration, NaiveDate, NaiveDateTime};

use crate::{
    DayBounds, error::OperatingWindowError, error::operating_window_error::OrderingSnafu,
};

/// Absolute span of one operating day, possibly crossing midnight into the
/// following calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl OperatingWindow {
    // Both ends are inclusive
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<OperatingWindow, OperatingWindowError> {
        if start > end {
            OrderingSnafu { start, end }.fail()
        } else {
            Ok(OperatingWindow { start, end })
        }
    }

    /// Derives the window from the calendar dates observed in a dump.
    ///
    /// The window opens on the earliest observed date and closes on the
    /// second earliest, or on the following day when only one date was
    /// observed. Closing on a later date than it opens is what lets an
    /// end-of-day clock time at or before start-of-day span midnight
    /// without any casing at the comparison site.
    pub fn from_observed_dates(dates: &[NaiveDate], bounds: &DayBounds) -> Option<OperatingWindow> {
        // `dates` is expected sorted ascending and deduplicated, so the
        // close date is always strictly after the open date and the
        // ordering invariant holds by construction.
        let open = *dates.first()?;
        let close = dates.get(1).copied().unwrap_or_else(|| open + Days::new(1));

        Some(OperatingWindow {
            start: open.and_time(bounds.start_of_day),
            end: close.and_time(bounds.end_of_day),
        })
    }

    pub fn contains(&self, val: NaiveDateTime) -> bool {
        val >= self.start && val <= self.end
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
