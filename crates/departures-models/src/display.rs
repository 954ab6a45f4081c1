//! Departure-board lines.
//!
//! Absent times and terminals render as empty strings here. The passenger
//! notifier in [`crate::alert`] uses "TBD" defaults instead.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::board::DepartureBoard;
use crate::flight::Flight;

/// Short 12-hour time of day, e.g. `3:00 PM`.
const SHORT_TIME_FORMAT: &str = "%-I:%M %p";

/// Format a departure time as a short time of day (`"9:05 AM"`, `"3:00 PM"`).
///
/// The date part is dropped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use departures_models::format_departure_time;
///
/// let t = NaiveDate::from_ymd_opt(2019, 5, 30).unwrap().and_hms_opt(15, 0, 0).unwrap();
/// assert_eq!(format_departure_time(&t), "3:00 PM");
/// ```
pub fn format_departure_time(time: &NaiveDateTime) -> String {
    time.format(SHORT_TIME_FORMAT).to_string()
}

/// One line of the extended board.
///
/// `Destination: <name> Time: <time> Terminal: <terminal> Status: <status>`
pub fn departure_line(flight: &Flight) -> String {
    let time = flight
        .scheduled_time
        .as_ref()
        .map(format_departure_time)
        .unwrap_or_default();
    let terminal = flight.terminal.as_deref().unwrap_or_default();

    format!(
        "Destination: {} Time: {} Terminal: {} Status: {}",
        flight.arrival.name, time, terminal, flight.status
    )
}

/// One line of the summary board, by airport code.
pub fn summary_line(flight: &Flight) -> String {
    format!(
        "The flight from {} to {} is {}.",
        flight.departure.code, flight.arrival.code, flight.status
    )
}

/// Write the summary board: a header then one [`summary_line`] per flight.
pub fn print_departures<W: Write>(board: &DepartureBoard, out: &mut W) -> io::Result<()> {
    writeln!(out, "Departure Board for {}:", board.airport().code)?;
    for flight in board {
        writeln!(out, "{}", summary_line(flight))?;
    }
    Ok(())
}

/// Write the extended board: a header then one [`departure_line`] per flight.
pub fn print_departures_extended<W: Write>(board: &DepartureBoard, out: &mut W) -> io::Result<()> {
    writeln!(out, "Extended Departure Board for {}:", board.airport().code)?;
    for flight in board {
        writeln!(out, "{}", departure_line(flight))?;
    }
    Ok(())
}
