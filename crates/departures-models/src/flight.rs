//! Flight records and their status.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::airport::Airport;

// ---------------------------------------------------------------------------
// FlightStatus
// ---------------------------------------------------------------------------

/// The status shown next to a flight on the board.
///
/// Displays, parses and serialises as the camelCase variant name.
///
/// # Examples
///
/// ```
/// use departures_models::FlightStatus;
///
/// assert_eq!(FlightStatus::EnRoute.to_string(), "enRoute");
/// assert_eq!("boarding".parse::<FlightStatus>().unwrap(), FlightStatus::Boarding);
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FlightStatus {
    /// The aircraft has departed.
    EnRoute,
    /// The flight is on schedule.
    Scheduled,
    /// The flight will not operate.
    Canceled,
    /// The flight departs later than planned.
    Delayed,
    /// Passengers are boarding.
    Boarding,
}

// ---------------------------------------------------------------------------
// Flight
// ---------------------------------------------------------------------------

/// A single departure.
///
/// `scheduled_time` is `None` for canceled flights and `terminal` is `None`
/// while no gate has been assigned. Neither is enforced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Flight {
    /// Airport the flight leaves from.
    pub departure: Airport,
    /// Airport the flight goes to.
    pub arrival: Airport,
    /// Local departure time, if known.
    pub scheduled_time: Option<NaiveDateTime>,
    /// Terminal, if assigned.
    pub terminal: Option<String>,
    /// Current status.
    pub status: FlightStatus,
}

impl Flight {
    /// Construct a flight.
    pub fn new(
        departure: Airport,
        arrival: Airport,
        scheduled_time: Option<NaiveDateTime>,
        terminal: Option<&str>,
        status: FlightStatus,
    ) -> Self {
        Self {
            departure,
            arrival,
            scheduled_time,
            terminal: terminal.map(str::to_string),
            status,
        }
    }
}
