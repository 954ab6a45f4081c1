//! The departures board for one airport.

use serde::{Deserialize, Serialize};

use crate::airport::Airport;
use crate::flight::Flight;

/// A home airport and its ordered list of departures.
///
/// The list is owned by the board; callers append through [`push`](Self::push)
/// and read through [`departures`](Self::departures).
///
/// # Examples
///
/// ```
/// use departures_models::{Airport, AirportCode, DepartureBoard, Flight, FlightStatus};
///
/// let jfk = Airport::new("John Francis Kennedy", AirportCode::new("JFK"), "New York City");
/// let bos = Airport::new("Logan", AirportCode::new("BOS"), "Boston");
///
/// let mut board = DepartureBoard::new(jfk.clone(), Vec::new());
/// board.push(Flight::new(jfk, bos, None, Some("4"), FlightStatus::Scheduled));
/// assert_eq!(board.len(), 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartureBoard {
    airport: Airport,
    departures: Vec<Flight>,
}

impl DepartureBoard {
    /// Create a board for `airport` holding `departures` in the given order.
    pub fn new(airport: Airport, departures: Vec<Flight>) -> Self {
        Self {
            airport,
            departures,
        }
    }

    /// The board's home airport.
    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    /// All departures, in insertion order.
    pub fn departures(&self) -> &[Flight] {
        &self.departures
    }

    /// Append a departure at the end of the board.
    pub fn push(&mut self, flight: Flight) {
        tracing::debug!(
            board = %self.airport.code,
            destination = %flight.arrival.code,
            status = %flight.status,
            "flight added to board"
        );
        self.departures.push(flight);
    }

    /// Number of departures.
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    /// Whether the board has no departures.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    /// Iterate over departures in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.departures.iter()
    }
}

impl<'a> IntoIterator for &'a DepartureBoard {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
