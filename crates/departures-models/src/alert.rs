//! Passenger alerts.
//!
//! Each flight produces exactly one message, chosen by its
//! [`FlightStatus`]. Missing values are replaced with [`TIME_TBD`] and
//! [`TERMINAL_TBD`].

use std::io::{self, Write};

use crate::board::DepartureBoard;
use crate::display::format_departure_time;
use crate::flight::{Flight, FlightStatus};

/// Placeholder for a departure time that is not known yet.
pub const TIME_TBD: &str = "TBD";

/// Placeholder for a terminal that has not been assigned yet.
pub const TERMINAL_TBD: &str = "TBD. Please see the nearest information desk for more details";

/// Build the alert message for one flight.
///
/// # Examples
///
/// ```
/// use departures_models::{alert_message, Airport, AirportCode, Flight, FlightStatus};
///
/// let jfk = Airport::new("John Francis Kennedy", AirportCode::new("JFK"), "New York City");
/// let ord = Airport::new("O'hare", AirportCode::new("ORD"), "Chicago");
/// let flight = Flight::new(jfk, ord, None, None, FlightStatus::Canceled);
///
/// assert_eq!(
///     alert_message(&flight),
///     "We're sorry your flight to O'hare was canceled, here is a $500 voucher."
/// );
/// ```
pub fn alert_message(flight: &Flight) -> String {
    let destination = &flight.arrival.name;
    let terminal = flight.terminal.as_deref().unwrap_or(TERMINAL_TBD);
    let time = flight
        .scheduled_time
        .as_ref()
        .map_or_else(|| TIME_TBD.to_string(), format_departure_time);

    match flight.status {
        FlightStatus::EnRoute => {
            format!("Your flight to {destination} has left and is en route.")
        }
        FlightStatus::Scheduled => format!(
            "Your flight to {destination} is scheduled to depart at {time} from Terminal {terminal}."
        ),
        FlightStatus::Canceled => format!(
            "We're sorry your flight to {destination} was canceled, here is a $500 voucher."
        ),
        FlightStatus::Delayed => format!(
            "Your flight to {destination} is delayed. It is rescheduled to depart at {time} from Terminal {terminal}."
        ),
        FlightStatus::Boarding => format!(
            "Your flight to {destination} is boarding, please head to Terminal {terminal} immediately. The doors are closing soon."
        ),
    }
}

impl DepartureBoard {
    /// Alert messages for every departure, in board order.
    pub fn alert_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(alert_message)
    }

    /// Write one alert line per departure.
    pub fn alert_passengers<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for message in self.alert_messages() {
            writeln!(out, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::{Airport, AirportCode};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn three_pm() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 30)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn flight(time: Option<NaiveDateTime>, terminal: Option<&str>, status: FlightStatus) -> Flight {
        Flight::new(
            Airport::new("John Francis Kennedy", AirportCode::new("JFK"), "New York City"),
            Airport::new("Logan", AirportCode::new("BOS"), "Boston"),
            time,
            terminal,
            status,
        )
    }

    #[test]
    fn en_route_message() {
        let msg = alert_message(&flight(Some(three_pm()), Some("2"), FlightStatus::EnRoute));
        assert_eq!(msg, "Your flight to Logan has left and is en route.");
    }

    #[test]
    fn scheduled_message() {
        let msg = alert_message(&flight(Some(three_pm()), Some("4"), FlightStatus::Scheduled));
        assert_eq!(
            msg,
            "Your flight to Logan is scheduled to depart at 3:00 PM from Terminal 4."
        );
    }

    #[test]
    fn scheduled_without_time_or_terminal() {
        let msg = alert_message(&flight(None, None, FlightStatus::Scheduled));
        assert_eq!(
            msg,
            "Your flight to Logan is scheduled to depart at TBD from Terminal \
             TBD. Please see the nearest information desk for more details."
        );
    }

    #[test]
    fn canceled_message() {
        let msg = alert_message(&flight(None, None, FlightStatus::Canceled));
        assert_eq!(
            msg,
            "We're sorry your flight to Logan was canceled, here is a $500 voucher."
        );
    }

    #[test]
    fn delayed_message() {
        let msg = alert_message(&flight(Some(three_pm()), Some("2"), FlightStatus::Delayed));
        assert_eq!(
            msg,
            "Your flight to Logan is delayed. It is rescheduled to depart at 3:00 PM from Terminal 2."
        );
    }

    #[test]
    fn boarding_message() {
        let msg = alert_message(&flight(Some(three_pm()), Some("1"), FlightStatus::Boarding));
        assert_eq!(
            msg,
            "Your flight to Logan is boarding, please head to Terminal 1 immediately. \
             The doors are closing soon."
        );
    }

    #[test]
    fn missing_terminal_points_to_information_desk() {
        for status in [
            FlightStatus::Scheduled,
            FlightStatus::Delayed,
            FlightStatus::Boarding,
        ] {
            for time in [None, Some(three_pm())] {
                let msg = alert_message(&flight(time, None, status));
                assert!(msg.contains(TERMINAL_TBD), "{status}: {msg}");
            }
        }
    }

    #[test]
    fn empty_terminal_is_not_treated_as_missing() {
        let msg = alert_message(&flight(Some(three_pm()), Some(""), FlightStatus::Boarding));
        assert!(!msg.contains(TERMINAL_TBD));
    }

    #[test]
    fn every_status_has_its_own_message() {
        let messages: HashSet<_> = FlightStatus::iter()
            .map(|status| alert_message(&flight(Some(three_pm()), Some("1"), status)))
            .collect();
        assert_eq!(messages.len(), FlightStatus::iter().count());
    }

    #[test]
    fn never_fails_for_any_combination() {
        for status in FlightStatus::iter() {
            for time in [None, Some(three_pm())] {
                for terminal in [None, Some("7")] {
                    let msg = alert_message(&flight(time, terminal, status));
                    assert!(msg.contains("Logan"));
                    assert!(!msg.contains("Some("));
                }
            }
        }
    }

    #[test]
    fn board_alerts_follow_board_order() {
        let board = DepartureBoard::new(
            Airport::new("John Francis Kennedy", AirportCode::new("JFK"), "New York City"),
            vec![
                flight(None, None, FlightStatus::Canceled),
                flight(None, Some("2"), FlightStatus::EnRoute),
            ],
        );
        let mut out = Vec::new();
        board.alert_passengers(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("We're sorry"));
        assert!(lines[1].ends_with("en route."));
    }
}
