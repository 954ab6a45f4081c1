//! Sample JFK departures used by the demo commands.

use chrono::{NaiveDateTime, TimeDelta};
use departures_models::{Airport, AirportCode, DepartureBoard, Flight, FlightStatus};

/// Party used by the demo fare quote: (bags, miles, travelers).
pub const DEMO_TRIP: (u32, u32, u32) = (2, 1_000, 2);

fn airport(name: &str, code: &str, city: &str) -> Airport {
    Airport::new(name, AirportCode::new(code), city)
}

/// Build the JFK board with five departures relative to `now`.
///
/// One flight is canceled with no time and two have no terminal yet.
pub fn jfk_board(now: NaiveDateTime) -> DepartureBoard {
    let jfk = airport("John Francis Kennedy", "JFK", "New York City");
    let lga = airport("LaGuardia", "LGA", "New York City");
    let iad = airport("Dulles", "IAD", "Washington DC");
    let bos = airport("Logan", "BOS", "Boston");
    let ord = airport("O'hare", "ORD", "Chicago");

    let in_one_day = now.checked_add_signed(TimeDelta::days(1));
    let in_three_hours = now.checked_add_signed(TimeDelta::hours(3));
    let in_fifteen_minutes = now.checked_add_signed(TimeDelta::minutes(15));

    let mut board = DepartureBoard::new(
        jfk.clone(),
        vec![Flight::new(jfk.clone(), iad, Some(now), Some("2"), FlightStatus::EnRoute)],
    );
    board.push(Flight::new(jfk.clone(), bos, in_three_hours, None, FlightStatus::Scheduled));
    board.push(Flight::new(jfk.clone(), ord, None, None, FlightStatus::Canceled));
    board.push(Flight::new(jfk.clone(), lga.clone(), in_one_day, Some("2"), FlightStatus::Delayed));
    board.push(Flight::new(jfk, lga, in_fifteen_minutes, Some("1"), FlightStatus::Boarding));
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn board_has_five_departures_from_jfk() {
        let board = jfk_board(noon());
        assert_eq!(board.airport().code.as_str(), "JFK");
        assert_eq!(board.len(), 5);
        assert!(board.iter().all(|f| f.departure.code.as_str() == "JFK"));
    }

    #[test]
    fn canceled_flight_has_no_time() {
        let board = jfk_board(noon());
        let canceled: Vec<_> = board
            .iter()
            .filter(|f| f.status == FlightStatus::Canceled)
            .collect();
        assert_eq!(canceled.len(), 1);
        assert!(canceled[0].scheduled_time.is_none());
    }

    #[test]
    fn sample_alerts() {
        let board = jfk_board(noon());
        let alerts: Vec<_> = board.alert_messages().collect();
        assert_eq!(
            alerts,
            vec![
                "Your flight to Dulles has left and is en route.",
                "Your flight to Logan is scheduled to depart at 3:00 PM from Terminal \
                 TBD. Please see the nearest information desk for more details.",
                "We're sorry your flight to O'hare was canceled, here is a $500 voucher.",
                "Your flight to LaGuardia is delayed. It is rescheduled to depart at 12:00 PM from Terminal 2.",
                "Your flight to LaGuardia is boarding, please head to Terminal 1 immediately. \
                 The doors are closing soon.",
            ]
        );
    }
}
