#![deny(missing_docs)]

//! # Departures Models
//!
//! Core data types for an airport departures board.
//!
//! ## Type hierarchy
//!
//! ```text
//! DepartureBoard
//! ├── Airport (home airport)
//! └── Vec<Flight>
//!     ├── Airport (departure / arrival)
//!     ├── Option<NaiveDateTime>, Option<String>
//!     └── FlightStatus
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`airport`] | `AirportCode`, `Airport` |
//! | [`flight`] | `FlightStatus`, `Flight` |
//! | [`board`] | `DepartureBoard` |
//! | [`display`] | Departure-board lines and printers |
//! | [`alert`] | Passenger alert messages |
//! | [`fare`] | Airfare calculation and currency rendering |

pub mod airport;
pub mod alert;
pub mod board;
pub mod display;
pub mod error;
pub mod fare;
pub mod flight;

// Re-export all public types at crate root for convenience.
pub use airport::*;
pub use alert::*;
pub use board::*;
pub use display::*;
pub use error::*;
pub use fare::*;
pub use flight::*;
