//! Airport identity types.
//!
//! An [`Airport`] appears on a board both as the board's home airport and as
//! the departure and arrival ends of every [`crate::Flight`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// AirportCode
// ---------------------------------------------------------------------------

/// A three-letter IATA airport code (e.g. `"JFK"`, `"ORD"`).
///
/// Use [`TryFrom`] or [`FromStr`] for validated construction, or [`new`](Self::new)
/// for an unchecked path (e.g. when the value is a literal).
///
/// # Examples
///
/// ```
/// use departures_models::AirportCode;
///
/// let code = AirportCode::new("JFK");
/// assert_eq!(code.to_string(), "JFK");
///
/// let parsed: AirportCode = "BOS".parse().unwrap();
/// assert_eq!(parsed.as_str(), "BOS");
///
/// assert!("KJFK".parse::<AirportCode>().is_err());
/// assert!("jfk".parse::<AirportCode>().is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportCode(String);

impl AirportCode {
    /// Create a new airport code **without validation**.
    ///
    /// Prefer [`TryFrom`] or [`FromStr`] when the input is untrusted.
    pub fn new(code: &str) -> Self {
        Self(code.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), ModelError> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(())
        } else {
            Err(ModelError::InvalidAirportCode {
                value: s.to_string(),
                reason: "must be exactly 3 uppercase ASCII letters".to_string(),
            })
        }
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for AirportCode {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for AirportCode {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl FromStr for AirportCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// ---------------------------------------------------------------------------
// Airport
// ---------------------------------------------------------------------------

/// An airport as shown on a departures board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airport {
    /// Display name (e.g. `"LaGuardia"`).
    pub name: String,
    /// IATA code identifying the airport.
    pub code: AirportCode,
    /// City served by the airport.
    pub city: String,
}

impl Airport {
    /// Construct an airport from anything convertible into its fields.
    pub fn new(name: impl Into<String>, code: AirportCode, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code,
            city: city.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
