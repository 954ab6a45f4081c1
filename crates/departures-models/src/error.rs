//! Error types for the `departures-models` crate.
//!
//! All fallible constructors and calculations in this crate return variants
//! of [`ModelError`].

/// Errors produced when constructing model types or computing fares.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// An IATA airport code was not exactly 3 uppercase ASCII letters.
    #[error("invalid IATA airport code \"{value}\": {reason}")]
    InvalidAirportCode {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A fare was requested for zero travelers.
    #[error("at least one traveler is required")]
    NoTravelers,

    /// The fare does not fit in the cents counter.
    #[error("fare calculation overflowed")]
    FareOverflow,

    /// A currency amount was negative, non-finite or too large.
    #[error("invalid currency amount: {value}")]
    InvalidAmount {
        /// The rejected amount.
        value: f64,
    },
}
