//! Airfare calculation.
//!
//! Amounts are counted in whole cents so that `$0.10` per mile adds up
//! exactly. Checked bags are a total for the whole party and are not
//! multiplied by the number of travelers; the distance charge is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Default fee per checked bag, in cents ($25).
pub const DEFAULT_BAG_FEE_CENTS: u64 = 2_500;

/// Default price per mile and traveler, in cents ($0.10).
pub const DEFAULT_CENTS_PER_MILE: u64 = 10;

// ---------------------------------------------------------------------------
// Fare
// ---------------------------------------------------------------------------

/// A non-negative amount in US dollars, stored as cents.
///
/// `Display` renders US currency and cannot fail.
///
/// # Examples
///
/// ```
/// use departures_models::Fare;
///
/// assert_eq!(Fare::from_cents(65_000).to_string(), "$650.00");
/// assert_eq!(Fare::from_cents(123_456_789).to_string(), "$1,234,567.89");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fare(u64);

impl Fare {
    /// Build a fare from a number of cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    pub fn cents(self) -> u64 {
        self.0
    }

    /// The amount in dollars.
    #[allow(clippy::cast_precision_loss)]
    pub fn dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl TryFrom<f64> for Fare {
    type Error = ModelError;

    /// Round a dollar amount to the nearest cent.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents < 0.0 || cents >= u64::MAX as f64 {
            return Err(ModelError::InvalidAmount { value: amount });
        }
        Ok(Self(cents as u64))
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "${grouped}.{:02}", self.0 % 100)
    }
}

/// Render a dollar amount as US currency (`"$1,000.00"`).
///
/// Negative, non-finite and out-of-range amounts are rejected.
///
/// # Examples
///
/// ```
/// use departures_models::format_currency;
///
/// assert_eq!(format_currency(250.0).unwrap(), "$250.00");
/// assert!(format_currency(f64::NAN).is_err());
/// ```
pub fn format_currency(amount: f64) -> Result<String, ModelError> {
    Fare::try_from(amount).map(|fare| fare.to_string())
}

// ---------------------------------------------------------------------------
// FareSchedule
// ---------------------------------------------------------------------------

/// Rates used to price a trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareSchedule {
    /// Fee per checked bag, in cents.
    pub bag_fee_cents: u64,
    /// Price per mile for each traveler, in cents.
    pub cents_per_mile: u64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            bag_fee_cents: DEFAULT_BAG_FEE_CENTS,
            cents_per_mile: DEFAULT_CENTS_PER_MILE,
        }
    }
}

impl FareSchedule {
    /// Price a trip.
    ///
    /// `checked_bags` is the total for the party.
    /// Fails with [`ModelError::NoTravelers`] when `travelers` is zero and
    /// with [`ModelError::FareOverflow`] when the total does not fit.
    pub fn quote(&self, checked_bags: u32, distance: u32, travelers: u32) -> Result<Fare, ModelError> {
        if travelers == 0 {
            return Err(ModelError::NoTravelers);
        }

        let bag_cost = u64::from(checked_bags).checked_mul(self.bag_fee_cents);
        let travel_cost = u64::from(distance)
            .checked_mul(self.cents_per_mile)
            .and_then(|per_traveler| per_traveler.checked_mul(u64::from(travelers)));
        let total = bag_cost
            .zip(travel_cost)
            .and_then(|(bags, travel)| bags.checked_add(travel))
            .ok_or(ModelError::FareOverflow)?;

        tracing::debug!(checked_bags, distance, travelers, total_cents = total, "fare quoted");
        Ok(Fare(total))
    }
}

/// Price a trip with the default $25 per bag and $0.10 per mile.
///
/// # Examples
///
/// ```
/// use departures_models::calculate_airfare;
///
/// let fare = calculate_airfare(2, 2000, 3).unwrap();
/// assert_eq!(fare.dollars(), 650.0);
/// ```
pub fn calculate_airfare(checked_bags: u32, distance: u32, travelers: u32) -> Result<Fare, ModelError> {
    FareSchedule::default().quote(checked_bags, distance, travelers)
}
