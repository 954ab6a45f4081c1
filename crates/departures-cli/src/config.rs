//! CLI configuration.
//!
//! Fare rates are read from environment variables at startup; anything
//! missing or unparseable falls back to the library defaults.

use departures_models::{FareSchedule, DEFAULT_BAG_FEE_CENTS, DEFAULT_CENTS_PER_MILE};

const BAG_FEE_VAR: &str = "DEPARTURES_BAG_FEE_CENTS";
const CENTS_PER_MILE_VAR: &str = "DEPARTURES_CENTS_PER_MILE";

/// Runtime configuration for the `departures` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Rates used by the `fare` and `demo` commands.
    pub fares: FareSchedule,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                     | Default | Description                      |
    /// |------------------------------|---------|----------------------------------|
    /// | `DEPARTURES_BAG_FEE_CENTS`   | `2500`  | Fee per checked bag, in cents    |
    /// | `DEPARTURES_CENTS_PER_MILE`  | `10`    | Price per mile and traveler      |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fares = FareSchedule {
            bag_fee_cents: cents_var(&lookup, BAG_FEE_VAR, DEFAULT_BAG_FEE_CENTS),
            cents_per_mile: cents_var(&lookup, CENTS_PER_MILE_VAR, DEFAULT_CENTS_PER_MILE),
        };
        Self { fares }
    }
}

fn cents_var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(%key, value = %raw, error = %e, default, "ignoring invalid setting");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config_with(&[]);
        assert_eq!(cfg.fares, FareSchedule::default());
    }

    #[test]
    fn overrides_from_vars() {
        let cfg = config_with(&[
            ("DEPARTURES_BAG_FEE_CENTS", "3000"),
            ("DEPARTURES_CENTS_PER_MILE", " 12 "),
        ]);
        assert_eq!(cfg.fares.bag_fee_cents, 3000);
        assert_eq!(cfg.fares.cents_per_mile, 12);
    }

    #[test]
    fn invalid_value_falls_back_to_default() {
        let cfg = config_with(&[("DEPARTURES_BAG_FEE_CENTS", "twenty-five")]);
        assert_eq!(cfg.fares.bag_fee_cents, DEFAULT_BAG_FEE_CENTS);
        assert_eq!(cfg.fares.cents_per_mile, DEFAULT_CENTS_PER_MILE);
    }
}
