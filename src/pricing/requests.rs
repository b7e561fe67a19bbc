//! Request DTOs for pricing endpoints.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::PricingConfig;

/// Query for `GET /api/pricing/quote`
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Admin pricing form as posted by `/admin/pricing`.
///
/// Fields are kept as raw strings so a bad value can be echoed back next to
/// its error instead of failing the whole extraction.
#[derive(Debug, Clone, Default)]
pub struct PricingForm {
    pub weekday: String,
    pub weekend: String,
    pub sunday: String,
    /// Month number -> raw multiplier text
    pub multipliers: BTreeMap<u32, String>,
}

impl PricingForm {
    /// Build from urlencoded fields `weekday`, `weekend`, `sunday`, `month_1`..`month_12`.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        let multipliers = (1..=12)
            .map(|month| (month, get(&format!("month_{}", month))))
            .collect();

        Self {
            weekday: get("weekday"),
            weekend: get("weekend"),
            sunday: get("sunday"),
            multipliers,
        }
    }

    /// Pre-fill the form from an existing configuration.
    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            weekday: config.weekday.normalize().to_string(),
            weekend: config.weekend.normalize().to_string(),
            sunday: config.sunday.normalize().to_string(),
            multipliers: (1..=12)
                .map(|month| (month, config.multiplier(month).normalize().to_string()))
                .collect(),
        }
    }

    /// Parse into a validated configuration, or a list of field errors.
    pub fn parse(&self) -> Result<PricingConfig, Vec<String>> {
        let mut errors = Vec::new();

        let mut number = |label: &str, raw: &str| -> Decimal {
            match raw.trim().parse::<Decimal>() {
                Ok(value) => value,
                Err(_) => {
                    errors.push(format!("{}: '{}' is not a number", label, raw.trim()));
                    Decimal::ZERO
                }
            }
        };

        let weekday = number("Weekday rate", &self.weekday);
        let weekend = number("Weekend rate", &self.weekend);
        let sunday = number("Sunday rate", &self.sunday);
        let monthly_multipliers = self
            .multipliers
            .iter()
            .map(|(month, raw)| (*month, number(&format!("Month {} multiplier", month), raw)))
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        let config = PricingConfig {
            weekday,
            weekend,
            sunday,
            monthly_multipliers,
        };

        match config.validate() {
            Ok(()) => Ok(config),
            Err(super::models::PricingConfigError::Invalid(problems)) => Err(problems),
            Err(other) => Err(vec![other.to_string()]),
        }
    }
}
