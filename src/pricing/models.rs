//! Pricing configuration model.
//!
//! The JSON shape matches the admin export (`pricing-config.json`):
//! `{ "weekday", "weekend", "sunday", "monthlyMultipliers": { "1": .., "12": .. } }`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Highest base rate accepted, in euros per night
pub const MAX_RATE: Decimal = dec!(100000);
pub const MAX_MULTIPLIER: Decimal = dec!(10);

/// Nightly base rates by day of week plus a seasonal multiplier per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Monday-Thursday
    pub weekday: Decimal,
    /// Friday-Saturday
    pub weekend: Decimal,
    pub sunday: Decimal,
    /// Month number (1 = January) -> multiplier
    pub monthly_multipliers: BTreeMap<u32, Decimal>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let monthly_multipliers = [
            (1, dec!(0.7)),
            (2, dec!(0.7)),
            (3, dec!(0.8)),
            (4, dec!(0.9)),
            (5, dec!(1.0)),
            (6, dec!(1.2)),
            (7, dec!(1.5)), // peak season
            (8, dec!(1.5)), // peak season
            (9, dec!(1.1)),
            (10, dec!(0.85)),
            (11, dec!(0.7)),
            (12, dec!(0.75)),
        ]
        .into_iter()
        .collect();

        Self {
            weekday: dec!(80),
            weekend: dec!(120),
            sunday: dec!(90),
            monthly_multipliers,
        }
    }
}

impl PricingConfig {
    /// Multiplier for a month, 1.0 when the month has no entry.
    pub fn multiplier(&self, month: u32) -> Decimal {
        self.monthly_multipliers
            .get(&month)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Lowest base rate of the week, used for "from" prices.
    pub fn lowest_base_rate(&self) -> Decimal {
        self.weekday.min(self.weekend).min(self.sunday)
    }

    /// Check the invariants of an exported/imported configuration.
    ///
    /// Collects every problem instead of stopping at the first one so the
    /// admin page can show them all at once.
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        let mut errors = Vec::new();

        for (name, rate) in [
            ("weekday", self.weekday),
            ("weekend", self.weekend),
            ("sunday", self.sunday),
        ] {
            if rate < Decimal::ZERO {
                errors.push(format!("{} rate must not be negative", name));
            } else if rate > MAX_RATE {
                errors.push(format!("{} rate must not exceed {}", name, MAX_RATE));
            }
        }

        for month in 1..=12 {
            match self.monthly_multipliers.get(&month) {
                None => errors.push(format!("missing multiplier for month {}", month)),
                Some(m) if *m <= Decimal::ZERO => {
                    errors.push(format!("multiplier for month {} must be positive", month))
                }
                Some(m) if *m > MAX_MULTIPLIER => errors.push(format!(
                    "multiplier for month {} must not exceed {}",
                    month, MAX_MULTIPLIER
                )),
                Some(_) => {}
            }
        }

        for month in self.monthly_multipliers.keys() {
            if !(1..=12).contains(month) {
                errors.push(format!("unknown month {}", month));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PricingConfigError::Invalid(errors))
        }
    }
}

/// Errors raised while loading or validating a pricing configuration.
#[derive(Debug, thiserror::Error)]
pub enum PricingConfigError {
    #[error("invalid pricing configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("failed to read pricing configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse pricing configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_multiplier_defaults_to_one() {
        let mut config = PricingConfig::default();
        config.monthly_multipliers.remove(&3);
        assert_eq!(config.multiplier(3), Decimal::ONE);
        assert_eq!(config.multiplier(7), dec!(1.5));
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let mut config = PricingConfig::default();
        config.monthly_multipliers.remove(&2);
        config.monthly_multipliers.insert(5, dec!(0));
        config.monthly_multipliers.insert(13, dec!(1));
        config.sunday = dec!(-1);

        let err = config.validate().unwrap_err();
        match err {
            PricingConfigError::Invalid(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| e.contains("month 2")));
                assert!(errors.iter().any(|e| e.contains("month 5")));
                assert!(errors.iter().any(|e| e.contains("month 13")));
                assert!(errors.iter().any(|e| e.contains("sunday")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_bounds_rates_and_multipliers() {
        let mut config = PricingConfig::default();
        config.weekday = Decimal::MAX;
        config.monthly_multipliers.insert(7, dec!(10.5));

        let Err(PricingConfigError::Invalid(errors)) = config.validate() else {
            panic!("expected validation errors");
        };
        assert_eq!(
            errors,
            vec![
                "weekday rate must not exceed 100000".to_string(),
                "multiplier for month 7 must not exceed 10".to_string(),
            ]
        );

        // Largest accepted values still price without overflow
        config.weekday = MAX_RATE;
        config.monthly_multipliers.insert(7, MAX_MULTIPLIER);
        assert!(config.validate().is_ok());
        let monday = chrono::NaiveDate::from_ymd_opt(2025, 7, 7).unwrap();
        assert_eq!(
            crate::pricing::nightly_rate(monday, &config),
            dec!(1000000)
        );
    }

    #[test]
    fn test_export_shape() {
        let json = serde_json::to_value(PricingConfig::default()).unwrap();
        assert_eq!(json["weekday"].as_f64(), Some(80.0));
        assert_eq!(json["monthlyMultipliers"]["7"].as_f64(), Some(1.5));
        assert_eq!(json["monthlyMultipliers"].as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_parse_exported_file() {
        let raw = r#"{
            "weekday": 85, "weekend": 130, "sunday": 95,
            "monthlyMultipliers": {"1": 0.7, "2": 0.7, "3": 0.8, "4": 0.9, "5": 1,
              "6": 1.2, "7": 1.6, "8": 1.6, "9": 1.1, "10": 0.85, "11": 0.7, "12": 0.75}
        }"#;
        let config: PricingConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.weekend, dec!(130));
        assert_eq!(config.multiplier(7), dec!(1.6));
        assert!(config.validate().is_ok());
    }
}
