//! Loading the deployed pricing configuration and building quotes.
//!
//! The configuration is read once at startup. Changing prices means replacing
//! `pricing-config.json` (exported from the admin page) and restarting.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::calculators::{price_range, StayPrice};
use super::models::{PricingConfig, PricingConfigError};

/// Load the pricing configuration from `path`.
///
/// A missing file falls back to [`PricingConfig::default`]; a file that exists
/// but fails to parse or validate is an error.
pub fn load_pricing_config(path: &Path) -> Result<PricingConfig, PricingConfigError> {
    if !path.exists() {
        warn!(
            "Pricing config {} not found, using built-in default rates",
            path.display()
        );
        return Ok(PricingConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;
    let config: PricingConfig = serde_json::from_str(&raw)?;
    config.validate()?;

    info!(
        "Loaded pricing config from {} (weekday {}, weekend {}, sunday {})",
        path.display(),
        config.weekday,
        config.weekend,
        config.sunday
    );

    Ok(config)
}

/// Longest stay that can be quoted or requested.
pub const MAX_STAY_NIGHTS: i64 = 365;

/// Quote a stay, rejecting empty, inverted or overlong ranges.
pub fn quote_stay(
    check_in: NaiveDate,
    check_out: NaiveDate,
    config: &PricingConfig,
) -> Result<StayPrice, QuoteError> {
    if check_out <= check_in {
        return Err(QuoteError::InvalidRange {
            check_in,
            check_out,
        });
    }
    let nights = (check_out - check_in).num_days();
    if nights > MAX_STAY_NIGHTS {
        return Err(QuoteError::TooLong {
            nights,
            max: MAX_STAY_NIGHTS,
        });
    }
    Ok(price_range(check_in, check_out, config))
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("stay of {nights} nights exceeds the {max}-night limit")]
    TooLong { nights: i64, max: i64 },
}
