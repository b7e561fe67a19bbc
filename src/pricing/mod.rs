//! Pricing engine for Apartamento Itaca.
//!
//! Nightly rates come from a day-of-week base rate scaled by a monthly
//! multiplier. The active configuration is loaded once at startup; the admin
//! page only produces a new `pricing-config.json` to deploy.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{direct_price_from_channel, nightly_rate, price_range, round_whole, StayPrice};
pub use models::{PricingConfig, PricingConfigError};
pub use routes::{admin_router, router};
pub use services::{load_pricing_config, quote_stay, QuoteError, MAX_STAY_NIGHTS};
