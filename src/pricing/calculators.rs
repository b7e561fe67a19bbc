//! Core pricing calculation functions.
//!
//! Pure functions for nightly-rate math - no I/O.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::pricing::models::PricingConfig;

/// Round a money amount to whole currency units, halves away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use itaca_web::pricing::round_whole;
///
/// assert_eq!(round_whole(dec!(76.5)), dec!(77));
/// assert_eq!(round_whole(dec!(134.4)), dec!(134));
/// ```
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Base rate for the day of week before the seasonal multiplier.
pub fn base_rate(weekday: Weekday, config: &PricingConfig) -> Decimal {
    match weekday {
        Weekday::Sun => config.sunday,
        Weekday::Fri | Weekday::Sat => config.weekend,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => config.weekday,
    }
}

/// Nightly rate for a calendar date.
pub fn nightly_rate(date: NaiveDate, config: &PricingConfig) -> Decimal {
    let base = base_rate(date.weekday(), config);
    round_whole(base * config.multiplier(date.month()))
}

/// Nightly rates for a stay covering the nights of `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct StayPrice {
    pub total: Decimal,
    pub per_night: Vec<NightPrice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NightPrice {
    pub date: NaiveDate,
    pub price: Decimal,
}

/// Sum the nightly rates of every date in `[start, end)`.
///
/// An empty or inverted range yields a zero total and no nights.
pub fn price_range(start: NaiveDate, end: NaiveDate, config: &PricingConfig) -> StayPrice {
    let mut per_night = Vec::new();
    let mut date = start;
    while date < end {
        per_night.push(NightPrice {
            date,
            price: nightly_rate(date, config),
        });
        date += Duration::days(1);
    }

    let total = per_night.iter().map(|n| n.price).sum();

    StayPrice { total, per_night }
}

/// Direct-booking price derived from a channel (Booking.com) price: 20% off, rounded.
pub fn direct_price_from_channel(channel_price: Decimal) -> Decimal {
    round_whole(channel_price * Decimal::new(8, 1))
}
