//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::StayPrice;

/// One night of a quote
#[derive(Debug, Clone, Serialize)]
pub struct NightPriceResponse {
    pub date: NaiveDate,
    pub price: Decimal,
}

/// Response for `GET /api/pricing/quote`
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: usize,
    pub total: Decimal,
    pub per_night: Vec<NightPriceResponse>,
    pub currency: &'static str,
}

impl QuoteResponse {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, stay: StayPrice) -> Self {
        Self {
            check_in,
            check_out,
            nights: stay.per_night.len(),
            total: stay.total,
            per_night: stay
                .per_night
                .into_iter()
                .map(|n| NightPriceResponse {
                    date: n.date,
                    price: n.price,
                })
                .collect(),
            currency: "EUR",
        }
    }
}
