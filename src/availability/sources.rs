//! The stages of the availability fallback chain.
//!
//! Each stage implements [`CalendarSource`]; the resolver tries them in order
//! and ends with the [`MockSource`] generator, which cannot fail.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::pricing::{direct_price_from_channel, nightly_rate, PricingConfig};

use super::feed::{availability_from_booked, booked_dates, parse_booked_ranges};
use super::models::{
    AvailabilityEntry, AvailabilityError, AvailabilitySource, AvailabilityWindow,
};

/// One stage of the fallback chain.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    fn kind(&self) -> AvailabilitySource;

    /// Produce exactly one entry per window day, or fail.
    async fn fetch(
        &self,
        window: AvailabilityWindow,
        pricing: &PricingConfig,
    ) -> Result<Vec<AvailabilityEntry>, AvailabilityError>;
}

/// Booked ranges from the channel manager's iCal export.
pub struct IcalFeedSource {
    client: reqwest::Client,
    url: Option<String>,
}

impl IcalFeedSource {
    pub fn new(client: reqwest::Client, url: Option<String>) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl CalendarSource for IcalFeedSource {
    fn kind(&self) -> AvailabilitySource {
        AvailabilitySource::Feed
    }

    async fn fetch(
        &self,
        window: AvailabilityWindow,
        pricing: &PricingConfig,
    ) -> Result<Vec<AvailabilityEntry>, AvailabilityError> {
        let url = self
            .url
            .as_deref()
            .ok_or(AvailabilityError::NotConfigured("calendar feed URL"))?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(AvailabilityError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;

        let ranges = parse_booked_ranges(&body)?;
        debug!("Calendar feed returned {} booked ranges", ranges.len());

        let booked = booked_dates(&ranges);
        Ok(availability_from_booked(window, &booked, pricing))
    }
}

/// Body of the secondary availability API.
#[derive(Debug, Deserialize)]
pub struct ApiAvailabilityResponse {
    pub availabilities: Vec<ApiAvailabilityItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAvailabilityItem {
    pub date: NaiveDate,
    pub available: bool,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub website_price: Option<Decimal>,
    /// Channel price; the direct price is derived from it when nothing else is given
    #[serde(default)]
    pub booking_com_price: Option<Decimal>,
}

impl ApiAvailabilityItem {
    fn direct_price(&self, pricing: &PricingConfig) -> Decimal {
        self.price
            .or(self.website_price)
            .or_else(|| self.booking_com_price.map(direct_price_from_channel))
            .unwrap_or_else(|| nightly_rate(self.date, pricing))
    }
}

/// Project an API response onto the window.
///
/// Window days the response does not mention are reported unavailable; a
/// response that misses the window entirely is an error.
pub fn project_api_response(
    response: ApiAvailabilityResponse,
    window: AvailabilityWindow,
    pricing: &PricingConfig,
) -> Result<Vec<AvailabilityEntry>, AvailabilityError> {
    let by_date: HashMap<NaiveDate, ApiAvailabilityItem> = response
        .availabilities
        .into_iter()
        .filter(|item| window.contains(item.date))
        .map(|item| (item.date, item))
        .collect();

    if by_date.is_empty() {
        return Err(AvailabilityError::OutOfWindow);
    }

    Ok(window
        .dates()
        .map(|date| match by_date.get(&date) {
            Some(item) if item.available => {
                AvailabilityEntry::available(date, item.direct_price(pricing))
            }
            _ => AvailabilityEntry::booked(date),
        })
        .collect())
}

/// Secondary JSON API (`GET /api/availability` shape).
pub struct JsonApiSource {
    client: reqwest::Client,
    url: Option<String>,
}

impl JsonApiSource {
    pub fn new(client: reqwest::Client, url: Option<String>) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl CalendarSource for JsonApiSource {
    fn kind(&self) -> AvailabilitySource {
        AvailabilitySource::Api
    }

    async fn fetch(
        &self,
        window: AvailabilityWindow,
        pricing: &PricingConfig,
    ) -> Result<Vec<AvailabilityEntry>, AvailabilityError> {
        let url = self
            .url
            .as_deref()
            .ok_or(AvailabilityError::NotConfigured("availability API URL"))?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(AvailabilityError::Status(response.status().as_u16()));
        }
        let body: ApiAvailabilityResponse = response.json().await?;

        project_api_response(body, window, pricing)
    }
}

/// Share of generated days that are available.
const MOCK_AVAILABILITY_RATE: f64 = 0.7;

/// Procedurally generated availability, the last resort.
#[derive(Debug, Default)]
pub struct MockSource;

impl MockSource {
    /// ~70% of days available, channel price in 100..=199 with the direct discount.
    pub fn generate<R: Rng>(
        window: AvailabilityWindow,
        rng: &mut R,
    ) -> Vec<AvailabilityEntry> {
        window
            .dates()
            .map(|date| {
                let channel_price = Decimal::from(rng.gen_range(100..=199u32));
                if rng.gen_bool(MOCK_AVAILABILITY_RATE) {
                    AvailabilityEntry::available(date, direct_price_from_channel(channel_price))
                } else {
                    AvailabilityEntry::booked(date)
                }
            })
            .collect()
    }
}

#[async_trait]
impl CalendarSource for MockSource {
    fn kind(&self) -> AvailabilitySource {
        AvailabilitySource::Mock
    }

    async fn fetch(
        &self,
        window: AvailabilityWindow,
        _pricing: &PricingConfig,
    ) -> Result<Vec<AvailabilityEntry>, AvailabilityError> {
        Ok(Self::generate(window, &mut rand::thread_rng()))
    }
}
