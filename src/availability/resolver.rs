//! Availability resolution with degrade-to-mock fallback.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::AvailabilitySettings;
use crate::pricing::PricingConfig;

use super::models::{
    AvailabilityEntry, AvailabilityError, AvailabilitySource, AvailabilityWindow,
    ResolvedAvailability,
};
use super::sources::{CalendarSource, IcalFeedSource, JsonApiSource, MockSource};

/// Tries each configured source in order and falls back to generated data.
///
/// [`AvailabilityResolver::resolve`] never fails: every stage error is logged
/// and demoted to the next stage.
pub struct AvailabilityResolver {
    sources: Vec<Box<dyn CalendarSource>>,
    pricing: Arc<PricingConfig>,
}

impl AvailabilityResolver {
    pub fn new(sources: Vec<Box<dyn CalendarSource>>, pricing: Arc<PricingConfig>) -> Self {
        Self { sources, pricing }
    }

    /// Feed first, then the JSON API, sharing one HTTP client.
    pub fn from_settings(
        settings: &AvailabilitySettings,
        pricing: Arc<PricingConfig>,
    ) -> Result<Self, reqwest::Error> {
        let client = upstream_client(settings.upstream_timeout)?;
        let sources: Vec<Box<dyn CalendarSource>> = vec![
            Box::new(IcalFeedSource::new(client.clone(), settings.feed_url.clone())),
            Box::new(JsonApiSource::new(client, settings.api_url.clone())),
        ];
        Ok(Self::new(sources, pricing))
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Availability for the 90 days starting at `today`.
    pub async fn resolve(&self, today: NaiveDate) -> ResolvedAvailability {
        let window = AvailabilityWindow::starting(today);

        for source in &self.sources {
            let kind = source.kind();
            match source.fetch(window, &self.pricing).await {
                Ok(entries) if covers_window(&entries, window) => {
                    let available = entries.iter().filter(|e| e.available).count();
                    info!(
                        "Availability from {}: {}/{} days open from {}",
                        kind,
                        available,
                        entries.len(),
                        window.start
                    );
                    return ResolvedAvailability {
                        source: kind,
                        entries,
                    };
                }
                Ok(entries) => {
                    warn!(
                        "Discarding {} result: {} entries do not match the window from {}",
                        kind,
                        entries.len(),
                        window.start
                    );
                }
                Err(AvailabilityError::NotConfigured(what)) => {
                    debug!("Skipping {}: {} is not configured", kind, what);
                }
                Err(e) => {
                    warn!("Failed to load availability from {}: {}", kind, e);
                }
            }
        }

        warn!(
            "All availability sources failed, serving {} for {}",
            AvailabilitySource::Mock,
            window.start
        );
        ResolvedAvailability {
            source: AvailabilitySource::Mock,
            entries: MockSource::generate(window, &mut rand::thread_rng()),
        }
    }
}

/// One entry per window day, in order, with price present iff available.
fn covers_window(entries: &[AvailabilityEntry], window: AvailabilityWindow) -> bool {
    entries.len() == window.days as usize
        && entries
            .iter()
            .zip(window.dates())
            .all(|(entry, date)| entry.date == date && entry.available == entry.price.is_some())
}

fn upstream_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("itaca-web/", env!("CARGO_PKG_VERSION")))
        .build()
}
