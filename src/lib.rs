//! Apartamento Itaca website: marketing pages, availability calendar,
//! booking inquiries and the pricing export tool.

pub mod availability;
pub mod booking;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::{http::Method, Router};
use chrono::{Local, NaiveDate};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::availability::{AvailabilityResolver, ResolvedAvailability};
use crate::booking::EmailRelay;
use crate::cache::AppCache;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::pricing::PricingConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pricing: Arc<PricingConfig>,
    pub cache: AppCache,
    pub resolver: Arc<AvailabilityResolver>,
    pub relay: Arc<dyn EmailRelay>,
    /// Pins "today"; `None` uses the local date
    pub fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        pricing: Arc<PricingConfig>,
        resolver: Arc<AvailabilityResolver>,
        relay: Arc<dyn EmailRelay>,
    ) -> Self {
        let cache = AppCache::new(config.availability.cache_ttl);
        Self {
            config: Arc::new(config),
            pricing,
            cache,
            resolver,
            relay,
            fixed_today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Cached availability window starting at `today`
    pub async fn availability(&self, today: NaiveDate) -> Arc<ResolvedAvailability> {
        self.cache.availability(&self.resolver, today).await
    }
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let api_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let api = Router::new()
        .merge(availability::router())
        .merge(pricing::router())
        .layer(api_cors);

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .merge(routes::router())
        .merge(api)
        .merge(pricing::admin_router())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
