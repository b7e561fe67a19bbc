//! Apartamento Itaca web server

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itaca_web::{
    availability::AvailabilityResolver,
    booking::HttpEmailRelay,
    build_router,
    cache::start_cache_warmer,
    config::AppConfig,
    pricing::load_pricing_config,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itaca_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let pricing = Arc::new(
        load_pricing_config(&config.pricing_config_path).with_context(|| {
            format!(
                "invalid pricing config at {}",
                config.pricing_config_path.display()
            )
        })?,
    );

    if config.availability.feed_url.is_none() && config.availability.api_url.is_none() {
        warn!("No availability feed or API configured, the calendar will show generated data");
    }
    if !config.email.is_configured() {
        warn!("E-mail relay credentials missing, booking inquiries will fail");
    }

    let resolver = Arc::new(
        AvailabilityResolver::from_settings(&config.availability, Arc::clone(&pricing))
            .context("failed to build upstream HTTP client")?,
    );

    let relay_client = reqwest::Client::builder()
        .timeout(config.availability.upstream_timeout)
        .build()
        .context("failed to build e-mail relay client")?;
    let relay = Arc::new(HttpEmailRelay::new(relay_client, config.email.clone()));

    let addr = config.bind_addr()?;
    let warm_every = config.availability.cache_ttl;
    let state = AppState::new(config, pricing, Arc::clone(&resolver), relay);

    // Keep today's window resolved ahead of visitors
    tokio::spawn(start_cache_warmer(state.cache.clone(), resolver, warm_every));

    let app = build_router(state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
