//! Liveness endpoint

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::cache::CacheStats;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub today: NaiveDate,
    pub email_relay_configured: bool,
    pub cache: CacheStats,
}

/// Does not trigger an upstream fetch; `cache.current_source` is `null`
/// until today's window has been resolved.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let today = state.today();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        today,
        email_relay_configured: state.config.email.is_configured(),
        cache: state.cache.stats(today).await,
    })
}
