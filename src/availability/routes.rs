//! JSON availability endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

use super::models::{AvailabilityEntry, AvailabilitySource};

/// Body of `GET /api/availability`
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub availabilities: Vec<AvailabilityEntry>,
    pub source: AvailabilitySource,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/availability", get(list))
}

/// The current 90-day window.
async fn list(State(state): State<AppState>) -> Json<AvailabilityResponse> {
    let resolved = state.availability(state.today()).await;

    Json(AvailabilityResponse {
        availabilities: resolved.entries.clone(),
        source: resolved.source,
    })
}
