//! Page route handlers

pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/inquiry", post(home::inquiry))
        .route("/health", get(health::health))
}
