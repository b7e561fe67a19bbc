//! Pricing API and the admin export page.

use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use tracing::info;

use crate::error::{AppError, Result};
use crate::i18n::Language;
use crate::AppState;

use super::models::PricingConfig;
use super::requests::{PricingForm, QuoteQuery};
use super::responses::QuoteResponse;
use super::services::quote_stay;

const EXPORT_FILENAME: &str = "pricing-config.json";

/// JSON pricing API
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", get(quote))
        .route("/api/pricing/config", get(config))
}

/// Admin editor; unauthenticated, it only ever produces a download
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/admin/pricing", get(admin_page))
        .route("/admin/pricing/export", post(export))
}

/// Price a stay with the active configuration.
async fn quote(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<QuoteResponse>> {
    let stay = quote_stay(query.check_in, query.check_out, &state.pricing)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(QuoteResponse::new(query.check_in, query.check_out, stay)))
}

async fn config(State(state): State<AppState>) -> Json<PricingConfig> {
    Json((*state.pricing).clone())
}

/// One multiplier input on the admin page
struct MonthField {
    name: String,
    label: &'static str,
    value: String,
}

#[derive(Template)]
#[template(path = "admin/pricing.html")]
struct AdminPricingTemplate {
    weekday: String,
    weekend: String,
    sunday: String,
    months: Vec<MonthField>,
    errors: Vec<String>,
    has_errors: bool,
}

impl AdminPricingTemplate {
    fn new(form: PricingForm, errors: Vec<String>) -> Self {
        let strings = Language::En.strings();
        let months = form
            .multipliers
            .iter()
            .map(|(month, value)| MonthField {
                name: format!("month_{}", month),
                label: strings.month_name(*month),
                value: value.clone(),
            })
            .collect();

        Self {
            weekday: form.weekday,
            weekend: form.weekend,
            sunday: form.sunday,
            months,
            has_errors: !errors.is_empty(),
            errors,
        }
    }
}

/// Editor pre-filled with the active configuration
async fn admin_page(State(state): State<AppState>) -> Result<Html<String>> {
    let template = AdminPricingTemplate::new(PricingForm::from_config(&state.pricing), Vec::new());
    Ok(Html(template.render()?))
}

/// Validate the edited rates and hand them back as a download.
///
/// Nothing is applied here: the file has to be deployed and the server
/// restarted for the new rates to take effect.
async fn export(Form(fields): Form<HashMap<String, String>>) -> Result<Response> {
    let form = PricingForm::from_fields(&fields);

    match form.parse() {
        Ok(config) => {
            let body = serde_json::to_string_pretty(&config)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            info!(
                "Pricing config exported (weekday {}, weekend {}, sunday {})",
                config.weekday, config.weekend, config.sunday
            );

            Ok((
                [
                    (header::CONTENT_TYPE, "application/json".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
                    ),
                ],
                body,
            )
                .into_response())
        }
        Err(errors) => {
            tracing::debug!("Pricing export rejected: {:?}", errors);
            let template = AdminPricingTemplate::new(form, errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(template.render()?)).into_response())
        }
    }
}
