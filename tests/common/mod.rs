//! Shared fixtures for router tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use tower::ServiceExt;

use itaca_web::{
    availability::{
        AvailabilityEntry, AvailabilityError, AvailabilityResolver, AvailabilitySource,
        AvailabilityWindow, CalendarSource,
    },
    booking::{EmailRelay, Inquiry, RelayError},
    build_router,
    config::AppConfig,
    pricing::{nightly_rate, PricingConfig},
    AppState,
};

/// A Monday
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Feed stand-in: the given dates are booked, every other day is open.
pub struct BookedDates(pub Vec<NaiveDate>);

#[async_trait]
impl CalendarSource for BookedDates {
    fn kind(&self) -> AvailabilitySource {
        AvailabilitySource::Feed
    }

    async fn fetch(
        &self,
        window: AvailabilityWindow,
        pricing: &PricingConfig,
    ) -> Result<Vec<AvailabilityEntry>, AvailabilityError> {
        Ok(window
            .dates()
            .map(|d| {
                if self.0.contains(&d) {
                    AvailabilityEntry::booked(d)
                } else {
                    AvailabilityEntry::available(d, nightly_rate(d, pricing))
                }
            })
            .collect())
    }
}

/// Records every inquiry it is asked to deliver.
#[derive(Default)]
pub struct RecordingRelay {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl RecordingRelay {
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailRelay for RecordingRelay {
    async fn send(&self, _inquiry: &Inquiry) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(RelayError::Rejected {
                status: 503,
                body: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

pub fn app_with(relay: Arc<RecordingRelay>) -> (AppState, Router) {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let pricing = Arc::new(PricingConfig::default());
    let resolver = Arc::new(AvailabilityResolver::new(
        vec![Box::new(BookedDates(vec![date(2026, 10, 20), date(2026, 10, 21)]))],
        Arc::clone(&pricing),
    ));
    let state = AppState::new(config, pricing, resolver, relay).with_today(today());
    let router = build_router(state.clone());
    (state, router)
}

pub fn app() -> Router {
    app_with(Arc::new(RecordingRelay::default())).1
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
