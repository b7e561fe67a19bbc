mod common;

use axum::http::{header, StatusCode};
use itaca_web::pricing::PricingConfig;
use rust_decimal_macros::dec;

use common::{app, get, post_form};

#[tokio::test]
async fn availability_covers_ninety_days_from_today() {
    let response = get(app(), "/api/availability").await;
    assert_eq!(response.status, StatusCode::OK);

    let json = response.json();
    assert_eq!(json["source"], "feed");

    let days = json["availabilities"].as_array().unwrap();
    assert_eq!(days.len(), 90);
    assert_eq!(days[0]["date"], "2026-10-19");
    assert_eq!(days[89]["date"], "2027-01-16");

    // Monday in October: 80 * 0.85
    assert_eq!(days[0]["available"], true);
    assert_eq!(days[0]["price"].as_f64(), Some(68.0));

    assert_eq!(days[1]["available"], false);
    assert!(days[1].get("price").is_none());
}

#[tokio::test]
async fn availability_api_allows_cross_origin_reads() {
    let app = app();
    let request = axum::http::Request::builder()
        .uri("/api/availability")
        .header(header::ORIGIN, "https://example.org")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn quote_sums_nightly_rates() {
    let response = get(
        app(),
        "/api/pricing/quote?check_in=2025-07-03&check_out=2025-07-07",
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let json = response.json();
    assert_eq!(json["nights"], 4);
    assert_eq!(json["total"].as_f64(), Some(615.0));
    assert_eq!(json["currency"], "EUR");
    assert_eq!(json["per_night"][3]["date"], "2025-07-06");
    assert_eq!(json["per_night"][3]["price"].as_f64(), Some(135.0));
}

#[tokio::test]
async fn quote_rejects_inverted_range() {
    let response = get(
        app(),
        "/api/pricing/quote?check_in=2025-07-07&check_out=2025-07-03",
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error_type"], "bad_request");
}

#[tokio::test]
async fn quote_rejects_stays_over_a_year() {
    let response = get(
        app(),
        "/api/pricing/quote?check_in=0001-01-01&check_out=9999-12-31",
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["message"]
        .as_str()
        .unwrap()
        .contains("365-night limit"));
}

#[tokio::test]
async fn pricing_config_is_published() {
    let json = get(app(), "/api/pricing/config").await.json();
    assert_eq!(json["weekday"].as_f64(), Some(80.0));
    assert_eq!(json["monthlyMultipliers"]["7"].as_f64(), Some(1.5));
}

fn export_body(weekday: &str) -> String {
    let mut fields = vec![
        format!("weekday={}", weekday),
        "weekend=130".to_string(),
        "sunday=95".to_string(),
    ];
    for month in 1..=12 {
        fields.push(format!("month_{}=1.1", month));
    }
    fields.join("&")
}

#[tokio::test]
async fn admin_export_downloads_validated_config() {
    let response = post_form(app(), "/admin/pricing/export", &export_body("85")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"pricing-config.json\""
    );

    let exported: PricingConfig = serde_json::from_str(&response.body).unwrap();
    assert!(exported.validate().is_ok());
    assert_eq!(exported.weekday, dec!(85));
    assert_eq!(exported.multiplier(7), dec!(1.1));
    assert_eq!(exported.monthly_multipliers.len(), 12);
}

#[tokio::test]
async fn admin_export_rejects_invalid_rates() {
    let response = post_form(app(), "/admin/pricing/export", &export_body("-5")).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("weekday rate must not be negative"));
    assert!(response.headers.get(header::CONTENT_DISPOSITION).is_none());
}

#[tokio::test]
async fn admin_page_is_prefilled_with_active_rates() {
    let response = get(app(), "/admin/pricing").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="weekday" inputmode="decimal" value="80""#));
    assert!(response.body.contains(r#"name="month_7" inputmode="decimal" value="1.5""#));
}

#[tokio::test]
async fn health_reports_cached_source() {
    let (_, router) = common::app_with(Default::default());

    let before = get(router.clone(), "/health").await.json();
    assert_eq!(before["status"], "ok");
    assert!(before["cache"]["current_source"].is_null());

    get(router.clone(), "/api/availability").await;
    let after = get(router, "/health").await.json();
    assert_eq!(after["cache"]["current_source"], "feed");
    assert_eq!(after["email_relay_configured"], false);
}
