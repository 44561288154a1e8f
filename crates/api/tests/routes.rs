//! Integration test: drives the router in-process.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use luach_api::{AppState, BANNER, router};
use luach_calendar::{CalendarError, GregorianDate};
use luach_catalog::Catalog;
use luach_parasha::Rite;
use serde_json::{Value, json};
use tower::ServiceExt;

fn simchat_torah_week() -> Result<GregorianDate, CalendarError> {
    GregorianDate::new(2023, 10, 14)
}

fn broken_clock() -> Result<GregorianDate, CalendarError> {
    GregorianDate::new(10_000, 1, 1)
}

fn state(rite: Rite) -> AppState {
    let catalog = Catalog::from_reader(
        "name,category,location\nTahine,Mercearia,Centro\nMel,Doces,Papicu\n".as_bytes(),
    )
    .unwrap();
    AppState::new(catalog, rite).with_clock(simchat_torah_week)
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router(state.shared())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(state, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn homepage_banner() {
    let (status, body) = get(state(Rite::Diaspora), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), BANNER);
}

#[tokio::test]
async fn products_list() {
    let (status, body) = get_json(state(Rite::Diaspora), "/api/produtos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"name": "Tahine", "category": "Mercearia", "location": "Centro"},
            {"name": "Mel", "category": "Doces", "location": "Papicu"},
        ])
    );
}

#[tokio::test]
async fn date_uses_clock() {
    let (status, body) = get_json(state(Rite::Diaspora), "/api/date").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "gregorian": "2023-10-14",
            "hebrew": {"year": 5784, "month": 1, "day": 29, "monthName": "Tishrei"},
        })
    );
}

#[tokio::test]
async fn date_override_in_leap_year() {
    let (status, body) = get_json(state(Rite::Diaspora), "/api/date?date=2024-03-11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gregorian"], "2024-03-11");
    assert_eq!(
        body["hebrew"],
        json!({"year": 5784, "month": 7, "day": 1, "monthName": "Adar II"})
    );
}

#[tokio::test]
async fn parashat_uses_clock() {
    let (status, body) = get_json(state(Rite::Diaspora), "/api/parashat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"hebrewName": "בראשית", "transliteratedName": "Bereshit"})
    );
}

#[tokio::test]
async fn parashat_follows_rite() {
    let uri = "/api/parashat?date=2023-07-01";
    let (_, diaspora) = get_json(state(Rite::Diaspora), uri).await;
    let (_, israel) = get_json(state(Rite::Israel), uri).await;
    assert_eq!(diaspora["transliteratedName"], "Chukat-Balak");
    assert_eq!(israel["transliteratedName"], "Balak");
}

#[tokio::test]
async fn parashat_on_sukkot() {
    let (status, body) = get_json(state(Rite::Diaspora), "/api/parashat?date=2024-10-17").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transliteratedName"], "Sukkot");
}

#[tokio::test]
async fn malformed_date_is_bad_request() {
    for uri in [
        "/api/date?date=tomorrow",
        "/api/date?date=2023-02-30",
        "/api/parashat?date=2023-13-01",
        "/api/date?date=2023-1-5",
        "/api/date?date=2023-01-01&date=2023-01-02",
        "/api/parashat?date=2023-01-01&date=2023-01-02",
    ] {
        let (status, body) = get_json(state(Rite::Diaspora), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": "InvalidDate"}), "{uri}");
    }
}

#[tokio::test]
async fn parashat_outside_supported_years() {
    let (status, body) = get_json(state(Rite::Diaspora), "/api/parashat?date=1850-06-01").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "UnsupportedDateRange"}));
}

#[tokio::test]
async fn failing_clock_is_server_error() {
    let state = state(Rite::Diaspora).with_clock(broken_clock);
    let (status, body) = get_json(state, "/api/date").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "UnsupportedDateRange"}));
}

#[tokio::test]
async fn responses_are_json() {
    let response = router(state(Rite::Diaspora).shared())
        .oneshot(Request::builder().uri("/api/date").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get(state(Rite::Diaspora), "/produtos").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
