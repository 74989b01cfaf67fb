//! HTTP-level integration tests for the `/api/historical-timeline`
//! endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: events come back in non-decreasing date order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_is_sorted_ascending_by_date(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/historical-timeline").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 4);

    let dates: Vec<&str> = events.iter().map(|e| e["date"].as_str().unwrap()).collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}

// ---------------------------------------------------------------------------
// Test: category filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_filters_by_category(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/historical-timeline?category=political").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e["category"] == "political"));
}

// ---------------------------------------------------------------------------
// Test: POST /api/historical-timeline
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_historical_event(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/historical-timeline",
        json!({
            "date": "1964-07-24",
            "title": "Decretul de grațiere",
            "description": "Ultimii deținuți politici sunt eliberați prin decretul 411.",
            "related_prisons": ["gherla", "aiud"],
            "category": "political"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert_eq!(json["images"], json!([]));

    // The new event slots into the sorted listing before 1989.
    let response = get(app, "/api/historical-timeline").await;
    let json = body_json(response).await;
    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates.last().copied(), Some("1989-12-21"));
    assert!(dates.contains(&"1964-07-24"));
}

// ---------------------------------------------------------------------------
// Test: an unknown category is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_historical_event_with_unknown_category_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/historical-timeline",
        json!({
            "date": "1950-01-01",
            "title": "x",
            "description": "y",
            "category": "astronomical"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
