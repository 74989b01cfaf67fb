//! HTTP-level integration tests for the `/api/testimonies` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: POST /api/testimonies assigns a generated id and timestamp
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_testimony_assigns_generated_id(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/testimonies",
        json!({
            "prison_id": "gherla",
            "victim_id": "victim1",
            "text": "Frigul era mai greu de îndurat decât foamea.",
            "source": "Interviu de istorie orală",
            "year": 1993,
            "type": "audio",
            "audio_url": "https://placeholder.com/interview.mp3"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert_eq!(json["type"], "audio");
    assert!(json["created_at"].is_string());
}

// ---------------------------------------------------------------------------
// Test: filters combine as a pure conjunction
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_testimonies_filters_are_a_conjunction(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/testimonies?prison_id=pitesti&type=written").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let testimonies = json.as_array().unwrap();
    assert_eq!(testimonies.len(), 1);
    assert_eq!(testimonies[0]["prison_id"], "pitesti");
    assert_eq!(testimonies[0]["type"], "written");

    // Same prison, different type: nothing matches both.
    let response = get(app, "/api/testimonies?prison_id=pitesti&type=video").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: no filters returns the whole collection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_testimonies_without_filters(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/testimonies").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Test: an unknown testimony type is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_testimony_with_unknown_type_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/testimonies",
        json!({
            "text": "x",
            "source": "y",
            "year": 1950,
            "type": "telepathic"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
