//! HTTP surface tests: status-code mapping and the observable core behavior
//! through the API.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use recall_core::config::RecallConfig;
use recall_core::scheduler::ReviewSchedule;
use recall_core::web::{router, AppState};

async fn test_app() -> Router {
    let pool = common::test_pool().await;
    router(AppState::new(
        pool,
        ReviewSchedule::default(),
        RecallConfig::default(),
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Create a source and a learning item anchored at 2024-01-01; returns the
/// item creation response body.
async fn seed_item(app: &Router) -> Value {
    let (status, source) = send(
        app,
        "POST",
        "/api/sources",
        Some(json!({ "title": "Linear Algebra Done Right", "category": "book" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, item) = send(
        app,
        "POST",
        "/api/learning-items",
        Some(json!({
            "source_id": source["id"],
            "title": "Eigenvalues",
            "content": "characteristic polynomial",
            "start_date": "2024-01-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    item
}

#[tokio::test]
async fn test_item_creation_returns_all_generated_checkpoints() {
    let app = test_app().await;
    let item = seed_item(&app).await;

    let tasks = item["review_tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 9);
    assert_eq!(tasks[0]["status"], "Ready");
    assert_eq!(tasks[0]["due_date"], "2024-01-01");
    assert_eq!(tasks[6]["due_date"], "2024-03-31");
    assert_eq!(tasks[8]["stage_name"], "1 year later");
    assert_eq!(tasks[8]["due_date"], "2025-01-01");
}

#[tokio::test]
async fn test_today_returns_ready_tasks_in_due_order() {
    let app = test_app().await;
    let item = seed_item(&app).await;

    let (status, tasks) = send(&app, "GET", "/api/review-tasks/today", None).await;
    assert_eq!(status, StatusCode::OK);

    // Everything anchored at 2024-01-01 is long overdue and thus promoted.
    let tasks = tasks.as_array().unwrap().clone();
    assert_eq!(tasks.len(), 9);
    for task in &tasks {
        assert_eq!(task["status"], "Ready");
    }
    let due_dates: Vec<&str> = tasks.iter().map(|t| t["due_date"].as_str().unwrap()).collect();
    let mut sorted = due_dates.clone();
    sorted.sort_unstable();
    assert_eq!(due_dates, sorted);

    let _ = item;
}

#[tokio::test]
async fn test_complete_and_uncomplete_round_trip() {
    let app = test_app().await;
    let item = seed_item(&app).await;
    let task_id = item["review_tasks"][0]["id"].as_i64().unwrap();

    let (status, completed) = send(
        &app,
        "POST",
        &format!("/api/review-tasks/{task_id}/complete"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["status"], "Completed");
    assert!(!completed["completed_at"].is_null());

    // Double completion is a client error, not a silent overwrite.
    let (status, error) = send(
        &app,
        "POST",
        &format!("/api/review-tasks/{task_id}/complete"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["detail"], "Task is already completed");

    let (status, reverted) = send(
        &app,
        "POST",
        &format!("/api/review-tasks/{task_id}/uncomplete"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reverted["status"], "Ready");
    assert!(reverted["completed_at"].is_null());
}

#[tokio::test]
async fn test_unknown_task_maps_to_not_found() {
    let app = test_app().await;

    let (status, error) = send(&app, "POST", "/api/review-tasks/9999/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["detail"], "Review task not found");

    let (status, _) = send(&app, "GET", "/api/review-tasks/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_title_validation_rejects_empty_and_oversized() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/sources",
        Some(json!({ "title": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/sources",
        Some(json!({ "title": "x".repeat(256) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_and_cascade_delete_through_the_api() {
    let app = test_app().await;
    let item = seed_item(&app).await;
    let item_id = item["id"].as_i64().unwrap();
    let source_id = item["source_id"].as_i64().unwrap();

    let (status, listing) = send(&app, "GET", "/api/learning-items?skip=0&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["items"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", &format!("/api/sources/{source_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/learning-items/{item_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, tasks) = send(&app, "GET", "/api/review-tasks/today", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(tasks.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
