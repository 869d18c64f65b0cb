//! HTTP API tests over the real HikerAPI client and a mock provider

use account_check::server::{router, AppState};
use account_check::testing::RecordingDelay;
use account_check::HikerClient;
use account_check_tests::{mount_profile, profile_body, provider_config};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::{MockServer, ResponseTemplate};

async fn app(server: &MockServer, delay: RecordingDelay) -> Router {
    mount_profile(
        server,
        "alice",
        ResponseTemplate::new(200).set_body_json(profile_body(123, "Alice")),
    )
    .await;
    mount_profile(server, "ghost_user_000", ResponseTemplate::new(404)).await;

    let client = HikerClient::new(&provider_config(server)).unwrap();
    router(AppState::new(client, delay, "https://instagram.com"))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn check_multiple(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/check-multiple")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_single_check_live_and_missing() {
    let server = MockServer::start().await;
    let app = app(&server, RecordingDelay::new(Duration::ZERO)).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/check/alice").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "LIVE");
    assert_eq!(body["user_info"]["full_name"], "Alice");
    assert_eq!(body["user_info"]["follower_count"], 10);
    assert_eq!(
        body["user_info"]["profile_pic"],
        "https://cdn.example.com/123.jpg"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/check/ghost_user_000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["status"], "NOT_AVAILABLE");
    assert_eq!(body["is_live"], false);
    assert_eq!(body["error"], "account does not exist or is not available");
}

#[tokio::test]
async fn test_multiple_check_pauses_between_lookups() {
    let server = MockServer::start().await;
    let delay = RecordingDelay::new(Duration::ZERO);
    let app = app(&server, delay.clone()).await;

    let response = app
        .oneshot(check_multiple(json!({
            "usernames": ["alice", "ghost_user_000", "@alice"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total_checked"], 3);
    assert_eq!(body["live_count"], 2);
    assert_eq!(body["dead_count"], 1);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
    assert_eq!(body["results"][2]["username"], "alice");
    assert_eq!(delay.count(), 2);
}

#[tokio::test]
async fn test_multiple_check_without_usernames_makes_no_lookups() {
    let server = MockServer::start().await;
    let delay = RecordingDelay::new(Duration::ZERO);
    let app = app(&server, delay.clone()).await;

    let response = app
        .oneshot(check_multiple(json!({ "usernames": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({"error": "no usernames provided"}));
    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(delay.count(), 0);
}
