//! HTTP API tests, driven through the router without binding a socket

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use promptcraft::server::{self, AppState};

fn app() -> Router {
    let details = json!({
        "claude": { "strengths": ["long context"] },
        "gpt": { "strengths": ["general purpose"] }
    });
    server::router(Arc::new(AppState::new(details)))
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let res = app().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_optimize(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/optimize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let res = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_lists_six_tools() {
    let (status, body) = send(get("/tools")).await;
    assert_eq!(status, StatusCode::OK);

    let tools = body.as_array().unwrap();
    assert_eq!(tools.len(), 6);
    assert_eq!(tools[0]["id"], "copilot");
    assert_eq!(tools[5]["name"], "GPT-4 (OpenAI)");
}

#[tokio::test]
async fn test_tool_details_pass_through() {
    let (status, body) = send(get("/tool_details")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["claude"]["strengths"][0], "long context");
}

#[tokio::test]
async fn test_optimize_success() {
    let (status, body) = send(post_optimize(json!({
        "prompt": "Build a database for my app",
        "tool": "codewhisperer"
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["originalPrompt"], "Build a database for my app");
    assert_eq!(body["tool"], "codewhisperer");
    assert_eq!(body["analysis"]["intent"], "project_creation");
    assert!(body["optimizedText"]
        .as_str()
        .unwrap()
        .starts_with("# AWS Context:"));

    let explanation = &body["explanation"];
    assert_eq!(explanation["toolName"], "Amazon CodeWhisperer");
    assert_eq!(explanation["steps"].as_array().unwrap().len(), 3);
    assert!(explanation["capabilities"]["bestFor"].is_array());
}

#[tokio::test]
async fn test_optimize_missing_prompt() {
    let (status, body) = send(post_optimize(json!({ "tool": "claude" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing prompt or tool selection");

    let (status, _) = send(post_optimize(json!({ "prompt": "sort a list", "tool": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_optimize_unknown_tool() {
    let (status, body) = send(post_optimize(json!({
        "prompt": "sort a list",
        "tool": "not-a-real-tool"
    })))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Unsupported tool selected"));
}

#[tokio::test]
async fn test_optimize_whitespace_prompt() {
    let (status, body) = send(post_optimize(json!({ "prompt": "   ", "tool": "gpt" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Prompt is empty");
}

#[tokio::test]
async fn test_optimize_malformed_body() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/optimize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{prompt:"))
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/optimize")
        .body(Body::from("prompt=hi&tool=gpt"))
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
