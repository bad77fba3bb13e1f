//! HTTP API
//!
//! - POST /optimize      {prompt, tool} -> optimized prompt + analysis + trace
//! - GET  /tools         tool picker metadata
//! - GET  /tool_details  extended tool analysis, passed through verbatim
//! - GET  /health

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::registry::{self, ToolInfo};
use crate::OptimizeReport;

// ═══════════════════════════════════════════════════════════════
// API TYPES
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub tool: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub original_prompt: String,
    #[serde(flatten)]
    pub report: OptimizeReport,
}

/// Error body: `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

// ═══════════════════════════════════════════════════════════════
// SERVER STATE
// ═══════════════════════════════════════════════════════════════

pub struct AppState {
    tool_analysis: serde_json::Value,
}

impl AppState {
    pub fn new(tool_analysis: serde_json::Value) -> Self {
        Self { tool_analysis }
    }
}

// ═══════════════════════════════════════════════════════════════
// HANDLERS
// ═══════════════════════════════════════════════════════════════

async fn health() -> &'static str {
    "ok"
}

async fn list_tools() -> Json<Vec<ToolInfo>> {
    Json(registry::tools())
}

async fn tool_details(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.tool_analysis.clone())
}

async fn optimize_prompt(
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!(error = %e, "unreadable optimize request");
        ApiError::bad_request(e.body_text())
    })?;

    if req.prompt.is_empty() || req.tool.is_empty() {
        return Err(ApiError::bad_request("Missing prompt or tool selection"));
    }

    let report = crate::optimize(&req.tool, &req.prompt).map_err(|e| {
        tracing::warn!(tool = %req.tool, error = %e, "rejected optimize request");
        ApiError::bad_request(e.to_string())
    })?;

    Ok(Json(OptimizeResponse {
        original_prompt: req.prompt,
        report,
    }))
}

// ═══════════════════════════════════════════════════════════════
// ROUTER
// ═══════════════════════════════════════════════════════════════

pub fn router(state: Arc<AppState>) -> Router {
    // The web UI may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/tool_details", get(tool_details))
        .route("/optimize", post(optimize_prompt))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
