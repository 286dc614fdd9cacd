//! Service info and health check handlers
//!
//! Endpoints for the welcome page, liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use blog_service::dto::{HealthResponse, ReadinessResponse};
use serde::Serialize;

use crate::response::{ApiError, ApiResponse, Envelope};
use crate::state::AppState;

/// Service name and the endpoints it serves
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub name: String,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

const ENDPOINTS: &[&str] = &[
    "GET /health",
    "GET /health/ready",
    "POST /api/register",
    "POST /api/login",
    "GET /api/me",
    "GET /api/posts",
    "GET /api/posts/latest",
    "GET /api/posts/:id",
    "POST /api/posts",
    "PUT /api/posts/:id",
    "DELETE /api/posts/:id",
    "GET /api/posts/:id/comments",
    "GET /api/posts/:id/comments/tree",
    "POST /api/posts/:id/comments",
    "GET /api/comments/:id",
    "PUT /api/comments/:id",
    "DELETE /api/comments/:id",
];

/// GET /
pub async fn welcome(State(state): State<AppState>) -> ApiResponse<WelcomeResponse> {
    ApiResponse::ok(
        format!("Welcome to {}", state.config().app.name),
        WelcomeResponse {
            name: state.config().app.name.clone(),
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ENDPOINTS.to_vec(),
        },
    )
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> ApiResponse<HealthResponse> {
    ApiResponse::ok("OK", HealthResponse::healthy())
}

/// Readiness check with storage health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let storage_healthy = state.service_context().storage_healthy().await;
    let response = ReadinessResponse::ready(storage_healthy);

    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = Envelope {
        code: status.as_u16(),
        message: if response.is_ready() { "Ready" } else { "Not ready" }.to_string(),
        data: Some(response),
    };

    (status, Json(body))
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
