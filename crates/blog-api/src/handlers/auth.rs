//! Authentication handlers
//!
//! Endpoints for registration, login and the current user.

use axum::extract::State;
use blog_service::dto::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use blog_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<ApiResponse<RegisterResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(ApiResponse::created("Registration successful", response))
}

/// Login with username and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiResponse<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(ApiResponse::ok("Login successful", response))
}

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(auth.user_id).await?;
    Ok(ApiResponse::ok("Current user", response))
}
