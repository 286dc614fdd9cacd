//! Bearer-token gate for protected routes

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::warn;

use crate::extractors::AuthUser;
use crate::response::ApiError;
use crate::state::AppState;

/// Verify `Authorization: Bearer <token>` and attach the caller as [`AuthUser`]
///
/// Any failure answers 401 before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(Authorization(bearer)) = request.headers().typed_get::<Authorization<Bearer>>()
    else {
        return Err(ApiError::MissingAuth);
    };

    let claims = state.jwt_service().verify(bearer.token()).map_err(|e| {
        warn!(error = %e, "Rejected bearer token");
        ApiError::from(e)
    })?;
    let user_id = claims.user_id()?;

    request
        .extensions_mut()
        .insert(AuthUser::new(user_id, claims.username));

    Ok(next.run(request).await)
}
