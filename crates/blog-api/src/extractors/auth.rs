//! Authenticated caller extractor
//!
//! The identity is placed in request extensions by
//! [`require_auth`](crate::middleware::auth::require_auth); this extractor
//! only reads it back.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use blog_core::Snowflake;

use crate::response::ApiError;

/// Authenticated user taken from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Snowflake,
    pub username: String,
}

impl AuthUser {
    pub fn new(user_id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::MissingAuth)
    }
}
