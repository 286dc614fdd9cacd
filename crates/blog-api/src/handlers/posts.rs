//! Post handlers

use axum::extract::State;
use blog_service::dto::{CreatePostRequest, PostDetailResponse, PostResponse, UpdatePostRequest};
use blog_service::{PostService, ServiceError};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<ApiResponse<Vec<PostResponse>>> {
    let posts = PostService::new(state.service_context()).list_posts().await?;
    let message = if posts.is_empty() {
        "No posts yet"
    } else {
        "Posts retrieved"
    };
    Ok(ApiResponse::ok(message, posts))
}

/// GET /api/posts/latest
pub async fn latest_post(State(state): State<AppState>) -> ApiResult<ApiResponse<PostResponse>> {
    let post = PostService::new(state.service_context())
        .latest_post()
        .await?
        .ok_or_else(|| ServiceError::not_found("Post", "latest"))?;
    Ok(ApiResponse::ok("Latest post retrieved", post))
}

/// GET /api/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<ApiResponse<PostDetailResponse>> {
    let post = PostService::new(state.service_context()).get_post(post_id).await?;
    Ok(ApiResponse::ok("Post retrieved", post))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post = PostService::new(state.service_context())
        .create_post(auth.user_id, request)
        .await?;
    Ok(ApiResponse::created("Post created", post))
}

/// PUT /api/posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post = PostService::new(state.service_context())
        .update_post(post_id, auth.user_id, request)
        .await?;
    Ok(ApiResponse::ok("Post updated", post))
}

/// DELETE /api/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    PostService::new(state.service_context())
        .delete_post(post_id, auth.user_id)
        .await?;
    Ok(ApiResponse::message("Post deleted"))
}
