//! Comment handlers

use axum::extract::State;
use blog_service::dto::{
    CommentResponse, CommentTreeResponse, CreateCommentRequest, UpdateCommentRequest,
};
use blog_service::CommentService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

const NO_COMMENTS: &str = "No comments yet";

/// GET /api/posts/:id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<ApiResponse<Vec<CommentResponse>>> {
    let comments = CommentService::new(state.service_context())
        .list_comments(post_id)
        .await?;
    let message = if comments.is_empty() {
        NO_COMMENTS
    } else {
        "Comments retrieved"
    };
    Ok(ApiResponse::ok(message, comments))
}

/// GET /api/posts/:id/comments/tree
pub async fn comment_tree(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<ApiResponse<Vec<CommentTreeResponse>>> {
    let tree = CommentService::new(state.service_context())
        .comment_tree(post_id)
        .await?;
    let message = if tree.is_empty() {
        NO_COMMENTS
    } else {
        "Comment tree retrieved"
    };
    Ok(ApiResponse::ok(message, tree))
}

/// GET /api/comments/:id
pub async fn get_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath,
) -> ApiResult<ApiResponse<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .get_comment(comment_id)
        .await?;
    Ok(ApiResponse::ok("Comment retrieved", comment))
}

/// POST /api/posts/:id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<ApiResponse<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .create_comment(post_id, Some(auth.user_id), request)
        .await?;
    Ok(ApiResponse::created("Comment created", comment))
}

/// PUT /api/comments/:id
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<ApiResponse<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .update_comment(comment_id, auth.user_id, request)
        .await?;
    Ok(ApiResponse::ok("Comment updated", comment))
}

/// DELETE /api/comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    CommentService::new(state.service_context())
        .delete_comment(comment_id, auth.user_id)
        .await?;
    Ok(ApiResponse::message("Comment deleted"))
}
