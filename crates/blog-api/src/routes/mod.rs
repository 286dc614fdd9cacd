//! Route definitions
//!
//! Service-info routes at the root, API routes under `/api`. Protected routes
//! sit behind the bearer-token gate; the rest are public.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, comments, health, posts};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api", public_routes().merge(protected_routes(state)))
        .fallback(health::not_found)
}

/// Welcome, liveness and readiness
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Routes reachable without a token
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/posts", get(posts::list_posts))
        .route("/posts/latest", get(posts::latest_post))
        .route("/posts/:id", get(posts::get_post))
        .route("/posts/:id/comments", get(comments::list_comments))
        .route("/posts/:id/comments/tree", get(comments::comment_tree))
        .route("/comments/:id", get(comments::get_comment))
}

/// Routes requiring a verified bearer token
///
/// The gate wraps each method router's routes only, so an unsupported method
/// on a shared path still answers 405 instead of 401.
fn protected_routes(state: &AppState) -> Router<AppState> {
    let gate = middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/me", get(auth::me).route_layer(gate.clone()))
        .route("/posts", post(posts::create_post).route_layer(gate.clone()))
        .route(
            "/posts/:id",
            put(posts::update_post)
                .delete(posts::delete_post)
                .route_layer(gate.clone()),
        )
        .route(
            "/posts/:id/comments",
            post(comments::create_comment).route_layer(gate.clone()),
        )
        .route(
            "/comments/:id",
            put(comments::update_comment)
                .delete(comments::delete_comment)
                .route_layer(gate),
        )
}
