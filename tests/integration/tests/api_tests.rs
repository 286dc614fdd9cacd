//! API Integration Tests
//!
//! Each test spawns the server on an ephemeral port over a fresh in-memory
//! store, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_envelope, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

async fn register_and_login(server: &TestServer) -> (RegisterRequest, LoginResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: LoginResponse = assert_data(response, StatusCode::OK).await.unwrap();
    (request, login)
}

async fn create_post(server: &TestServer, token: &str, title: &str) -> PostResponse {
    let response = server
        .post_auth("/api/posts", token, &PostRequest::new(title, "body text"))
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/").await.unwrap();
    let welcome: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(welcome["endpoints"].is_array());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/register", &request).await.unwrap();
    let registered: RegisterResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.username, request.username);
    assert_eq!(registered.email, request.email);

    let response = server
        .post("/api/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: LoginResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user_id, registered.user_id);
    assert_eq!(login.username, request.username);
    assert_eq!(login.token_type, "Bearer");
    assert_eq!(login.expires_in, 86_400);
    assert!(!login.token.is_empty());

    let response = server.get_auth("/api/me", &login.token).await.unwrap();
    let me: CurrentUserResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.user_id, registered.user_id);
    assert_eq!(me.email, request.email);
    assert_eq!(me.nickname, None);
}

#[tokio::test]
async fn test_register_duplicates_conflict() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/register", &request).await.unwrap();

    let mut same_name = RegisterRequest::unique();
    same_name.username = request.username.clone();
    let response = server.post("/api/register", &same_name).await.unwrap();
    let envelope = assert_envelope::<Value>(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(envelope.message, "Username already taken");

    let mut same_email = RegisterRequest::unique();
    same_email.email = request.email.clone();
    let response = server.post("/api/register", &same_email).await.unwrap();
    let envelope = assert_envelope::<Value>(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(envelope.message, "Email already registered");
}

#[tokio::test]
async fn test_register_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_and_login(&server).await;

    let login = LoginRequest {
        username: request.username,
        password: "wrong-password".to_string(),
    };
    let response = server.post("/api/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_access() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/me", "invalid-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;

    let request = PostRequest {
        title: "Go Basics".to_string(),
        content: "body text".to_string(),
        summary: Some("intro".to_string()),
    };
    let response = server.post_auth("/api/posts", &login.token, &request).await.unwrap();
    let created: PostResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.status, "published");

    let response = server.get(&format!("/api/posts/{}", created.id)).await.unwrap();
    let fetched: PostDetailResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.post.title, "Go Basics");
    assert_eq!(fetched.post.content, "body text");
    assert_eq!(fetched.post.summary.as_deref(), Some("intro"));
    assert_eq!(fetched.post.author_id, login.user_id);
    assert_eq!(fetched.post.author.unwrap().username, login.username);
    assert!(fetched.comments.is_empty());
}

#[tokio::test]
async fn test_list_and_latest_posts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, login) = register_and_login(&server).await;

    let response = server.get("/api/posts/latest").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let first = create_post(&server, &login.token, "first").await;
    let second = create_post(&server, &login.token, "second").await;

    let response = server.get("/api/posts").await.unwrap();
    let posts: Vec<PostResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

    let response = server.get("/api/posts/latest").await.unwrap();
    let latest: PostResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(latest.id, second.id);
}

#[tokio::test]
async fn test_only_author_can_modify_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_and_login(&server).await;
    let (_, bob) = register_and_login(&server).await;
    let post = create_post(&server, &alice.token, "Go Basics").await;
    let path = format!("/api/posts/{}", post.id);

    let response = server
        .put_auth(&path, &bob.token, &PostRequest::new("Hijacked", "x"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &bob.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(&path, &alice.token, &PostRequest::new("Rust Basics", "new body"))
        .await
        .unwrap();
    let updated: PostResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Rust Basics");

    let response = server.delete_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_and_login(&server).await;
    let post = create_post(&server, &alice.token, "Go Basics").await;
    let (_, bob) = register_and_login(&server).await;
    let comments_path = format!("/api/posts/{}/comments", post.id);

    let response = server.get(&comments_path).await.unwrap();
    let envelope = assert_envelope::<Vec<CommentResponse>>(response, StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(envelope.message, "No comments yet");
    assert!(envelope.data.unwrap().is_empty());

    let too_long = CommentRequest::new(&"a".repeat(1001));
    let response = server.post_auth(&comments_path, &bob.token, &too_long).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth(&comments_path, &bob.token, &CommentRequest::new("Nice post!"))
        .await
        .unwrap();
    let created: CommentResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.status, "approved");

    let response = server.get(&comments_path).await.unwrap();
    let listed: Vec<CommentResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].author_id.as_deref(), Some(bob.user_id.as_str()));
    assert_eq!(listed[0].post_id, post.id);
}

#[tokio::test]
async fn test_comment_replies_form_a_tree() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_and_login(&server).await;
    let post = create_post(&server, &alice.token, "Threads").await;
    let comments_path = format!("/api/posts/{}/comments", post.id);

    let response = server
        .post_auth(&comments_path, &alice.token, &CommentRequest::new("root"))
        .await
        .unwrap();
    let root: CommentResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&comments_path, &alice.token, &CommentRequest::reply("child", &root.id))
        .await
        .unwrap();
    let child: CommentResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(child.parent_id.as_deref(), Some(root.id.as_str()));

    let response = server
        .post_auth(&comments_path, &alice.token, &CommentRequest::reply("bad", "12345"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get(&format!("{comments_path}/tree")).await.unwrap();
    let tree: Vec<CommentTreeResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].comment.id, root.id);
    assert_eq!(tree[0].replies.len(), 1);
    assert_eq!(tree[0].replies[0].comment.id, child.id);
}

#[tokio::test]
async fn test_only_author_can_modify_comment() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_and_login(&server).await;
    let (_, bob) = register_and_login(&server).await;
    let post = create_post(&server, &alice.token, "Moderation").await;

    let response = server
        .post_auth(
            &format!("/api/posts/{}/comments", post.id),
            &bob.token,
            &CommentRequest::new("bob was here"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/comments/{}", comment.id);

    // Post owners have no say over other users' comments
    let response = server
        .put_auth(&path, &alice.token, &CommentRequest::new("edited by alice"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = server.delete_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(&path, &bob.token, &CommentRequest::new("edited"))
        .await
        .unwrap();
    let updated: CommentResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.content, "edited");

    let response = server.delete_auth(&path, &bob.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
