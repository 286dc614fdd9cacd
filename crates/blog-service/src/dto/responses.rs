//! Response DTOs for API endpoints

use blog_core::{CommentStatus, PostStatus, Snowflake};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponse {
    pub user_id: Snowflake,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user_id: Snowflake,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub user_id: Snowflake,
    pub username: String,
    pub email: String,
    pub nickname: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public summary of a post or comment author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorResponse {
    pub id: Snowflake,
    pub username: String,
    pub display_name: String,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    pub id: Snowflake,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub status: PostStatus,
    pub view_count: i64,
    pub like_count: i64,
    pub is_top: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Snowflake,
    /// `None` when the author account is no longer available
    pub author: Option<AuthorResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    /// Live comments, oldest first
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub parent_id: Option<Snowflake>,
    pub content: String,
    pub status: CommentStatus,
    /// `None` for guest comments
    pub author_id: Option<Snowflake>,
    pub author: Option<AuthorResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentTreeResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,
    pub replies: Vec<CommentTreeResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.storage, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert!(!not_ready.is_ready());
        assert_eq!(not_ready.checks.storage, "unhealthy");
    }

    #[test]
    fn test_register_response_shape() {
        let json = serde_json::to_value(RegisterResponse {
            user_id: Snowflake::new(77),
            username: "alice".into(),
            email: "alice@example.com".into(),
        })
        .unwrap();

        assert_eq!(json["user_id"], "77");
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
    }
}
