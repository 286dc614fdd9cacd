//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Length bounds count characters, matching the domain checks in blog-core.

use blog_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,

    #[validate(length(max = 50, message = "Nickname must be at most 50 characters"))]
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    #[serde(default)]
    pub summary: Option<String>,
}

/// Full replacement of the editable fields; an omitted summary clears it
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    #[serde(default)]
    pub summary: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,

    /// Reply target; must be a live comment on the same post
    #[serde(default)]
    pub parent_id: Option<Snowflake>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validation() {
        let valid = RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret123".into(),
            nickname: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".into(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_name = RegisterRequest {
            username: "al".into(),
            ..valid
        };
        assert!(short_name.validate().is_err());
    }

    #[test]
    fn test_comment_length_bounds() {
        let ok = CreateCommentRequest {
            content: "x".repeat(1000),
            parent_id: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateCommentRequest {
            content: "x".repeat(1001),
            parent_id: None,
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));

        let empty = UpdateCommentRequest {
            content: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_parent_id_accepts_string_ids() {
        let req: CreateCommentRequest =
            serde_json::from_str(r#"{"content":"hi","parent_id":"42"}"#).unwrap();
        assert_eq!(req.parent_id, Some(Snowflake::new(42)));

        let req: CreateCommentRequest = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(req.parent_id, None);
    }

    #[test]
    fn test_post_title_bound() {
        let req = CreatePostRequest {
            title: "t".repeat(201),
            content: "body".into(),
            summary: None,
        };
        assert!(req.validate().is_err());
    }
}
