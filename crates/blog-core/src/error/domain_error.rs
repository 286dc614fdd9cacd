//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Coarse classification shared by every error type in the workspace.
///
/// The HTTP layer maps each kind to exactly one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Authorization,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Authentication => 401,
            Self::Authorization => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Parent comment {0} does not belong to this post")]
    InvalidParentComment(Snowflake),

    #[error("Replies may be nested at most {max} levels deep")]
    ReplyTooDeep { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the author can modify this post")]
    NotPostAuthor,

    #[error("Only the author can modify this comment")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Email already registered")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidParentComment(_) => "INVALID_PARENT_COMMENT",
            Self::ReplyTooDeep { .. } => "REPLY_TOO_DEEP",

            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            Self::UsernameAlreadyExists => "USERNAME_TAKEN",
            Self::EmailAlreadyExists => "EMAIL_TAKEN",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::CommentNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::ValidationError(_)
            | Self::EmptyContent
            | Self::ContentTooLong { .. }
            | Self::InvalidParentComment(_)
            | Self::ReplyTooDeep { .. } => ErrorKind::Validation,
            Self::NotPostAuthor | Self::NotCommentAuthor => ErrorKind::Authorization,
            Self::UsernameAlreadyExists | Self::EmailAlreadyExists => ErrorKind::Conflict,
            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Internal,
        }
    }
}
