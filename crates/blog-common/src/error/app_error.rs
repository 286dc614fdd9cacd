//! Application error types
//!
//! Errors raised by shared infrastructure (tokens, hashing, configuration)
//! plus a transparent wrapper for domain errors.

use blog_core::{DomainError, ErrorKind};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Covers bad signatures, malformed tokens and expired tokens alike
    #[error("Invalid or expired token")]
    InvalidToken,

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials | Self::InvalidToken => ErrorKind::Authentication,
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => ErrorKind::Internal,
            Self::Domain(e) => e.kind(),
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::Snowflake;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::Config("bad".into()).status_code(), 500);
        assert_eq!(AppError::Database("test".into()).status_code(), 500);
    }

    #[test]
    fn test_domain_errors_keep_their_kind() {
        let err = AppError::from(DomainError::CommentNotFound(Snowflake::new(3)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.error_code(), "UNKNOWN_COMMENT");

        let err = AppError::from(DomainError::UsernameAlreadyExists);
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_internal_message_hides_source() {
        let err = AppError::internal(anyhow::anyhow!("connection refused on 10.0.0.3"));
        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
