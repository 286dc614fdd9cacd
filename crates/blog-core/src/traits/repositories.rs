//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the storage crate provides
//! PostgreSQL and in-memory implementations. Every lookup ignores
//! soft-deleted rows.

use async_trait::async_trait;

use crate::entities::{Comment, Post, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Batch lookup used to attach authors to listings. Missing ids are skipped.
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a user. A uniqueness violation surfaces as
    /// `UsernameAlreadyExists` / `EmailAlreadyExists`.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// All live posts, newest first
    async fn find_all(&self) -> RepoResult<Vec<Post>>;

    /// Most recently created live post
    async fn find_latest(&self) -> RepoResult<Option<Post>>;

    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Persist title, content, summary and `updated_at`
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Soft delete the post and every comment on it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Live comments on a post, oldest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;

    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Persist content and `updated_at`
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
