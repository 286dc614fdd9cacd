//! Service context - dependency container for services
//!
//! Built once by the process entry point and shared behind an `Arc`.
//! Services never reach for a global handle; everything they touch comes
//! through here.

use std::sync::Arc;

use blog_common::JwtService;
use blog_core::{CommentRepository, PostRepository, Snowflake, SnowflakeGenerator, UserRepository};
use blog_db::{
    MemoryStore, PgCommentRepository, PgPool, PgPostRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct ServiceContext {
    /// Present only with the PostgreSQL backend
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    /// Whether the backing store can serve queries right now
    pub async fn storage_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => true,
        }
    }

    /// Close the database pool, waiting for checked-out connections
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories over `pool`
    pub fn postgres(mut self, pool: PgPool) -> Self {
        self.user_repo = Some(Arc::new(PgUserRepository::new(pool.clone())));
        self.post_repo = Some(Arc::new(PgPostRepository::new(pool.clone())));
        self.comment_repo = Some(Arc::new(PgCommentRepository::new(pool.clone())));
        self.pool = Some(pool);
        self
    }

    /// Use the in-memory repositories sharing `store`
    pub fn memory(mut self, store: &MemoryStore) -> Self {
        self.user_repo = Some(Arc::new(store.user_repository()));
        self.post_repo = Some(Arc::new(store.post_repository()));
        self.comment_repo = Some(Arc::new(store.comment_repository()));
        self.pool = None;
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: JwtService) -> Self {
        self.jwt_service = Some(Arc::new(service));
        self
    }

    pub fn snowflake_generator(mut self, generator: SnowflakeGenerator) -> Self {
        self.snowflake_generator = Some(Arc::new(generator));
        self
    }

    /// # Errors
    /// Returns an internal error naming the first missing dependency
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::internal("user repository not configured"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::internal("post repository not configured"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::internal("comment repository not configured"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::internal("JWT service not configured"))?,
            snowflake_generator: self
                .snowflake_generator
                .unwrap_or_else(|| Arc::new(SnowflakeGenerator::new(0))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_repositories() {
        let err = ServiceContextBuilder::new()
            .jwt_service(JwtService::new("secret", 60))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("user repository"));
    }

    #[tokio::test]
    async fn test_memory_context_is_healthy() {
        let ctx = ServiceContext::builder()
            .memory(&MemoryStore::new())
            .jwt_service(JwtService::new("secret", 60))
            .build()
            .unwrap();

        assert!(ctx.pool().is_none());
        assert!(ctx.storage_healthy().await);
        assert_ne!(ctx.generate_id(), ctx.generate_id());
    }
}
