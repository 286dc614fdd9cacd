//! # blog-db
//!
//! Storage layer implementing the `blog-core` repository traits.
//!
//! - [`repositories`]: PostgreSQL via SQLx, with soft deletes and
//!   partial unique indexes for live usernames and emails
//! - [`memory`]: a process-local store with the same semantics, used for
//!   development and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::{create_pool, run_migrations, PgUserRepository};
//!
//! let pool = create_pool(&db_config).await?;
//! run_migrations(&pool).await?;
//! let users = PgUserRepository::new(pool.clone());
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{
    MemoryCommentRepository, MemoryPostRepository, MemoryStore, MemoryUserRepository,
};
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{PgCommentRepository, PgPostRepository, PgUserRepository};
