//! In-memory storage backend
//!
//! All three repositories share one [`MemoryStore`], so a post delete can
//! cascade to its comments under a single write lock. Locks are taken and
//! released inside each call; none is held across an `.await`.

mod comment;
mod post;
mod user;

use std::collections::HashMap;
use std::sync::Arc;

use blog_core::{Comment, Post, Snowflake, User};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

pub use comment::MemoryCommentRepository;
pub use post::MemoryPostRepository;
pub use user::MemoryUserRepository;

/// Shared handle to the in-memory tables
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Default)]
struct Tables {
    users: HashMap<Snowflake, UserRow>,
    posts: HashMap<Snowflake, Row<Post>>,
    comments: HashMap<Snowflake, Row<Comment>>,
}

struct Row<T> {
    entity: T,
    deleted_at: Option<DateTime<Utc>>,
}

impl<T> Row<T> {
    fn new(entity: T) -> Self {
        Self {
            entity,
            deleted_at: None,
        }
    }

    fn live(&self) -> Option<&T> {
        self.deleted_at.is_none().then_some(&self.entity)
    }
}

struct UserRow {
    user: User,
    password_hash: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn live(&self) -> Option<&User> {
        self.deleted_at.is_none().then_some(&self.user)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repository(&self) -> MemoryUserRepository {
        MemoryUserRepository::new(self.clone())
    }

    pub fn post_repository(&self) -> MemoryPostRepository {
        MemoryPostRepository::new(self.clone())
    }

    pub fn comment_repository(&self) -> MemoryCommentRepository {
        MemoryCommentRepository::new(self.clone())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("MemoryStore")
            .field("users", &tables.users.len())
            .field("posts", &tables.posts.len())
            .field("comments", &tables.comments.len())
            .finish()
    }
}
