//! In-memory implementation of PostRepository

use async_trait::async_trait;
use chrono::Utc;

use blog_core::{DomainError, Post, PostRepository, RepoResult, Snowflake};

use super::{MemoryStore, Row};

#[derive(Clone, Debug)]
pub struct MemoryPostRepository {
    store: MemoryStore,
}

impl MemoryPostRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn newest_first(&self) -> Vec<Post> {
        let tables = self.store.tables.read();
        let mut posts: Vec<Post> = tables.posts.values().filter_map(Row::live).cloned().collect();
        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        posts
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let tables = self.store.tables.read();
        Ok(tables.posts.get(&id).and_then(Row::live).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        Ok(self.newest_first())
    }

    async fn find_latest(&self) -> RepoResult<Option<Post>> {
        Ok(self.newest_first().into_iter().next())
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut tables = self.store.tables.write();
        if !tables.users.contains_key(&post.user_id) {
            return Err(DomainError::UserNotFound(post.user_id));
        }
        if tables.posts.contains_key(&post.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate post id {}",
                post.id
            )));
        }
        tables.posts.insert(post.id, Row::new(post.clone()));
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut tables = self.store.tables.write();
        let row = tables
            .posts
            .get_mut(&post.id)
            .filter(|row| row.deleted_at.is_none())
            .ok_or(DomainError::PostNotFound(post.id))?;

        row.entity.title.clone_from(&post.title);
        row.entity.content.clone_from(&post.content);
        row.entity.summary.clone_from(&post.summary);
        row.entity.updated_at = post.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let now = Utc::now();
        let mut tables = self.store.tables.write();

        let row = tables
            .posts
            .get_mut(&id)
            .filter(|row| row.deleted_at.is_none())
            .ok_or(DomainError::PostNotFound(id))?;
        row.deleted_at = Some(now);

        for comment in tables.comments.values_mut() {
            if comment.entity.post_id == id && comment.deleted_at.is_none() {
                comment.deleted_at = Some(now);
            }
        }
        Ok(())
    }
}
