//! In-memory implementation of CommentRepository

use async_trait::async_trait;
use chrono::Utc;

use blog_core::{Comment, CommentRepository, DomainError, RepoResult, Snowflake};

use super::{MemoryStore, Row};

#[derive(Clone, Debug)]
pub struct MemoryCommentRepository {
    store: MemoryStore,
}

impl MemoryCommentRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let tables = self.store.tables.read();
        Ok(tables.comments.get(&id).and_then(Row::live).cloned())
    }

    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let tables = self.store.tables.read();
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter_map(Row::live)
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let mut tables = self.store.tables.write();
        // Same foreign keys as the comments table, and the post must be live
        if tables
            .posts
            .get(&comment.post_id)
            .and_then(Row::live)
            .is_none()
        {
            return Err(DomainError::PostNotFound(comment.post_id));
        }
        if let Some(user_id) = comment.user_id {
            if !tables.users.contains_key(&user_id) {
                return Err(DomainError::UserNotFound(user_id));
            }
        }
        if let Some(parent_id) = comment.parent_id {
            if !tables.comments.contains_key(&parent_id) {
                return Err(DomainError::CommentNotFound(parent_id));
            }
        }
        if tables.comments.contains_key(&comment.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate comment id {}",
                comment.id
            )));
        }
        tables.comments.insert(comment.id, Row::new(comment.clone()));
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut tables = self.store.tables.write();
        let row = tables
            .comments
            .get_mut(&comment.id)
            .filter(|row| row.deleted_at.is_none())
            .ok_or(DomainError::CommentNotFound(comment.id))?;

        row.entity.content.clone_from(&comment.content);
        row.entity.updated_at = comment.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tables = self.store.tables.write();
        let row = tables
            .comments
            .get_mut(&id)
            .filter(|row| row.deleted_at.is_none())
            .ok_or(DomainError::CommentNotFound(id))?;
        row.deleted_at = Some(Utc::now());
        Ok(())
    }
}
