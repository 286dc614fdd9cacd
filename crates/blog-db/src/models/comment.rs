//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `comments` table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub user_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
