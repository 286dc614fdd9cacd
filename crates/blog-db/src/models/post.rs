//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `posts` table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub status: String,
    pub view_count: i64,
    pub like_count: i64,
    pub is_top: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
