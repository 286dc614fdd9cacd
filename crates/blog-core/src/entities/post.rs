//! Post entity - a blog article owned by one user

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

pub const POST_TITLE_MAX_CHARS: usize = 200;
pub const POST_SUMMARY_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    #[default]
    Published,
    Archived,
}

impl PostStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::ValidationError(format!(
                "unknown post status: {other}"
            ))),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    /// Owner; fixed at creation
    pub user_id: Snowflake,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub status: PostStatus,
    pub view_count: i64,
    pub like_count: i64,
    pub is_top: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a published post
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        title: String,
        content: String,
        summary: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            content,
            summary,
            status: PostStatus::Published,
            view_count: 0,
            like_count: 0,
            is_top: false,
            published_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check title, content and summary bounds
    pub fn validate_fields(
        title: &str,
        content: &str,
        summary: Option<&str>,
    ) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::ValidationError("title must not be empty".into()));
        }
        if title.chars().count() > POST_TITLE_MAX_CHARS {
            return Err(DomainError::ValidationError(format!(
                "title must be at most {POST_TITLE_MAX_CHARS} characters"
            )));
        }
        if content.trim().is_empty() {
            return Err(DomainError::EmptyContent);
        }
        if summary.is_some_and(|s| s.chars().count() > POST_SUMMARY_MAX_CHARS) {
            return Err(DomainError::ValidationError(format!(
                "summary must be at most {POST_SUMMARY_MAX_CHARS} characters"
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Replace the editable fields. Ownership is never touched.
    pub fn edit(&mut self, title: String, content: String, summary: Option<String>) {
        self.title = title;
        self.content = content;
        self.summary = summary;
        self.updated_at = Utc::now();
    }
}
