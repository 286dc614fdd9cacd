//! Comment entity - a reply on a post, optionally nested under another comment
//!
//! Comments are stored flat. `parent_id` points at another comment on the
//! same post; reply trees are assembled at read time by [`super::build_threads`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

pub const COMMENT_MAX_CHARS: usize = 1000;

/// Deepest allowed reply; a top-level comment has depth 0
pub const MAX_REPLY_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

impl CommentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::ValidationError(format!(
                "unknown comment status: {other}"
            ))),
        }
    }
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    /// `None` for guest comments
    pub user_id: Option<Snowflake>,
    pub parent_id: Option<Snowflake>,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Signed-in authors are approved straight away; guest comments wait
    /// in `Pending`.
    pub fn new(
        id: Snowflake,
        post_id: Snowflake,
        user_id: Option<Snowflake>,
        parent_id: Option<Snowflake>,
        content: String,
    ) -> Self {
        let now = Utc::now();
        let status = if user_id.is_some() {
            CommentStatus::Approved
        } else {
            CommentStatus::Pending
        };
        Self {
            id,
            post_id,
            user_id,
            parent_id,
            content,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Enforce the 1..=1000 character bound (Unicode scalar values, not bytes)
    pub fn validate_content(content: &str) -> Result<(), DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::EmptyContent);
        }
        if content.chars().count() > COMMENT_MAX_CHARS {
            return Err(DomainError::ContentTooLong {
                max: COMMENT_MAX_CHARS,
            });
        }
        Ok(())
    }

    /// Guest comments have no author and can never be edited through the API.
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.user_id == Some(user_id)
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
