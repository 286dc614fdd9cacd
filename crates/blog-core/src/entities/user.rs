//! User entity - a registered blog author

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account. The password hash lives only in the credential store and
/// never travels on this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub nickname: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            nickname: None,
            bio: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_nickname(mut self, nickname: Option<String>) -> Self {
        self.nickname = nickname.filter(|n| !n.trim().is_empty());
        self
    }

    /// Nickname if set, otherwise the username
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }

    #[inline]
    pub fn can_log_in(&self) -> bool {
        self.is_active
    }
}
