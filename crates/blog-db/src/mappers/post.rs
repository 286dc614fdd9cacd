//! Post model -> entity mapper

use blog_core::{DomainError, Post, Snowflake};

use crate::models::PostModel;

impl TryFrom<PostModel> for Post {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|_| {
            DomainError::DatabaseError(format!(
                "post {} has unknown status {:?}",
                model.id, model.status
            ))
        })?;

        Ok(Post {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            content: model.content,
            summary: model.summary,
            status,
            view_count: model.view_count,
            like_count: model.like_count,
            is_top: model.is_top,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::PostStatus;
    use chrono::Utc;

    fn model(status: &str) -> PostModel {
        let now = Utc::now();
        PostModel {
            id: 7,
            user_id: 1,
            title: "Go Basics".into(),
            content: "body text".into(),
            summary: None,
            status: status.into(),
            view_count: 3,
            like_count: 0,
            is_top: false,
            published_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_known_status() {
        let post = Post::try_from(model("archived")).unwrap();
        assert_eq!(post.status, PostStatus::Archived);
        assert_eq!(post.user_id, Snowflake::new(1));
        assert_eq!(post.view_count, 3);
    }

    #[test]
    fn test_unknown_status_is_database_error() {
        assert!(matches!(
            Post::try_from(model("hidden")),
            Err(DomainError::DatabaseError(_))
        ));
    }
}
