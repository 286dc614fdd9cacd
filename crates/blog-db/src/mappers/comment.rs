//! Comment model -> entity mapper

use blog_core::{Comment, DomainError, Snowflake};

use crate::models::CommentModel;

impl TryFrom<CommentModel> for Comment {
    type Error = DomainError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|_| {
            DomainError::DatabaseError(format!(
                "comment {} has unknown status {:?}",
                model.id, model.status
            ))
        })?;

        Ok(Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            user_id: model.user_id.map(Snowflake::new),
            parent_id: model.parent_id.map(Snowflake::new),
            content: model.content,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
