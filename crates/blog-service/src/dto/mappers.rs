//! Entity to DTO mappers

use std::collections::HashMap;

use blog_core::{Comment, Post, Snowflake, User};

use super::responses::{
    AuthorResponse, CommentResponse, CurrentUserResponse, PostResponse,
    RegisterResponse,
};

/// Authors keyed by id, as loaded for one response
pub type AuthorMap = HashMap<Snowflake, User>;

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for AuthorResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            display_name: user.display_name().to_string(),
        }
    }
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            bio: user.bio.clone(),
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl PostResponse {
    pub fn with_author(post: Post, author: Option<&User>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            summary: post.summary,
            status: post.status,
            view_count: post.view_count,
            like_count: post.like_count,
            is_top: post.is_top,
            published_at: post.published_at,
            author_id: post.user_id,
            author: author.map(AuthorResponse::from),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }

    pub fn from_map(post: Post, authors: &AuthorMap) -> Self {
        let author = authors.get(&post.user_id);
        Self::with_author(post, author)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl CommentResponse {
    pub fn with_author(comment: Comment, author: Option<&User>) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            content: comment.content,
            status: comment.status,
            author_id: comment.user_id,
            author: author.map(AuthorResponse::from),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }

    pub fn from_map(comment: Comment, authors: &AuthorMap) -> Self {
        let author = comment.user_id.and_then(|id| authors.get(&id));
        Self::with_author(comment, author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_comment_maps_without_author() {
        let comment = Comment::new(Snowflake::new(3), Snowflake::new(2), None, None, "hi".into());
        let response = CommentResponse::from_map(comment, &AuthorMap::new());
        assert_eq!(response.author_id, None);
        assert_eq!(response.author, None);
    }

    #[test]
    fn test_post_author_is_attached() {
        let user = User::new(Snowflake::new(1), "alice".into(), "alice@example.com".into())
            .with_nickname(Some("Alice".into()));
        let post = Post::new(
            Snowflake::new(2),
            user.id,
            "Go Basics".into(),
            "body text".into(),
            None,
        );
        let authors = AuthorMap::from([(user.id, user)]);

        let response = PostResponse::from_map(post, &authors);
        let author = response.author.unwrap();
        assert_eq!(author.username, "alice");
        assert_eq!(author.display_name, "Alice");
    }
}
