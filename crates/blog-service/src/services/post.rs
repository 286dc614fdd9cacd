//! Post service
//!
//! Listing, reading and author-only mutation of posts.

use blog_core::{DomainError, Post, Snowflake};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CommentResponse, CreatePostRequest, PostDetailResponse, PostResponse, UpdatePostRequest,
};

use super::authors::load_authors;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All live posts, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_all().await?;
        let authors = load_authors(self.ctx, posts.iter().map(|p| p.user_id)).await?;

        Ok(posts
            .into_iter()
            .map(|post| PostResponse::from_map(post, &authors))
            .collect())
    }

    /// The single newest post, if any
    #[instrument(skip(self))]
    pub async fn latest_post(&self) -> ServiceResult<Option<PostResponse>> {
        let Some(post) = self.ctx.post_repo().find_latest().await? else {
            return Ok(None);
        };
        let authors = load_authors(self.ctx, [post.user_id]).await?;

        Ok(Some(PostResponse::from_map(post, &authors)))
    }

    /// One post with its flat comment list
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Snowflake) -> ServiceResult<PostDetailResponse> {
        let post = self.load(post_id).await?;
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;

        let authors = load_authors(
            self.ctx,
            std::iter::once(post.user_id).chain(comments.iter().filter_map(|c| c.user_id)),
        )
        .await?;

        Ok(PostDetailResponse {
            post: PostResponse::from_map(post, &authors),
            comments: comments
                .into_iter()
                .map(|c| CommentResponse::from_map(c, &authors))
                .collect(),
        })
    }

    /// Publish a post for `author_id`
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;
        Post::validate_fields(&request.title, &request.content, request.summary.as_deref())?;

        let post = Post::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.content,
            request.summary,
        );
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, "Post created");

        let author = self.author_best_effort(author_id).await;
        Ok(PostResponse::with_author(post, author.as_ref()))
    }

    /// Replace title, content and summary; author only
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: Snowflake,
        requester_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;

        let mut post = self.load(post_id).await?;
        if !post.is_owned_by(requester_id) {
            return Err(DomainError::NotPostAuthor.into());
        }

        Post::validate_fields(&request.title, &request.content, request.summary.as_deref())?;
        post.edit(request.title, request.content, request.summary);
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post.id, "Post updated");

        let author = self.author_best_effort(post.user_id).await;
        Ok(PostResponse::with_author(post, author.as_ref()))
    }

    /// Soft-delete a post and its comments; author only
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Snowflake, requester_id: Snowflake) -> ServiceResult<()> {
        let post = self.load(post_id).await?;
        if !post.is_owned_by(requester_id) {
            return Err(DomainError::NotPostAuthor.into());
        }

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    async fn load(&self, post_id: Snowflake) -> ServiceResult<Post> {
        Ok(self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?)
    }

    async fn author_best_effort(&self, author_id: Snowflake) -> Option<blog_core::User> {
        match self.ctx.user_repo().find_by_id(author_id).await {
            Ok(user) => user,
            Err(e) => {
                warn!(author_id = %author_id, error = %e, "Failed to reload post author");
                None
            }
        }
    }
}
