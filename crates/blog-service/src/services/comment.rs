//! Comment service
//!
//! Flat and threaded comment reads plus author-only mutation. Guests may
//! comment; their comments start out pending.

use blog_core::{build_threads, Comment, DomainError, Snowflake, MAX_REPLY_DEPTH};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CommentResponse, CommentTreeResponse, CreateCommentRequest, UpdateCommentRequest};

use super::authors::load_authors;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        self.ensure_post(post_id).await?;
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        let authors = load_authors(self.ctx, comments.iter().filter_map(|c| c.user_id)).await?;

        Ok(comments
            .into_iter()
            .map(|c| CommentResponse::from_map(c, &authors))
            .collect())
    }

    /// Comments on a post nested under their parents
    #[instrument(skip(self))]
    pub async fn comment_tree(&self, post_id: Snowflake) -> ServiceResult<Vec<CommentTreeResponse>> {
        self.ensure_post(post_id).await?;
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        let authors = load_authors(self.ctx, comments.iter().filter_map(|c| c.user_id)).await?;

        Ok(build_threads(comments, |comment, replies| CommentTreeResponse {
            comment: CommentResponse::from_map(comment, &authors),
            replies,
        }))
    }

    #[instrument(skip(self))]
    pub async fn get_comment(&self, comment_id: Snowflake) -> ServiceResult<CommentResponse> {
        let comment = self.load(comment_id).await?;
        let authors = load_authors(self.ctx, comment.user_id).await?;

        Ok(CommentResponse::from_map(comment, &authors))
    }

    /// Add a comment or reply to a post
    ///
    /// A parent must be a live comment on the same post, and the reply may
    /// sit at most [`MAX_REPLY_DEPTH`] levels below a top-level comment.
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: Snowflake,
        author_id: Option<Snowflake>,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;
        Comment::validate_content(&request.content)?;

        self.ensure_post(post_id).await?;

        if let Some(parent_id) = request.parent_id {
            let parent = self.ctx.comment_repo().find_by_id(parent_id).await?;
            match parent {
                Some(parent) if parent.post_id == post_id => self.check_depth(parent).await?,
                _ => return Err(DomainError::InvalidParentComment(parent_id).into()),
            }
        }

        let comment = Comment::new(
            self.ctx.generate_id(),
            post_id,
            author_id,
            request.parent_id,
            request.content,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        let author = match author_id {
            Some(id) => self.author_best_effort(id).await,
            None => None,
        };
        Ok(CommentResponse::with_author(comment, author.as_ref()))
    }

    /// Replace comment content; author only
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        comment_id: Snowflake,
        requester_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        let mut comment = self.load(comment_id).await?;
        if !comment.is_authored_by(requester_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        Comment::validate_content(&request.content)?;
        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");

        let author = self.author_best_effort(requester_id).await;
        Ok(CommentResponse::with_author(comment, author.as_ref()))
    }

    /// Soft-delete a single comment; replies are left in place
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        comment_id: Snowflake,
        requester_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self.load(comment_id).await?;
        if !comment.is_authored_by(requester_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    /// Walk up from `parent` and reject a reply that would nest too deep.
    /// A deleted ancestor ends the walk, as the tree promotes its replies.
    async fn check_depth(&self, parent: Comment) -> ServiceResult<()> {
        let mut depth = 1;
        let mut current = parent;
        while let Some(ancestor_id) = current.parent_id {
            depth += 1;
            if depth > MAX_REPLY_DEPTH {
                return Err(DomainError::ReplyTooDeep {
                    max: MAX_REPLY_DEPTH,
                }
                .into());
            }
            match self.ctx.comment_repo().find_by_id(ancestor_id).await? {
                Some(ancestor) => current = ancestor,
                None => break,
            }
        }
        Ok(())
    }

    async fn ensure_post(&self, post_id: Snowflake) -> ServiceResult<()> {
        match self.ctx.post_repo().find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::PostNotFound(post_id).into()),
        }
    }

    async fn load(&self, comment_id: Snowflake) -> ServiceResult<Comment> {
        Ok(self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?)
    }

    async fn author_best_effort(&self, author_id: Snowflake) -> Option<blog_core::User> {
        match self.ctx.user_repo().find_by_id(author_id).await {
            Ok(user) => user,
            Err(e) => {
                warn!(author_id = %author_id, error = %e, "Failed to reload comment author");
                None
            }
        }
    }
}
