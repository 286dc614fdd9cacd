//! # blog-core
//!
//! Domain layer containing the blog entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    build_threads, Comment, CommentStatus, Post, PostStatus, User, COMMENT_MAX_CHARS,
    MAX_REPLY_DEPTH, POST_SUMMARY_MAX_CHARS, POST_TITLE_MAX_CHARS,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{CommentRepository, PostRepository, RepoResult, UserRepository};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
