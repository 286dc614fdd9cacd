//! Domain entities

mod comment;
mod post;
mod thread;
mod user;

pub use comment::{Comment, CommentStatus, COMMENT_MAX_CHARS, MAX_REPLY_DEPTH};
pub use post::{Post, PostStatus, POST_SUMMARY_MAX_CHARS, POST_TITLE_MAX_CHARS};
pub use thread::build_threads;
pub use user::User;
