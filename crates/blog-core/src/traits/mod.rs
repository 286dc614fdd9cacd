//! Repository traits implemented by the storage backends

mod repositories;

pub use repositories::{CommentRepository, PostRepository, RepoResult, UserRepository};
