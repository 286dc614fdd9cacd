//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and performs exactly
//! one use case per method.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod post;

mod authors;

pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
