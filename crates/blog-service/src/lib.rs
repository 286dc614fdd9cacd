//! # blog-service
//!
//! Application layer containing the auth, post and comment services and their DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CommentService, PostService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
