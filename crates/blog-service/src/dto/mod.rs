//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreatePostRequest, LoginRequest, RegisterRequest, UpdateCommentRequest,
    UpdatePostRequest,
};

pub use responses::{
    AuthorResponse, CommentResponse, CommentTreeResponse, CurrentUserResponse, HealthChecks,
    HealthResponse, LoginResponse, PostDetailResponse, PostResponse, ReadinessResponse,
    RegisterResponse,
};
