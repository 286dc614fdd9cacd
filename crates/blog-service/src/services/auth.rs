//! Authentication service
//!
//! Handles user registration, login and the current-user lookup.

use blog_common::{hash_password, verify_password, AppError};
use blog_core::{DomainError, Snowflake, User};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        request.validate()?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        // Argon2 is CPU-bound; keep it off the async workers
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ServiceError::internal(format!("hashing task failed: {e}")))??;

        let user = User::new(self.ctx.generate_id(), request.username, request.email)
            .with_nickname(request.nickname);

        // The store enforces uniqueness again for concurrent registrations
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(RegisterResponse::from(&user))
    }

    /// Login with username and password
    ///
    /// Unknown user, disabled account and wrong password all fail the same way.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        request.validate()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !user.can_log_in() {
            warn!(user_id = %user.id, "Login failed: account disabled");
            return Err(AppError::InvalidCredentials.into());
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password = request.password;
        let is_valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(|e| ServiceError::internal(format!("verification task failed: {e}")))??;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        let issued = self.ctx.jwt_service().issue(user.id, &user.username)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse {
            token: issued.token,
            token_type: "Bearer",
            expires_in: issued.expires_in,
            user_id: user.id,
            username: user.username,
            email: user.email,
        })
    }

    /// Profile of the authenticated caller
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(CurrentUserResponse::from(&user))
    }
}
