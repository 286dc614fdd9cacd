//! Error handling utilities for repositories

use blog_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Translate a unique violation on `users` into the matching conflict
///
/// The constraint name tells username and email apart; see the
/// `uq_users_*_live` indexes in the migrations.
pub fn map_user_insert_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(name) if name.contains("email") => DomainError::EmailAlreadyExists,
                _ => DomainError::UsernameAlreadyExists,
            };
        }
    }
    map_db_error(e)
}
