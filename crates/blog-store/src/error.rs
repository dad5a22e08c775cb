//! Error types for the storage layer.

use blog_core::AuthorId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// Missing rows are not errors: lookups return `Option` and deletes return
/// `bool`, leaving the not-found decision to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error not classified below.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The email is already registered to another author.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// A post references an author that does not exist.
    #[error("invalid reference: author {0} does not exist")]
    InvalidAuthorReference(AuthorId),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// Maps a unique-constraint violation raised while writing `email`.
    pub(crate) fn on_unique_violation(err: sqlx::Error, email: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::DuplicateEmail(email.to_string())
            }
            _ => Self::Database(err),
        }
    }

    /// Maps a foreign-key violation raised while attaching a post to `author_id`.
    pub(crate) fn on_foreign_key_violation(err: sqlx::Error, author_id: AuthorId) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Self::InvalidAuthorReference(author_id)
            }
            _ => Self::Database(err),
        }
    }
}
