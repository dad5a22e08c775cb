//! Request inputs and their validation rules.
//!
//! Length limits mirror the column widths of the `authors` and `posts`
//! tables so an input that passes validation never fails on a width check
//! in the database.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AuthorId;

/// Maximum length of an author name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of an author email, in characters.
pub const MAX_EMAIL_LEN: usize = 100;

/// Maximum length of a post title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Page size used when a listing request does not specify `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A text field exceeds its column width.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// The email address is not of the form `local@domain.tld`.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// A text field contains a NUL character, which PostgreSQL text
    /// columns cannot store.
    #[error("{0} must not contain NUL characters")]
    ContainsNul(&'static str),

    /// `skip` or `limit` is negative.
    #[error("{0} must not be negative")]
    NegativePagination(&'static str),
}

fn reject_nul(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::ContainsNul(field));
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    reject_nul(field, value)?;
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Checks that `email` has a non-empty local part and a dotted domain.
fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

/// Body of author create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInput {
    pub name: String,
    pub email: String,
}

impl AuthorInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        require_text("email", &self.email, MAX_EMAIL_LEN)?;
        validate_email(&self.email)
    }
}

/// Body of post update requests. The author reference cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, MAX_TITLE_LEN)?;
        reject_nul("content", &self.content)
    }
}

/// Body of post create requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: AuthorId,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }

    /// Validates the text fields. Whether `author_id` exists is checked
    /// against the store by the caller.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, MAX_TITLE_LEN)?;
        reject_nul("content", &self.content)
    }
}

/// Offset-based page selection.
///
/// `limit` has no upper bound: a caller can request every row in one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.skip < 0 {
            return Err(ValidationError::NegativePagination("skip"));
        }
        if self.limit < 0 {
            return Err(ValidationError::NegativePagination("limit"));
        }
        Ok(())
    }
}
