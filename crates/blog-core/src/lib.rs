//! blog-core: Core types for the blog API
//!
//! This crate provides:
//! - Typed identifiers for authors and posts
//! - The `Author` and `Post` records exchanged by every layer
//! - Input types with validation for create and update requests
//! - Offset-based pagination parameters
//!
//! A `Post` always carries its `Author`. The storage layer populates the
//! relationship in the same query that loads the post, so callers never
//! resolve authors one post at a time.

pub mod types;
pub mod validation;

pub use types::{Author, AuthorId, Post, PostId};
pub use validation::{
    AuthorInput, DEFAULT_LIMIT, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_TITLE_LEN, NewPost, Pagination,
    PostInput, ValidationError,
};
