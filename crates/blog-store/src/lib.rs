//! blog-store: Storage layer for the blog API
//!
//! This crate provides:
//! - PostgreSQL storage for authors and posts
//! - Posts loaded together with their author in a single joined query
//! - Transactional cascade delete of an author's posts
//! - Embedded, idempotent schema migration
//!
//! # Usage
//!
//! ```rust,ignore
//! use blog_core::{AuthorInput, NewPost, Pagination};
//! use blog_store::{Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//!
//! let author = store.create_author(&AuthorInput::new("Ada", "ada@x.io")).await?;
//! let post = store.create_post(&NewPost::new("T", "C", author.id)).await?;
//! assert_eq!(post.author.email, "ada@x.io");
//!
//! let posts = store.list_posts(Pagination::default(), Some(author.id)).await?;
//! ```

pub mod error;
mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

// Re-export blog-core for downstream crates
pub use blog_core;
