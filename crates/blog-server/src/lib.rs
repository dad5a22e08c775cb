//! blog-server: HTTP API for authors and their posts.
//!
//! This crate provides:
//! - REST endpoints for authors, posts and the posts of one author
//! - Request validation with JSON error bodies
//! - A database health check
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! # Usage
//!
//! ```rust,ignore
//! use blog_server::{AppState, ServerConfig, routes};
//! use blog_store::{Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let app = routes::build_router(AppState::new(store, ServerConfig::from_env()?));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

pub use blog_core;
pub use blog_store;
