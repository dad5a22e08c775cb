//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in blog-core so the
//! column layout of a query can change without touching the API shapes.

use blog_core::{Author, AuthorId, Post, PostId};
use sqlx::FromRow;

/// Column list selected for an author.
pub(crate) const AUTHOR_COLUMNS: &str = "id, name, email";

/// Column list selected for a post joined with its author.
///
/// Expects the post relation aliased as `p` and the author relation as `a`.
pub(crate) const POST_WITH_AUTHOR_COLUMNS: &str = "p.id, p.title, p.content, p.author_id, \
     a.name AS author_name, a.email AS author_email";

/// Database row for the `authors` table.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct AuthorRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: AuthorId(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

/// Denormalized row produced by joining `posts` with `authors`.
///
/// One row per post; the author columns repeat for every post by the same
/// author.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct PostWithAuthorRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
    pub author_email: String,
}

impl From<PostWithAuthorRow> for Post {
    fn from(row: PostWithAuthorRow) -> Self {
        let author_id = AuthorId(row.author_id);
        Self {
            id: PostId(row.id),
            title: row.title,
            content: row.content,
            author_id,
            author: Author {
                id: author_id,
                name: row.author_name,
                email: row.author_email,
            },
        }
    }
}

/// Folds joined rows into posts, preserving query order.
pub(crate) fn fold_posts(rows: Vec<PostWithAuthorRow>) -> Vec<Post> {
    rows.into_iter().map(Post::from).collect()
}
