//! Post endpoints.
//!
//! Every post in a response carries its author, loaded in the same query as
//! the post itself.
//!
//! - POST /posts - Create a post for an existing author
//! - GET /posts - List posts, optionally filtered by author
//! - GET /posts/{id} - Get a post
//! - PUT /posts/{id} - Replace a post's title and content
//! - DELETE /posts/{id} - Delete a post

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use blog_core::{
    AuthorId, DEFAULT_LIMIT, NewPost, Pagination, Post, PostId, PostInput, ValidationError,
};
use serde::Deserialize;

use crate::error::{AUTHOR_REFERENCE_MISSING, ApiError, ApiResult};
use crate::extract::{ApiPath, ValidJson, ValidQuery, Validate};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Query string for GET /posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Restrict the listing to this author's posts.
    #[serde(default)]
    pub author_id: Option<AuthorId>,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl ListPostsQuery {
    pub fn page(&self) -> Pagination {
        Pagination::new(self.skip, self.limit)
    }
}

impl Validate for ListPostsQuery {
    fn validate(&self) -> Result<(), ValidationError> {
        self.page().validate()
    }
}

fn post_not_found() -> ApiError {
    ApiError::NotFound("Post not found".to_string())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /posts - Create a post.
///
/// # Response
///
/// - 201 Created: the post with its author
/// - 400 Bad Request: invalid input, or `author_id` does not exist
async fn create_post(
    State(state): State<AppState>,
    ValidJson(new_post): ValidJson<NewPost>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let store = state.store();

    if !store.author_exists(new_post.author_id).await? {
        return Err(ApiError::InvalidReference(
            AUTHOR_REFERENCE_MISSING.to_string(),
        ));
    }

    let post = store.create_post(&new_post).await?;

    tracing::info!(
        post_id = %post.id,
        author_id = %post.author_id,
        "Post created"
    );

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts - List posts ordered by id.
async fn list_posts(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListPostsQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    let posts = state
        .store()
        .list_posts(query.page(), query.author_id)
        .await?;

    tracing::debug!(count = posts.len(), author_id = ?query.author_id, "Listed posts");

    Ok(Json(posts))
}

/// GET /posts/{id} - Get a post.
async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PostId>,
) -> ApiResult<Json<Post>> {
    state
        .store()
        .get_post(id)
        .await?
        .map(Json)
        .ok_or_else(post_not_found)
}

/// PUT /posts/{id} - Replace a post's title and content.
///
/// The author of a post cannot be changed.
async fn update_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PostId>,
    ValidJson(input): ValidJson<PostInput>,
) -> ApiResult<Json<Post>> {
    let post = state
        .store()
        .update_post(id, &input)
        .await?
        .ok_or_else(post_not_found)?;

    tracing::info!(post_id = %post.id, "Post updated");

    Ok(Json(post))
}

/// DELETE /posts/{id} - Delete a post.
async fn delete_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<PostId>,
) -> ApiResult<StatusCode> {
    if !state.store().delete_post(id).await? {
        return Err(post_not_found());
    }

    tracing::info!(post_id = %id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build post routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> ListPostsQuery {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn test_list_query_defaults() {
        let query = parse("");
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.author_id, None);
    }

    #[test]
    fn test_list_query_with_author_filter() {
        let query = parse("skip=10&limit=5&author_id=3");
        assert_eq!(query.page(), Pagination::new(10, 5));
        assert_eq!(query.author_id, Some(AuthorId(3)));
    }

    #[test]
    fn test_list_query_zero_limit_is_valid() {
        assert!(parse("limit=0").validate().is_ok());
    }

    #[test]
    fn test_list_query_negative_skip_is_invalid() {
        assert_eq!(
            parse("skip=-1").validate().unwrap_err(),
            ValidationError::NegativePagination("skip")
        );
    }

    #[test]
    fn test_list_query_rejects_non_numeric_author() {
        assert!(serde_urlencoded::from_str::<ListPostsQuery>("author_id=ada").is_err());
    }

    #[test]
    fn test_post_not_found_is_404() {
        let err = post_not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn test_update_body_ignores_author_id() {
        let input: PostInput =
            serde_json::from_str(r#"{"title": "T", "content": "C", "author_id": 99}"#).unwrap();
        assert_eq!(input, PostInput::new("T", "C"));
    }
}
