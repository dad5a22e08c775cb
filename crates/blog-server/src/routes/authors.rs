//! Author endpoints.
//!
//! - POST /authors - Register an author (email must be unused)
//! - GET /authors - List authors
//! - GET /authors/{id} - Get an author
//! - PUT /authors/{id} - Replace an author's name and email
//! - DELETE /authors/{id} - Delete an author and all of their posts
//! - GET /authors/{id}/posts - List one author's posts

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use blog_core::{Author, AuthorId, AuthorInput, Pagination, Post};

use crate::error::{ApiError, ApiResult, EMAIL_TAKEN};
use crate::extract::{ApiPath, ValidJson, ValidQuery};
use crate::state::AppState;

fn author_not_found() -> ApiError {
    ApiError::NotFound("Author not found".to_string())
}

/// POST /authors - Register a new author.
///
/// # Response
///
/// - 201 Created: the author with its assigned id
/// - 400 Bad Request: invalid input, or email already registered
async fn create_author(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<AuthorInput>,
) -> ApiResult<(StatusCode, Json<Author>)> {
    let store = state.store();

    // Advisory: the unique constraint still decides concurrent registrations.
    if store.get_author_by_email(&input.email).await?.is_some() {
        return Err(ApiError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let author = store.create_author(&input).await?;

    tracing::info!(author_id = %author.id, "Author created");

    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /authors - List authors ordered by id.
async fn list_authors(
    State(state): State<AppState>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> ApiResult<Json<Vec<Author>>> {
    let authors = state.store().list_authors(page).await?;

    tracing::debug!(
        count = authors.len(),
        skip = page.skip,
        limit = page.limit,
        "Listed authors"
    );

    Ok(Json(authors))
}

/// GET /authors/{id} - Get an author.
async fn get_author(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AuthorId>,
) -> ApiResult<Json<Author>> {
    state
        .store()
        .get_author(id)
        .await?
        .map(Json)
        .ok_or_else(author_not_found)
}

/// PUT /authors/{id} - Replace an author's name and email.
///
/// # Response
///
/// - 200 OK: the updated author
/// - 400 Bad Request: invalid input, or email registered to another author
/// - 404 Not Found: no author with this id
async fn update_author(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AuthorId>,
    ValidJson(input): ValidJson<AuthorInput>,
) -> ApiResult<Json<Author>> {
    let author = state
        .store()
        .update_author(id, &input)
        .await?
        .ok_or_else(author_not_found)?;

    tracing::info!(author_id = %author.id, "Author updated");

    Ok(Json(author))
}

/// DELETE /authors/{id} - Delete an author and all of their posts.
async fn delete_author(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AuthorId>,
) -> ApiResult<StatusCode> {
    if !state.store().delete_author(id).await? {
        return Err(author_not_found());
    }

    tracing::info!(author_id = %id, "Author deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /authors/{id}/posts - List one author's posts.
///
/// Returns 404 when the author does not exist, rather than an empty list.
async fn list_author_posts(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AuthorId>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> ApiResult<Json<Vec<Post>>> {
    let store = state.store();

    if !store.author_exists(id).await? {
        return Err(author_not_found());
    }

    let posts = store.list_posts(page, Some(id)).await?;

    Ok(Json(posts))
}

/// Build author routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route(
            "/authors/{id}",
            get(get_author).put(update_author).delete(delete_author),
        )
        .route("/authors/{id}/posts", get(list_author_posts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_not_found_is_404() {
        let err = author_not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Author not found");
    }

    #[test]
    fn test_author_input_deserialize() {
        let json = r#"{"name": "Ada", "email": "ada@x.io"}"#;
        let input: AuthorInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "ada@x.io");
    }

    #[test]
    fn test_routes_build() {
        let _router: Router<AppState> = routes();
    }
}
