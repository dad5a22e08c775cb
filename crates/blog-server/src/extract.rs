//! Extractors that reject malformed input with JSON `ApiError` bodies.
//!
//! axum's stock `Json`, `Query` and `Path` extractors answer bad input with
//! plain-text responses. These wrappers run the stock extractor, convert the
//! rejection into [`ApiError::BadRequest`], and for bodies and query strings
//! also run [`Validate`] before the handler sees the value.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use blog_core::{AuthorInput, NewPost, Pagination, PostInput, ValidationError};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Input types that can check themselves before reaching the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for AuthorInput {
    fn validate(&self) -> Result<(), ValidationError> {
        AuthorInput::validate(self)
    }
}

impl Validate for PostInput {
    fn validate(&self) -> Result<(), ValidationError> {
        PostInput::validate(self)
    }
}

impl Validate for NewPost {
    fn validate(&self) -> Result<(), ValidationError> {
        NewPost::validate(self)
    }
}

impl Validate for Pagination {
    fn validate(&self) -> Result<(), ValidationError> {
        Pagination::validate(self)
    }
}

/// JSON body that has been deserialized and validated.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string that has been deserialized and validated.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameters with JSON rejections.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
