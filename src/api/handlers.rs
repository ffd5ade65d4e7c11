//! Per-verb dispatch
//!
//! Each handler parses the request path into a resource name and primary
//! key, then picks the repository call for that verb and resource. Anything
//! without a match is answered with 404.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::url::ParsedUrl;
use crate::api::AppState;
use crate::types::{NewBook, NewCategory, NewReview};
use crate::Error;

const BOOKS: &str = "books";
const REVIEWS: &str = "reviews";
const CATEGORIES: &str = "categories";

/// `GET /<resource>[/<id>]`
pub async fn dispatch_get(State(state): State<AppState>, uri: Uri) -> Result<Response, ApiError> {
    let url = ParsedUrl::parse(uri.path())?;

    match (url.requested_resource.as_str(), url.pk) {
        (BOOKS, 0) => Ok(Json(state.books().list().await?).into_response()),
        (BOOKS, pk) => match state.books().get(pk).await? {
            Some(book) => Ok(Json(book).into_response()),
            None => Err(ApiError::not_found("Book not found")),
        },
        (REVIEWS, 0) => Ok(Json(state.reviews().list().await?).into_response()),
        (REVIEWS, pk) => match state.reviews().get(pk).await? {
            Some(review) => Ok(Json(review).into_response()),
            None => Err(ApiError::not_found("Review not found")),
        },
        (CATEGORIES, 0) => Ok(Json(state.categories().list().await?).into_response()),
        _ => Err(route_not_found(Method::GET, &url)),
    }
}

/// `POST /<resource>`; any id segment is ignored.
pub async fn dispatch_post(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ApiError> {
    let url = ParsedUrl::parse(uri.path())?;

    match url.requested_resource.as_str() {
        BOOKS => {
            let payload: NewBook = parse_body(&body)?;
            let created = state.books().create(payload).await?;
            Ok((StatusCode::CREATED, Json(created)).into_response())
        }
        REVIEWS => {
            let payload: NewReview = parse_body(&body)?;
            let created = state.reviews().create(payload).await?;
            Ok((StatusCode::CREATED, Json(created)).into_response())
        }
        CATEGORIES => {
            let payload: NewCategory = parse_body(&body)?;
            let created = state.categories().create(payload).await?;
            Ok((StatusCode::CREATED, Json(created)).into_response())
        }
        _ => Err(route_not_found(Method::POST, &url)),
    }
}

/// `PUT /books/<id>`
pub async fn dispatch_put(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ApiError> {
    let url = ParsedUrl::parse(uri.path())?;

    match (url.requested_resource.as_str(), url.pk) {
        (BOOKS, pk) if pk != 0 => {
            let payload: NewBook = parse_body(&body)?;
            if state.books().update(pk, &payload).await? {
                Ok(StatusCode::NO_CONTENT.into_response())
            } else {
                Err(ApiError::not_found("Book not found"))
            }
        }
        _ => Err(route_not_found(Method::PUT, &url)),
    }
}

/// `DELETE /books/<id>` and `DELETE /reviews/<id>`
pub async fn dispatch_delete(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let url = ParsedUrl::parse(uri.path())?;

    match (url.requested_resource.as_str(), url.pk) {
        (BOOKS, pk) if pk != 0 => {
            if state.books().delete(pk).await? {
                Ok(StatusCode::NO_CONTENT.into_response())
            } else {
                Err(ApiError::not_found("Book not found"))
            }
        }
        (REVIEWS, pk) if pk != 0 => {
            if state.reviews().delete(pk).await? {
                Ok(StatusCode::NO_CONTENT.into_response())
            } else {
                Err(ApiError::not_found("Review not found"))
            }
        }
        _ => Err(route_not_found(Method::DELETE, &url)),
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| Error::from(err).into())
}

fn route_not_found(method: Method, url: &ParsedUrl) -> ApiError {
    tracing::debug!(
        %method,
        resource = %url.requested_resource,
        pk = url.pk,
        "No route for request"
    );
    ApiError::not_found("Not found")
}
