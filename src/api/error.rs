//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::url::UrlError;
use crate::Error;

/// Failure surfaced to the client as a status code and a JSON string body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Serialization(err) => {
                ApiError::bad_request(format!("Malformed request body: {err}"))
            }
            err => {
                // Storage details stay in the log.
                tracing::error!(error = %err, "Request failed");
                ApiError::internal()
            }
        }
    }
}

impl From<UrlError> for ApiError {
    fn from(err: UrlError) -> Self {
        match err {
            UrlError::InvalidId(_) => ApiError::bad_request(err.to_string()),
            UrlError::UnknownPath(_) => ApiError::not_found("Not found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.message)).into_response()
    }
}
