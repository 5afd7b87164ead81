use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use roster_store::StudentId;

/// Methods accepted on `students/<id>`, sent in the `Allow` header of a 405.
pub const ITEM_METHODS: &str = "GET, PUT, DELETE";

/// Errors surfaced by the HTTP layer.
///
/// Client-facing variants render as the plain-text response body, so their
/// messages are the exact strings a client sees.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid student ID")]
    InvalidId { segment: String },

    #[error("Invalid path")]
    InvalidPath { path: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Student not found")]
    StudentNotFound(StudentId),

    #[error("Not found")]
    RouteNotFound { path: String },

    #[error("Method not allowed")]
    MethodNotAllowed { method: String },

    #[error("store error: {0}")]
    Store(#[from] roster_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::InvalidId { .. } | Self::InvalidPath { .. } | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found
            Self::StudentNotFound(_) | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return (status, "Internal server error").into_response();
        }

        match &self {
            Self::InvalidId { segment } => tracing::warn!(%segment, "rejected student id"),
            Self::MethodNotAllowed { method } => tracing::warn!(%method, "method not allowed"),
            Self::RouteNotFound { path } => tracing::debug!(%path, "no route"),
            other => tracing::warn!(error = %other, "request rejected"),
        }

        let allow = matches!(self, Self::MethodNotAllowed { .. });
        let mut response = (status, self.to_string()).into_response();
        if allow {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ITEM_METHODS));
        }
        response
    }
}
