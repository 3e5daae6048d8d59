//! Error taxonomy: store failures and their HTTP rendering.

use crate::domain::schema::ValidationErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Postgres SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Data access failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database url")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("failed to connect to database")]
    Connect(#[source] sqlx::Error),

    #[error(transparent)]
    Query(#[from] sqlx::Error),

    /// The referenced author row does not exist.
    #[error("author {0} does not exist")]
    MissingAuthor(i32),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// True when `err` is a foreign-key violation reported by the store.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION),
        _ => false,
    }
}

/// JSON body carried by every non-validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request failures as seen by a handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(StoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingAuthor(_) => ApiError::NotFound("Author not found"),
            other => ApiError::Store(other),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => (status, Json(errors)).into_response(),
            ApiError::NotFound(message) => (status, Json(MessageResponse::new(message))).into_response(),
            ApiError::Store(err) => {
                let err = anyhow::Error::new(err);
                tracing::error!(error = %format!("{:#}", err), "store failure");
                (status, Json(MessageResponse::new("Internal server error"))).into_response()
            }
        }
    }
}
