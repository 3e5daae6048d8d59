use crate::domain::schema::{load_author, AuthorDetailView, AuthorView};
use crate::error::{ApiError, ApiResult};
use crate::transport::http::handlers::common::{json_payload, path_id};
use crate::transport::http::types::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

const AUTHOR_NOT_FOUND: &str = "Author not found";

#[utoipa::path(
    get,
    path = "/authors",
    responses(
        (status = 200, description = "Every author", body = [AuthorView]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_authors_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<AuthorView>>> {
    let authors = state.store.list_authors().await?;
    Ok(Json(authors.iter().map(AuthorView::from).collect()))
}

#[utoipa::path(
    post,
    path = "/authors",
    request_body = NewAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorView),
        (status = 400, description = "Validation failed: field name to messages"),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn create_author_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthorView>)> {
    let new_author = load_author(&json_payload(body)?)?;
    let author = state.store.insert_author(new_author).await?;
    tracing::info!(author_id = author.id, "created author");
    Ok((StatusCode::CREATED, Json(AuthorView::from(&author))))
}

#[utoipa::path(
    get,
    path = "/authors/{author_id}",
    params(("author_id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author with its books", body = AuthorDetailView),
        (status = 404, description = "Author not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_author_handler(
    State(state): State<AppState>,
    author_id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<AuthorDetailView>> {
    let author_id = path_id(author_id, AUTHOR_NOT_FOUND)?;
    let author = state
        .store
        .get_author_by_id(author_id)
        .await?
        .ok_or(ApiError::NotFound(AUTHOR_NOT_FOUND))?;
    let books = state.store.get_books_by_author_id(author_id).await?;
    Ok(Json(AuthorDetailView::new(&author, &books)))
}

#[utoipa::path(
    delete,
    path = "/authors/{author_id}",
    params(("author_id" = i32, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author and its books deleted"),
        (status = 404, description = "Author not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn delete_author_handler(
    State(state): State<AppState>,
    author_id: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let author_id = path_id(author_id, AUTHOR_NOT_FOUND)?;
    if state.store.get_author_by_id(author_id).await?.is_none() {
        return Err(ApiError::NotFound(AUTHOR_NOT_FOUND));
    }
    state.store.delete_author_by_id(author_id).await?;
    tracing::info!(author_id, "deleted author and its books");
    Ok(StatusCode::NO_CONTENT)
}
