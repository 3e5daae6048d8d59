use crate::domain::schema::{load_book, BookView};
use crate::error::{ApiError, ApiResult, MessageResponse};
use crate::transport::http::handlers::common::{json_payload, path_id};
use crate::transport::http::types::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

const BOOK_NOT_FOUND: &str = "Book not found";

#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "Every book", body = [BookView]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_books_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<BookView>>> {
    let books = state.store.list_books().await?;
    Ok(Json(books.iter().map(BookView::from).collect()))
}

#[utoipa::path(
    post,
    path = "/books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = BookView),
        (status = 400, description = "Validation failed: field name to messages"),
        (status = 404, description = "Author not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn create_book_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BookView>)> {
    let new_book = load_book(&json_payload(body)?)?;
    let book = state.store.insert_book(new_book).await?;
    tracing::info!(book_id = book.id, author_id = book.author_id, "created book");
    Ok((StatusCode::CREATED, Json(BookView::from(&book))))
}

#[utoipa::path(
    get,
    path = "/books/{book_id}",
    params(("book_id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = BookView),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_book_handler(
    State(state): State<AppState>,
    book_id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<BookView>> {
    let book_id = path_id(book_id, BOOK_NOT_FOUND)?;
    let book = state
        .store
        .get_book_by_id(book_id)
        .await?
        .ok_or(ApiError::NotFound(BOOK_NOT_FOUND))?;
    Ok(Json(BookView::from(&book)))
}

#[utoipa::path(
    put,
    path = "/books/{book_id}",
    params(("book_id" = i32, Path, description = "Book id")),
    request_body = NewBook,
    responses(
        (status = 200, description = "Book replaced", body = BookView),
        (status = 400, description = "Validation failed: field name to messages"),
        (status = 404, description = "Book or author not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn update_book_handler(
    State(state): State<AppState>,
    book_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> ApiResult<Json<BookView>> {
    let book_id = path_id(book_id, BOOK_NOT_FOUND)?;
    let existing = state
        .store
        .get_book_by_id(book_id)
        .await?
        .ok_or(ApiError::NotFound(BOOK_NOT_FOUND))?;

    let replacement = load_book(&json_payload(body)?)?;
    let book = replacement.into_book(existing.id);
    state.store.update_book(&book).await?;
    tracing::info!(book_id = book.id, "updated book");
    Ok(Json(BookView::from(&book)))
}

#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    params(("book_id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn delete_book_handler(
    State(state): State<AppState>,
    book_id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let book_id = path_id(book_id, BOOK_NOT_FOUND)?;
    if state.store.get_book_by_id(book_id).await?.is_none() {
        return Err(ApiError::NotFound(BOOK_NOT_FOUND));
    }
    state.store.delete_book_by_id(book_id).await?;
    tracing::info!(book_id, "deleted book");
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
