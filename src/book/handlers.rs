//! REST API handlers for bookshelf operations
//!
//! This module maps the five store operations onto `/books` endpoints and
//! wraps their results in the `{status, message, data}` envelope.

use super::{
    errors::{Action, ApiError},
    helpers::success_body,
    models::{BookInput, ListQuery},
    state::SharedState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Creates routes for book-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route(
            "/books/:bookId",
            get(get_book).put(update_book).delete(delete_book),
        )
}

/// Endpoint: POST /books
async fn add_book(
    State(state): State<SharedState>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::invalid_body(Action::Add, e))?;

    let book_id = state
        .books
        .create(input)
        .map_err(|e| ApiError::book(Action::Add, e))?;

    Ok((
        StatusCode::CREATED,
        Json(success_body(
            Some("Book added successfully"),
            Some(json!({ "bookId": book_id })),
        )),
    ))
}

/// Endpoint: GET /books
/// Lists `{id, name, publisher}` of every book matching the query filters.
async fn list_books(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let books = match query.into_filter() {
        Some(filter) => state.books.list(&filter),
        None => Vec::new(),
    };

    Json(success_body(None, Some(json!({ "books": books }))))
}

/// Endpoint: GET /books/:bookId
async fn get_book(
    State(state): State<SharedState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let book = state
        .books
        .get(&book_id)
        .map_err(|e| ApiError::book(Action::Fetch, e))?;

    Ok(Json(success_body(None, Some(json!({ "book": book })))))
}

/// Endpoint: PUT /books/:bookId
async fn update_book(
    State(state): State<SharedState>,
    Path(book_id): Path<String>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::invalid_body(Action::Update, e))?;

    state
        .books
        .update(&book_id, input)
        .map_err(|e| ApiError::book(Action::Update, e))?;

    Ok(Json(success_body(Some("Book updated successfully"), None)))
}

/// Endpoint: DELETE /books/:bookId
async fn delete_book(
    State(state): State<SharedState>,
    Path(book_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .books
        .delete(&book_id)
        .map_err(|e| ApiError::book(Action::Delete, e))?;

    Ok(Json(success_body(Some("Book deleted successfully"), None)))
}
