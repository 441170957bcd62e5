//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookResponse, MessageResponse},
    AppState,
};

use super::{parse_book_id, JsonBody};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, ordered by ID", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books())
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid book ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Book not found", body = String, content_type = "text/plain")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_book_id(&id)?;
    let book = state.services.catalog.get_book(id)?;
    Ok(Json(book))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(book): JsonBody<Book>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.create_book(book)?;
    Ok(Json(BookResponse {
        message: "New Book Added Successfully".to_string(),
        book,
    }))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid book ID or malformed JSON body", body = String, content_type = "text/plain"),
        (status = 404, description = "Book not found", body = String, content_type = "text/plain")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<JsonBody<Book>, AppError>,
) -> AppResult<Json<BookResponse>> {
    let id = parse_book_id(&id)?;
    let book = state
        .services
        .catalog
        .update_book(id, payload.map(|JsonBody(book)| book))?;
    Ok(Json(BookResponse {
        message: "Book updated successfully".to_string(),
        book,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Invalid book ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Book not found", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_book_id(&id)?;
    state.services.catalog.delete_book(id)?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

/// Restore the seed catalog
#[utoipa::path(
    post,
    path = "/books/reset",
    tag = "books",
    responses(
        (status = 200, description = "Catalog reset", body = MessageResponse)
    )
)]
pub async fn reset_books(State(state): State<AppState>) -> Json<MessageResponse> {
    state.services.catalog.reset_books();
    Json(MessageResponse::new("Book list reset to its original state"))
}
