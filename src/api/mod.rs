//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequest, Request},
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON request body.
///
/// Decodes whatever body was sent, regardless of `Content-Type`, and turns
/// any decoder failure into a 400 carrying the decoder's message. Only the
/// first JSON value is read; anything after it is ignored.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        match serde_json::Deserializer::from_slice(&bytes).into_iter::<T>().next() {
            Some(Ok(value)) => Ok(JsonBody(value)),
            Some(Err(e)) => Err(AppError::BadRequest(e.to_string())),
            None => Err(AppError::BadRequest("EOF".to_string())),
        }
    }
}

/// Parse a `{id}` path segment
pub fn parse_book_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::invalid_book_id())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    // Anything outside the API is a static asset
    let static_files =
        ServeDir::new(&state.config.static_files.dir).append_index_html_on_directories(true);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        // Other methods fall through to the id handlers, which reject "reset"
        .route(
            "/books/reset",
            post(books::reset_books)
                .get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
