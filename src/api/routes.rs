//! API route configuration.

use crate::api::handlers::{
    create_string_handler, delete_string_handler, filter_natural_language_handler,
    get_string_handler, list_strings_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes for the string analysis API.
///
/// # Endpoints
///
/// - `POST   /strings`                            - Analyze and store a string
/// - `GET    /strings`                            - List records with optional filters
/// - `GET    /strings/filter-by-natural-language` - Filter records by free-text query
/// - `GET    /strings/{value}`                    - Retrieve a record by value
/// - `DELETE /strings/{value}`                    - Delete a record by value
pub fn string_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/strings",
            get(list_strings_handler).post(create_string_handler),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(filter_natural_language_handler),
        )
        .route(
            "/strings/{value}",
            get(get_string_handler).delete(delete_string_handler),
        )
}
