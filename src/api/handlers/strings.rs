//! Handlers for string analysis endpoints (create, list, get, delete, filter).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::strings::{
    CreateStringRequest, ListStringsParams, NaturalLanguageParams, StringListResponse,
    StringRecordResponse,
};
use crate::domain::query::interpret;
use crate::error::AppError;
use crate::state::AppState;

/// Analyzes a string and stores the resulting record.
///
/// # Endpoint
///
/// `POST /strings`
///
/// # Request Body
///
/// ```json
/// {
///   "value": "Racecar"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "id": 1,
///   "value": "Racecar",
///   "length": 7,
///   "is_palindrome": true,
///   "unique_characters": 5,
///   "word_count": 1,
///   "content_hash": "af3fc2f418e443ecbb5b10f78551a235c64c81c8141b8a4e4eb0a6acb916f2d5",
///   "character_frequency": { "R": 1, "a": 2, "c": 2, "e": 1, "r": 1 },
///   "created_at": "2026-08-23T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `value` is empty.
/// Returns 409 Conflict if the trimmed value was already analyzed.
pub async fn create_string_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStringRequest>,
) -> Result<(StatusCode, Json<StringRecordResponse>), AppError> {
    payload.validate()?;

    let record = state.analysis_service.create_string(&payload.value).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists stored records with optional structured filters.
///
/// # Endpoint
///
/// `GET /strings`
///
/// # Query Parameters
///
/// - `min_length` - inclusive lower bound on length
/// - `max_length` - inclusive upper bound on length
/// - `is_palindrome` - `true` or `false`
///
/// All parameters are optional; without any, every stored record is
/// returned in insertion order.
///
/// # Errors
///
/// Returns 400 Bad Request if a parameter does not parse.
pub async fn list_strings_handler(
    State(state): State<AppState>,
    Query(params): Query<ListStringsParams>,
) -> Result<Json<StringListResponse>, AppError> {
    let filter = params.to_filter();
    let records = state.analysis_service.list_strings(&filter).await?;

    Ok(Json(StringListResponse::from_records(records)))
}

/// Retrieves a single record by its exact value.
///
/// # Endpoint
///
/// `GET /strings/{value}`
///
/// # Errors
///
/// Returns 404 Not Found if the value was never analyzed.
pub async fn get_string_handler(
    Path(value): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StringRecordResponse>, AppError> {
    let record = state.analysis_service.get_string(&value).await?;

    Ok(Json(record.into()))
}

/// Deletes a record by its exact value.
///
/// # Endpoint
///
/// `DELETE /strings/{value}`
///
/// # Errors
///
/// Returns 404 Not Found if the value was never analyzed.
pub async fn delete_string_handler(
    Path(value): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.analysis_service.delete_string(&value).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Filters stored records by a free-text query.
///
/// # Endpoint
///
/// `GET /strings/filter-by-natural-language?query=...`
///
/// # Recognized Phrases
///
/// - `palindrome` - keeps only palindromes
/// - `longer than N` - keeps records with length strictly greater than N
/// - `shorter than N` - keeps records with length strictly less than N
///
/// Phrases combine conjunctively. Anything unrecognized is ignored, so an
/// unparseable query simply returns every record; the endpoint never fails
/// on query content.
///
/// # Example
///
/// `GET /strings/filter-by-natural-language?query=palindromes longer than 3`
pub async fn filter_natural_language_handler(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<StringListResponse>, AppError> {
    let query = params.query.unwrap_or_default();
    let filter = interpret(&query);

    metrics::counter!("natural_language_queries_total").increment(1);

    let records = state.analysis_service.list_strings(&filter).await?;

    Ok(Json(StringListResponse::from_records(records)))
}
