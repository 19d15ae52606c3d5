//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. The suggestion
//! endpoint is the one exception and returns [`SuggestionsResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Outcome of a staff bulk action.
#[derive(Debug, Serialize)]
pub struct BulkActionResponse {
    /// Number of rows actually changed.
    pub updated: u64,
    pub message: String,
}

/// `{ "suggestions": [...] }` body of the search-as-you-type endpoint.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}
