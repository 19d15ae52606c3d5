//! Unified catalog search and search-as-you-type suggestions.

use axum::extract::{Query, State};
use axum::Json;
use mfc_core::search::{normalize_query, SEARCH_GROUP_LIMIT};
use mfc_core::suggest::{
    assemble, MAX_OFFICE_SUGGESTIONS, MAX_SERVICE_SUGGESTIONS, MIN_QUERY_CHARS, POPULAR_TERMS,
};
use mfc_db::models::news::{NewsFilter, NewsItem};
use mfc_db::models::office::{OfficeFilter, OfficeSummary};
use mfc_db::models::service::{ServiceFilter, ServiceWithCategory};
use mfc_db::repositories::{NewsRepo, OfficeRepo, ServiceRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::{DataResponse, SuggestionsResponse};
use crate::state::AppState;

/// Grouped search hits, each group capped at [`SEARCH_GROUP_LIMIT`].
#[derive(Debug, Default, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub services: Vec<ServiceWithCategory>,
    pub offices: Vec<OfficeSummary>,
    pub news: Vec<NewsItem>,
}

/// GET /api/v1/search?q=
///
/// An empty query returns empty groups rather than the whole catalog.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResults>>> {
    let Some(q) = normalize_query(Some(&params.q)) else {
        return Ok(Json(DataResponse {
            data: SearchResults::default(),
        }));
    };

    let cap = SEARCH_GROUP_LIMIT as usize;

    let mut services = ServiceRepo::list_filtered(
        &state.pool,
        &ServiceFilter {
            q: Some(q.clone()),
            ..Default::default()
        },
    )
    .await?;
    services.truncate(cap);

    let mut offices = OfficeRepo::list_filtered(
        &state.pool,
        &OfficeFilter {
            q: Some(q.clone()),
            ..Default::default()
        },
    )
    .await?;
    offices.truncate(cap);

    let mut news = NewsRepo::list_filtered(
        &state.pool,
        &NewsFilter {
            q: Some(q.clone()),
            ..Default::default()
        },
    )
    .await?;
    news.truncate(cap);

    Ok(Json(DataResponse {
        data: SearchResults {
            query: q,
            services,
            offices,
            news,
        },
    }))
}

/// GET /api/v1/search/suggestions?q=
///
/// Returns `{"suggestions": [...]}` with at most eight distinct entries.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SuggestionsResponse>> {
    let q = params.q.trim();
    if q.chars().count() < MIN_QUERY_CHARS {
        return Ok(Json(SuggestionsResponse {
            suggestions: Vec::new(),
        }));
    }

    let services =
        ServiceRepo::suggest_names(&state.pool, q, MAX_SERVICE_SUGGESTIONS as i64).await?;
    let offices = OfficeRepo::suggest(&state.pool, q, MAX_OFFICE_SUGGESTIONS as i64).await?;

    Ok(Json(SuggestionsResponse {
        suggestions: assemble(q, &services, &offices, POPULAR_TERMS),
    }))
}
